use super::state_with_image;
use approx::assert_relative_eq;
use curve_warp_editor::app::DragState;
use curve_warp_editor::{AppController, AppIntent, Vector3};

#[test]
fn test_press_on_control_point_and_drag_moves_it() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    let point = state.config.control_points()[1];

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { world_pos: point })
        .expect("PointerPressed sollte funktionieren");
    assert_eq!(state.interaction.active_control_point(), Some(1));

    let target = point + Vector3::new(0.25, 0.4, 0.0);
    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { world_pos: target })
        .expect("PointerMoved sollte funktionieren");

    let moved = state.config.control_points()[1];
    assert_relative_eq!(moved.x, target.x, epsilon = 1e-6);
    assert_relative_eq!(moved.y, target.y, epsilon = 1e-6);

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");
    assert!(!state.interaction.is_dragging());
}

#[test]
fn test_band_drag_shifts_path_offset_within_bounds() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    let curve = state.config.curve().unwrap();
    let press = curve.point_at_normalized(0.5);
    let tangent = curve.tangent_at_normalized(0.5);

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { world_pos: press })
        .expect("PointerPressed sollte funktionieren");
    assert!(matches!(state.interaction.drag, DragState::Path(_)));

    // Entlang der Tangente ziehen erhöht den Offset
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: press + tangent * 0.3,
            },
        )
        .expect("PointerMoved sollte funktionieren");
    let offset = state.config.path_offset();
    assert!(offset > 0.0);
    assert!(offset <= state.config.max_path_offset());

    // Sehr weit ziehen klemmt auf den Maximalwert
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: press + tangent * 100.0,
            },
        )
        .expect("PointerMoved sollte funktionieren");
    assert_relative_eq!(state.config.path_offset(), state.config.max_path_offset());

    // Control points bleiben unverändert
    assert_eq!(
        state.config.control_points(),
        curve_warp_editor::WarpConfig::default_control_points().as_slice()
    );
}

#[test]
fn test_press_far_from_curve_starts_no_drag() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    let before = state.config.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vector3::new(0.0, 5.0, 0.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vector3::new(1.0, 6.0, 0.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");

    assert!(!state.interaction.is_dragging());
    assert_eq!(state.config, before);
}

#[test]
fn test_hover_tracks_control_point_under_pointer() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    let point = state.config.control_points()[3];

    controller
        .handle_intent(&mut state, AppIntent::PointerMoved { world_pos: point })
        .expect("PointerMoved sollte funktionieren");
    assert_eq!(state.interaction.hovered_point, Some(3));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vector3::new(0.0, 5.0, 0.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    assert_eq!(state.interaction.hovered_point, None);
    assert!(!state.interaction.hovering_band);
}
