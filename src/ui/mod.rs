//! UI-Komponenten: Menü, Steuer-Panel, Input-Handling, Dialoge.

pub mod controls;
pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Jede Komponente liefert `AppIntent`s zurück und mutiert den State nicht selbst.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use controls::render_controls_panel;
pub use dialogs::{handle_file_dialogs, show_notice};
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
