use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_warp_editor::core::{
    deform_positions_into, hit_test, DeformParams, HitTestParams,
};
use curve_warp_editor::{CatmullRomCurve, PlaneMesh, Vector3, WarpConfig};
use std::hint::black_box;

fn default_curve() -> CatmullRomCurve {
    CatmullRomCurve::new(&WarpConfig::default_control_points()).expect("Startkurve ist gültig")
}

fn bench_curve_construction(c: &mut Criterion) {
    let points = WarpConfig::default_control_points();

    c.bench_function("curve_build_arc_length_table", |b| {
        b.iter(|| {
            let curve = CatmullRomCurve::new(black_box(&points)).expect("Kurve sollte bauen");
            black_box(curve.length())
        })
    });
}

fn bench_curve_sampling(c: &mut Criterion) {
    let curve = default_curve();

    c.bench_function("curve_point_and_tangent_normalized", |b| {
        b.iter(|| {
            let mut acc = Vector3::ZERO;
            for i in 0..1024 {
                let u = i as f32 / 1023.0;
                acc += curve.point_at_normalized(black_box(u));
                acc += curve.tangent_at_normalized(black_box(u));
            }
            black_box(acc)
        })
    });
}

fn bench_deformation(c: &mut Criterion) {
    let mut group = c.benchmark_group("deform_positions");
    let curve = default_curve();
    let params = DeformParams::from_config(&WarpConfig::new());

    for &resolution in &[50u32, 150, 500] {
        let mesh = PlaneMesh::new(resolution, 1.0, 1);
        let mut out = Vec::with_capacity(mesh.vertex_count());

        group.bench_with_input(
            BenchmarkId::new("resolution", resolution),
            &mesh,
            |b, mesh| {
                b.iter(|| {
                    deform_positions_into(&curve, mesh.positions(), &params, &mut out);
                    black_box(out.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let curve = default_curve();
    let params = HitTestParams::default();
    let queries: Vec<Vector3> = (0..256)
        .map(|i| {
            let x = (i % 16) as f32 * 0.2 - 1.6;
            let y = (i / 16) as f32 * 0.2 - 1.6;
            Vector3::new(x, y, 0.0)
        })
        .collect();

    c.bench_function("hit_test_batch_256", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for query in &queries {
                if !matches!(
                    hit_test(&curve, black_box(*query), 1.0, 1.0, &params),
                    curve_warp_editor::core::PointerHit::Miss
                ) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(
    core_benches,
    bench_curve_construction,
    bench_curve_sampling,
    bench_deformation,
    bench_hit_test
);
criterion_main!(core_benches);
