//! Placement solver and scene builder benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tablekit_designer::{
    build_scene, solve, FurnitureSlot, GeometrySeed, SceneOptions, Side, SlotPlan, TableGeometry,
    TableShape, Viewport,
};

fn banquet_table() -> (TableGeometry, Vec<FurnitureSlot>) {
    let geometry = TableGeometry::with_defaults(&GeometrySeed {
        shape: Some(TableShape::Rectangle),
        width: Some(400.0),
        height: Some(120.0),
        ..Default::default()
    });
    let mut slots = Vec::new();
    for _ in 0..12 {
        slots.push(FurnitureSlot::new(Side::Top, 0));
        slots.push(FurnitureSlot::new(Side::Bottom, 0));
    }
    (geometry, slots)
}

fn round_table() -> (TableGeometry, Vec<FurnitureSlot>) {
    let geometry = TableGeometry::with_defaults(&GeometrySeed {
        shape: Some(TableShape::Circle),
        radius: Some(150.0),
        ..Default::default()
    });
    let slots = (0..40).map(|i| FurnitureSlot::new(Side::Ring, i)).collect();
    (geometry, slots)
}

fn bench_solver(c: &mut Criterion) {
    let (edge_geometry, edge_slots) = banquet_table();
    c.bench_function("solve_edge_24_seats", |b| {
        b.iter(|| {
            for index in 0..edge_slots.len() {
                black_box(solve(&edge_slots, index, &edge_geometry, 1.5));
            }
        })
    });

    let (ring_geometry, ring_slots) = round_table();
    c.bench_function("solve_ring_40_seats", |b| {
        b.iter(|| {
            for index in 0..ring_slots.len() {
                black_box(solve(&ring_slots, index, &ring_geometry, 1.5));
            }
        })
    });
}

fn bench_scene(c: &mut Criterion) {
    let (geometry, slots) = banquet_table();
    let mut plan = SlotPlan::new();
    for slot in slots {
        plan.push_slot(slot);
    }
    let viewport = Viewport::new(960.0, 540.0);
    let options = SceneOptions::default();

    c.bench_function("build_scene_banquet", |b| {
        b.iter(|| black_box(build_scene(&geometry, &plan, &viewport, &options)))
    });
}

criterion_group!(benches, bench_solver, bench_scene);
criterion_main!(benches);
