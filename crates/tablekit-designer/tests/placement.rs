//! Placement solver verification: exact ring angles and edge
//! distribution parameters.

use std::f64::consts::PI;

use tablekit_designer::{
    edge_parameter, ring_angle, solve, FurnitureSlot, GeometrySeed, Side, TableGeometry,
    TableShape,
};

fn circle_table(radius: f64) -> TableGeometry {
    TableGeometry::with_defaults(&GeometrySeed {
        shape: Some(TableShape::Circle),
        radius: Some(radius),
        ..Default::default()
    })
}

fn ring_slots(n: usize) -> Vec<FurnitureSlot> {
    (0..n).map(|i| FurnitureSlot::new(Side::Ring, i)).collect()
}

#[test]
fn even_ring_angles_are_exact() {
    for n in 1..=12usize {
        for k in 0..n {
            let expected = -PI / 2.0 + 2.0 * PI * k as f64 / n as f64;
            assert!(
                (ring_angle(k, n) - expected).abs() < 1e-12,
                "n={n} k={k}"
            );
        }
    }
}

#[test]
fn four_ring_seats_land_on_the_compass_points() {
    let geometry = circle_table(30.0);
    let slots = ring_slots(4);
    let r = 30.0 + slots[0].offset_from_edge;

    let positions: Vec<(f64, f64)> = (0..4)
        .map(|i| {
            let t = solve(&slots, i, &geometry, 1.0);
            (t.x, t.y)
        })
        .collect();

    // Slot 0 top, then clockwise through right, bottom, left (+y is
    // toward the bottom edge).
    let expected = [(0.0, -r), (r, 0.0), (0.0, r), (-r, 0.0)];
    for (i, ((x, y), (ex, ey))) in positions.iter().zip(expected.iter()).enumerate() {
        assert!((x - ex).abs() < 1e-9, "slot {i} x");
        assert!((y - ey).abs() < 1e-9, "slot {i} y");
    }
}

#[test]
fn even_ring_seats_render_upright() {
    let geometry = circle_table(40.0);
    let slots = ring_slots(6);
    for i in 0..slots.len() {
        assert_eq!(solve(&slots, i, &geometry, 1.0).rotation_degrees, 0.0);
    }
}

#[test]
fn explicit_angle_wins_over_even_spacing() {
    let geometry = circle_table(30.0);
    let mut slots = ring_slots(3);
    slots[1] = FurnitureSlot::at_angle(1, 180.0);

    let t = solve(&slots, 1, &geometry, 1.0);
    let r = 30.0 + slots[1].offset_from_edge;
    assert!((t.x + r).abs() < 1e-9);
    assert!(t.y.abs() < 1e-9);
    assert_eq!(t.rotation_degrees, 180.0);
}

#[test]
fn edge_parameters_match_the_contract() {
    assert_eq!(edge_parameter(1, 1), 0.5);
    assert_eq!(edge_parameter(1, 3), 0.25);
    assert_eq!(edge_parameter(2, 3), 0.5);
    assert_eq!(edge_parameter(3, 3), 0.75);
}

#[test]
fn edge_seats_never_touch_corners() {
    let geometry = TableGeometry::default();
    let slots: Vec<FurnitureSlot> =
        (0..5).map(|_| FurnitureSlot::new(Side::Top, 0)).collect();
    let half_w = geometry.width / 2.0;
    for i in 0..slots.len() {
        let t = solve(&slots, i, &geometry, 1.0);
        assert!(t.x.abs() < half_w, "seat {i} inside the edge span");
    }
}

#[test]
fn side_rank_follows_insertion_order() {
    let geometry = TableGeometry::default();
    // Interleave sides; ranks must count same-side slots only.
    let slots = vec![
        FurnitureSlot::new(Side::Top, 0),
        FurnitureSlot::new(Side::Bottom, 0),
        FurnitureSlot::new(Side::Top, 1),
        FurnitureSlot::new(Side::Top, 2),
    ];

    let xs: Vec<f64> = [0usize, 2, 3]
        .iter()
        .map(|&i| solve(&slots, i, &geometry, 1.0).x)
        .collect();
    // Three top seats at t = 1/4, 1/2, 3/4 over a width-60 table.
    assert!((xs[0] + 15.0).abs() < 1e-9);
    assert!(xs[1].abs() < 1e-9);
    assert!((xs[2] - 15.0).abs() < 1e-9);
}

#[test]
fn perpendicular_offset_adds_to_the_half_extent() {
    let geometry = TableGeometry::with_defaults(&GeometrySeed {
        width: Some(100.0),
        height: Some(40.0),
        ..Default::default()
    });
    let slots = vec![
        FurnitureSlot::new(Side::Left, 0),
        FurnitureSlot::new(Side::Bottom, 0),
    ];
    let left = solve(&slots, 0, &geometry, 1.0);
    let bottom = solve(&slots, 1, &geometry, 1.0);
    assert!((left.x + (50.0 + 18.0)).abs() < 1e-9);
    assert!((bottom.y - (20.0 + 18.0)).abs() < 1e-9);
}

#[test]
fn circle_with_edge_slots_falls_through_without_crashing() {
    let geometry = circle_table(30.0);
    let slots = vec![FurnitureSlot::new(Side::Top, 0)];
    // Undefined by contract, but must stay total: edge math runs on
    // the width/height extents.
    let t = solve(&slots, 0, &geometry, 1.0);
    assert!(t.y < 0.0);
}
