//! Property tests for the shape/dimension model.

use proptest::prelude::*;
use tablekit_designer::{Dimension, GeometrySeed, TableGeometry, TableShape};

#[test]
fn zero_delta_is_identity() {
    let g = TableGeometry::default();
    for field in [Dimension::Width, Dimension::Height, Dimension::CornerCount] {
        assert_eq!(g.adjust_dimension(field, 0.0), g);
    }
}

#[test]
fn radius_adjustment_starts_from_effective_radius() {
    // No explicit radius: the delta applies on top of min(w, h) / 2.
    let g = TableGeometry::with_defaults(&GeometrySeed {
        width: Some(80.0),
        height: Some(60.0),
        ..Default::default()
    });
    let g = g.adjust_dimension(Dimension::Radius, 5.0);
    assert_eq!(g.radius, Some(35.0));
}

#[test]
fn changing_shape_preserves_extents() {
    let g = TableGeometry::with_defaults(&GeometrySeed {
        width: Some(120.0),
        height: Some(80.0),
        ..Default::default()
    });
    let g = g.change_shape(TableShape::Oval);
    assert_eq!(g.width, 120.0);
    assert_eq!(g.height, 80.0);
    assert_eq!(g.shape, TableShape::Oval);
}

proptest! {
    #[test]
    fn extents_stay_in_bounds(
        start in 10.0..500.0f64,
        delta in -2000.0..2000.0f64,
    ) {
        let g = TableGeometry::with_defaults(&GeometrySeed {
            width: Some(start),
            ..Default::default()
        });
        let adjusted = g.adjust_dimension(Dimension::Width, delta);
        prop_assert!(adjusted.width >= 10.0);
        prop_assert!(adjusted.width <= 500.0);
    }

    #[test]
    fn unclamped_adjustments_are_reversible(
        start in 10.0..500.0f64,
        delta in -490.0..490.0f64,
    ) {
        // Only meaningful when the intermediate value avoids both
        // clamp boundaries.
        prop_assume!(start + delta > 10.0 && start + delta < 500.0);

        let g = TableGeometry::with_defaults(&GeometrySeed {
            height: Some(start),
            ..Default::default()
        });
        let round_trip = g
            .adjust_dimension(Dimension::Height, delta)
            .adjust_dimension(Dimension::Height, -delta);
        prop_assert!((round_trip.height - g.height).abs() < 1e-9);
    }

    #[test]
    fn rotation_composes_additively(
        d1 in -10_000..10_000i32,
        d2 in -10_000..10_000i32,
    ) {
        let g = TableGeometry::default();
        let stepped = g.rotate(d1).rotate(d2);
        let combined = g.rotate(d1 + d2);
        prop_assert_eq!(stepped.rotation, combined.rotation);
    }

    #[test]
    fn rotation_is_always_canonical(delta in -10_000..10_000i32) {
        let g = TableGeometry::default().rotate(delta);
        prop_assert!(g.rotation >= 0);
        prop_assert!(g.rotation < 360);
    }

    #[test]
    fn corner_count_stays_in_bounds(
        start in 3u32..=12,
        delta in -20.0..20.0f64,
    ) {
        let g = TableGeometry::with_defaults(&GeometrySeed {
            corner_count: Some(start),
            ..Default::default()
        });
        let adjusted = g.adjust_dimension(Dimension::CornerCount, delta);
        prop_assert!(adjusted.corner_count >= 3);
        prop_assert!(adjusted.corner_count <= 12);
    }
}
