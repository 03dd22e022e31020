//! Tests for the shared point and direction pools.

use super::*;
use crate::core::vector::{DVec3, Vec3};
use crate::validate::check_pool_directions;

fn assert_near(actual: DVec3, expected: DVec3) {
    assert!(
        actual.abs_diff_eq(expected, 1.0e-9),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_inserted_triangle_round_trips() {
    let mut pools: PrismPools<DVec3> = PrismPools::new();
    let (p0, p1, p2) = (
        DVec3::new(1.0, 3.0, -3.0),
        DVec3::new(-2.0, 1.0, 0.0),
        DVec3::new(3.0, 0.0, 2.0),
    );
    let prism = pools.insert_triangle(p0, p1, p2, 42_u64).unwrap();

    assert_eq!(pools.point_count(), 1);
    assert_eq!(pools.direction_count(), 4);
    assert_eq!(*prism.user_data(), 42);

    let [tip, left, right] = pools.vertices(&prism);
    assert_eq!(tip, p0);
    assert_near(left, p1);
    assert_near(right, p2);
    assert_eq!(pools.point(&prism, Point::LeftBase), left);

    let geometry = create(p0, p1, p2);
    for side in Side::ALL {
        assert_eq!(pools.direction(&prism, side), geometry.direction(side));
    }
    assert_eq!(
        check_pool_directions(&prism, pools.directions(), pools.config().tolerance),
        Ok(())
    );
}

/// Two coplanar triangles with the same winding share their normal slot.
#[test]
fn test_coplanar_neighbours_share_the_normal() {
    let mut pools: PrismPools<DVec3, u16> = PrismPools::new();
    let corner = DVec3::new(1.0, 1.0, 0.0);
    let a = pools.insert_triangle(DVec3::ZERO, DVec3::X, DVec3::Y, ()).unwrap();
    let b = pools.insert_triangle(DVec3::X, corner, DVec3::Y, ()).unwrap();

    assert_eq!(a.side_index(Side::Normal), b.side_index(Side::Normal));
    assert_eq!(pools.direction_count(), 7);
    assert_eq!(pools.point_count(), 2);

    assert_near(pools.point(&b, Point::LeftBase), corner);
    assert_near(pools.point(&b, Point::RightBase), DVec3::Y);
    assert_near(pools.point(&a, Point::LeftBase), DVec3::X);
}

#[test]
fn test_repeated_triangle_reuses_every_direction() {
    let cfg = PrismConfig::new(1.0e-4, 1.0e-9, 0.0).unwrap();
    let mut pools: PrismPools<Vec3> = PrismPools::with_config(cfg);
    let (p0, p1, p2) = (Vec3::ZERO, Vec3::new(2.0, 0.5, 0.0), Vec3::new(0.0, 2.0, 1.0));

    let first = pools.insert_triangle(p0, p1, p2, ()).unwrap();
    let second = pools.insert_triangle(p0, p1, p2, ()).unwrap();

    assert_eq!(first.side_indices(), second.side_indices());
    assert_ne!(first.tip_index(), second.tip_index());
    assert_eq!(pools.direction_count(), 4);
}

#[test]
fn test_intern_shares_identical_directions_only() {
    let mut pools: PrismPools<Vec3> = PrismPools::new();
    let first = pools.intern_direction(Vec3::X).unwrap();
    let same = pools.intern_direction(Vec3::X).unwrap();
    let close = pools.intern_direction(Vec3::new(1.0, 1.0e-6, 0.0)).unwrap();

    assert_eq!(first, same);
    assert_ne!(first, close);
    assert_eq!(pools.direction_count(), 2);

    // Plain pushes never merge.
    let pushed = pools.push_direction(Vec3::X).unwrap();
    assert_eq!(pushed, 2);
}

#[test]
fn test_intern_merges_within_configured_epsilon() {
    let cfg = PrismConfig::new(1.0e-4, 1.0e-9, 1.0e-6).unwrap();
    let mut pools: PrismPools<DVec3> = PrismPools::with_config(cfg);
    let first = pools.intern_direction(DVec3::X).unwrap();
    let close = pools.intern_direction(DVec3::new(1.0 + 5.0e-7, 0.0, 0.0)).unwrap();
    let far = pools.intern_direction(DVec3::Y).unwrap();

    assert_eq!(first, close);
    assert_ne!(first, far);
    assert_eq!(pools.direction_count(), 2);
}

/// Two flat triangles whose `Base` directions differ by 5e-7 in x. The
/// second one is long and thin, so its reconstruction is very sensitive to
/// `Base`.
fn slender_pair() -> ([DVec3; 3], [DVec3; 3]) {
    let wide = [
        DVec3::new(0.0, -10.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(-1.0, -9.9e-5, 0.0),
    ];
    let slender = [
        DVec3::ZERO,
        DVec3::new(100.0, 0.01, 0.0),
        DVec3::new(-100.0, 0.0, 0.0),
    ];
    (wide, slender)
}

fn assert_reconstructs<U>(pools: &PrismPools<DVec3>, prism: &Prism<f64, u32, U>, triangle: [DVec3; 3]) {
    let [tip, left, right] = pools.vertices(prism);
    assert_eq!(tip, triangle[0]);
    assert_near(left, triangle[1]);
    assert_near(right, triangle[2]);
}

#[test]
fn test_near_identical_bases_stay_separate_by_default() {
    let (wide, slender) = slender_pair();
    let mut pools: PrismPools<DVec3> = PrismPools::new();
    let a = pools.insert_triangle(wide[0], wide[1], wide[2], ()).unwrap();
    let b = pools.insert_triangle(slender[0], slender[1], slender[2], ()).unwrap();

    assert_eq!(a.side_index(Side::Normal), b.side_index(Side::Normal));
    assert_ne!(a.side_index(Side::Base), b.side_index(Side::Base));
    assert_reconstructs(&pools, &a, wide);
    assert_reconstructs(&pools, &b, slender);
}

#[test]
fn test_tolerant_merge_falls_back_when_vertices_drift() {
    let (wide, slender) = slender_pair();
    let cfg = PrismConfig::new(1.0e-4, 1.0e-9, 1.0e-6).unwrap();
    let mut pools: PrismPools<DVec3> = PrismPools::with_config(cfg);
    let a = pools.insert_triangle(wide[0], wide[1], wide[2], ()).unwrap();
    let b = pools.insert_triangle(slender[0], slender[1], slender[2], ()).unwrap();

    // The shared +Z normal is exact; the near-identical base is refused.
    assert_eq!(a.side_index(Side::Normal), b.side_index(Side::Normal));
    assert_ne!(a.side_index(Side::Base), b.side_index(Side::Base));
    assert_eq!(pools.direction_count(), 7);
    assert_reconstructs(&pools, &a, wide);
    assert_reconstructs(&pools, &b, slender);
}

#[test]
fn test_tolerant_merge_is_kept_when_vertices_hold() {
    let cfg = PrismConfig::new(1.0e-4, 1.0e-9, 1.0e-6).unwrap();
    let mut pools: PrismPools<DVec3> = PrismPools::with_config(cfg);
    let first = [DVec3::ZERO, DVec3::X, DVec3::Y];
    let nudged = [DVec3::ZERO, DVec3::X, DVec3::new(1.0e-7, 1.0, 0.0)];
    let a = pools.insert_triangle(first[0], first[1], first[2], ()).unwrap();
    let b = pools.insert_triangle(nudged[0], nudged[1], nudged[2], ()).unwrap();

    assert_eq!(a.side_indices(), b.side_indices());
    assert_eq!(pools.direction_count(), 4);
    let [_, left, right] = pools.vertices(&b);
    assert!(left.abs_diff_eq(nudged[1], ROUND_TRIP_TOLERANCE));
    assert!(right.abs_diff_eq(nudged[2], ROUND_TRIP_TOLERANCE));
}

#[test]
fn test_degenerate_triangle_is_rejected_before_storing() {
    let mut pools: PrismPools<DVec3> = PrismPools::new();
    let result = pools.insert_triangle(DVec3::ZERO, DVec3::ONE, DVec3::ONE * 2.0, ());

    assert!(matches!(result, Err(PrismError::DegenerateTriangle { .. })));
    assert_eq!(pools.point_count(), 0);
    assert_eq!(pools.direction_count(), 0);
}

#[test]
fn test_direction_overflow_rolls_back_the_insert() {
    let mut pools: PrismPools<Vec3, u8> = PrismPools::new();
    for _ in 0..254 {
        pools.push_direction(Vec3::ZERO).unwrap();
    }

    let err = pools
        .insert_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, ())
        .unwrap_err();

    assert_eq!(err, PrismError::IndexOverflow { index: 256, max: 255 });
    assert_eq!(pools.direction_count(), 254);
    assert_eq!(pools.point_count(), 0);
}

#[test]
fn test_point_overflow_rolls_back_the_directions() {
    let mut pools: PrismPools<Vec3, u8> = PrismPools::new();
    for _ in 0..256 {
        pools.push_point(Vec3::ZERO).unwrap();
    }
    assert!(pools.push_point(Vec3::ZERO).is_err());

    let err = pools
        .insert_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, ())
        .unwrap_err();

    assert_eq!(err, PrismError::IndexOverflow { index: 256, max: 255 });
    assert_eq!(pools.direction_count(), 0);
}
