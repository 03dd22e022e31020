//! Tests for the side and point enumerations.

use super::*;

/// Side order is part of the storage layout and must never change.
#[test]
fn test_side_indices_follow_declaration_order() {
    for (position, side) in Side::ALL.iter().enumerate() {
        assert_eq!(side.index(), position);
        assert_eq!(Side::from_index(position), Some(*side));
    }
    assert_eq!(Side::from_index(SIDE_COUNT), None);
}

#[test]
fn test_display_names() {
    assert_eq!(Side::Normal.to_string(), "normal");
    assert_eq!(Point::RightBase.to_string(), "right base");
}

#[test]
fn test_point_order_matches_winding() {
    assert_eq!(Point::ALL, [Point::Tip, Point::LeftBase, Point::RightBase]);
}

#[test]
fn test_serializes_as_variant_names() {
    assert_eq!(serde_json::to_string(&Side::Base).unwrap(), "\"Base\"");
    let point: Point = serde_json::from_str("\"LeftBase\"").unwrap();
    assert_eq!(point, Point::LeftBase);
}
