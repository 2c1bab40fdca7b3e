//! Level domain: tests for level extents.

use super::LevelExtents;

#[test]
fn test_extents_reorder_swapped_edges() {
    let extents = LevelExtents::new(300.0, -100.0);

    assert_eq!(extents.min_x, -100.0);
    assert_eq!(extents.max_x, 300.0);
    assert_eq!(extents.width(), 400.0);
    assert_eq!(extents.center_x(), 100.0);
}

#[test]
fn test_zero_width_level() {
    let extents = LevelExtents::new(50.0, 50.0);

    assert_eq!(extents.width(), 0.0);
    assert_eq!(extents.center_x(), 50.0);
}
