mod common;

use common::{FakeWindowSystem, centered};
use ttyhop::Direction;
use ttyhop::geometry::Rect;
use ttyhop::neighbor::NeighborResolver;

fn window(cx: f64, cy: f64) -> Rect {
    centered(cx, cy, 200.0, 400.0)
}

#[test]
fn test_nearest_sibling_each_way() {
    let ws = FakeWindowSystem::terminal(&[
        (1, window(500.0, 500.0)),
        (2, window(550.0, 500.0)),
        (3, window(510.0, 500.0)),
        (4, window(470.0, 500.0)),
    ]);
    let current_rect = window(500.0, 500.0);
    let siblings = [1, 2, 3, 4];
    let resolver = NeighborResolver::new(&ws);

    let east = resolver
        .find_neighbor(&1, &current_rect, &siblings, Direction::East)
        .expect("east neighbor");
    assert_eq!(*east.window, 3);
    assert_eq!(east.distance, 10.0);

    let west = resolver
        .find_neighbor(&1, &current_rect, &siblings, Direction::West)
        .expect("west neighbor");
    assert_eq!(*west.window, 4);
    assert_eq!(west.distance, 30.0);
}

#[test]
fn test_current_window_is_excluded() {
    let ws = FakeWindowSystem::terminal(&[(1, window(500.0, 500.0))]);
    let current_rect = window(500.0, 500.0);
    let resolver = NeighborResolver::new(&ws);

    for direction in [Direction::East, Direction::West] {
        assert!(
            resolver
                .find_neighbor(&1, &current_rect, &[1], direction)
                .is_none()
        );
    }
    // Self is skipped by identity, before its geometry is read
    assert!(!ws.calls().contains(&"rect 1".to_string()));
}

#[test]
fn test_sibling_outside_band_is_not_eligible() {
    let current_rect = window(500.0, 500.0);
    // 0.75 * 400 = 300
    let ws = FakeWindowSystem::terminal(&[
        (1, current_rect),
        (2, window(700.0, 500.0 + 300.01)),
        (3, window(300.0, 500.0 - 299.99)),
    ]);
    let resolver = NeighborResolver::new(&ws);

    assert!(
        resolver
            .find_neighbor(&1, &current_rect, &[1, 2, 3], Direction::East)
            .is_none()
    );
    let west = resolver.find_neighbor(&1, &current_rect, &[1, 2, 3], Direction::West);
    assert_eq!(west.map(|n| *n.window), Some(3));
}

#[test]
fn test_empty_sibling_list() {
    let ws = FakeWindowSystem::terminal(&[]);
    let resolver = NeighborResolver::new(&ws);
    assert!(
        resolver
            .find_neighbor(&1, &window(0.0, 0.0), &[], Direction::East)
            .is_none()
    );
    assert!(ws.calls().is_empty());
}

#[test]
fn test_unmeasurable_sibling_is_skipped() {
    let current_rect = window(500.0, 500.0);
    let ws = FakeWindowSystem::terminal(&[(1, current_rect), (3, window(900.0, 500.0))]);
    let resolver = NeighborResolver::new(&ws);

    // Window 2 has no frame
    let east = resolver.find_neighbor(&1, &current_rect, &[1, 2, 3], Direction::East);
    assert_eq!(east.map(|n| (*n.window, n.index)), Some((3, 2)));
    assert!(ws.calls().contains(&"rect 2".to_string()));
}
