//! Nearest left/right sibling window search.

use crate::geometry::{Rect, horizontal_delta, in_band, vertical_offset};
use crate::platform::WindowSystem;
use ttyhop_config::Direction;

/// A sibling window measured relative to the current window during one scan.
#[derive(Debug)]
pub struct Candidate<'w, W> {
    pub window: &'w W,
    pub rect: Rect,
    pub dx: f64,
    pub dy: f64,
    pub horizontal: bool,
}

impl<'w, W> Candidate<'w, W> {
    fn measure(window: &'w W, current: &Rect, rect: Rect) -> Self {
        Self {
            window,
            rect,
            dx: horizontal_delta(current, &rect),
            dy: vertical_offset(current, &rect),
            horizontal: in_band(current, &rect),
        }
    }

    /// Distance toward `direction`, or `None` if the candidate lies the other way.
    fn distance_toward(&self, direction: Direction) -> Option<f64> {
        match direction {
            Direction::East if self.dx > 0.0 => Some(self.dx),
            Direction::West if self.dx < 0.0 => Some(-self.dx),
            _ => None,
        }
    }
}

/// The chosen neighbor window.
#[derive(Debug)]
pub struct Neighbor<'w, W> {
    pub window: &'w W,
    /// Position in the sibling list
    pub index: usize,
    /// Horizontal center-to-center distance
    pub distance: f64,
}

/// Picks the closest sibling window in a horizontal direction.
pub struct NeighborResolver<'a, S: WindowSystem> {
    windows: &'a S,
}

impl<'a, S: WindowSystem> NeighborResolver<'a, S> {
    pub fn new(windows: &'a S) -> Self {
        Self { windows }
    }

    /// Find the nearest in-band sibling of `current` toward `direction`.
    ///
    /// `current` itself is skipped by identity, and so is any sibling whose
    /// frame cannot be read. Among the rest, the smallest positive distance
    /// wins; on a tie the first sibling in list order is kept.
    pub fn find_neighbor<'w>(
        &self,
        current: &S::Window,
        current_rect: &Rect,
        siblings: &'w [S::Window],
        direction: Direction,
    ) -> Option<Neighbor<'w, S::Window>> {
        let mut best: Option<Neighbor<'w, S::Window>> = None;

        for (index, sibling) in siblings.iter().enumerate() {
            if sibling == current {
                continue;
            }
            let Some(rect) = self.windows.rect(sibling) else {
                log::debug!("cand[{index}] geometry unreadable, skipped");
                continue;
            };

            let cand = Candidate::measure(sibling, current_rect, rect);
            log::debug!(
                "cand[{index}] mid=({:.1},{:.1}) dx={:.1} dy={:.1} horiz={}",
                cand.rect.mid_x(),
                cand.rect.mid_y(),
                cand.dx,
                cand.dy,
                cand.horizontal
            );
            if !cand.horizontal {
                continue;
            }

            let Some(distance) = cand.distance_toward(direction) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| distance < b.distance) {
                best = Some(Neighbor {
                    window: cand.window,
                    index,
                    distance,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrontAppInfo;
    use std::collections::HashMap;

    /// Windows are plain ids; frames come from a map.
    struct Frames(HashMap<u32, Rect>);

    impl WindowSystem for Frames {
        type App = ();
        type Window = u32;

        fn is_trusted(&self) -> bool {
            true
        }
        fn front_app(&self) -> Option<()> {
            Some(())
        }
        fn front_app_info(&self) -> Option<FrontAppInfo> {
            None
        }
        fn is_target_app(&self, _app: &()) -> bool {
            true
        }
        fn focused_window(&self, _app: &()) -> Option<u32> {
            Some(0)
        }
        fn all_windows(&self, _app: &()) -> Option<Vec<u32>> {
            Some(self.0.keys().copied().collect())
        }
        fn rect(&self, window: &u32) -> Option<Rect> {
            self.0.get(window).copied()
        }
        fn focus(&self, _app: &(), _window: &u32) {}
    }

    fn at(cx: f64, cy: f64) -> Rect {
        Rect::new(cx - 100.0, cy - 100.0, 200.0, 200.0)
    }

    fn frames(entries: &[(u32, Rect)]) -> Frames {
        Frames(entries.iter().copied().collect())
    }

    #[test]
    fn test_directional_minimality() {
        let current = at(500.0, 500.0);
        let ws = frames(&[
            (0, current),
            (1, at(550.0, 500.0)),
            (2, at(510.0, 500.0)),
            (3, at(470.0, 500.0)),
        ]);
        let siblings = [1, 2, 3];
        let resolver = NeighborResolver::new(&ws);

        let east = resolver.find_neighbor(&0, &current, &siblings, Direction::East);
        assert_eq!(east.map(|n| *n.window), Some(2));

        let west = resolver.find_neighbor(&0, &current, &siblings, Direction::West);
        let west = west.expect("west neighbor");
        assert_eq!(*west.window, 3);
        assert_eq!(west.index, 2);
        assert_eq!(west.distance, 30.0);
    }

    #[test]
    fn test_candidate_keeps_its_window() {
        let current = at(500.0, 500.0);
        let sibling = 7u32;
        let cand = Candidate::measure(&sibling, &current, at(420.0, 560.0));
        assert_eq!(*cand.window, 7);
        assert_eq!(cand.dx, -80.0);
        assert_eq!(cand.dy, 60.0);
        assert!(cand.horizontal);
        assert_eq!(cand.distance_toward(Direction::West), Some(80.0));
        assert_eq!(cand.distance_toward(Direction::East), None);
    }

    #[test]
    fn test_self_is_never_selected() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current)]);
        let resolver = NeighborResolver::new(&ws);
        assert!(
            resolver
                .find_neighbor(&0, &current, &[0], Direction::East)
                .is_none()
        );
    }

    #[test]
    fn test_out_of_band_is_ignored() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current), (1, at(520.0, 700.0)), (2, at(900.0, 500.0))]);
        let resolver = NeighborResolver::new(&ws);
        let east = resolver.find_neighbor(&0, &current, &[0, 1, 2], Direction::East);
        assert_eq!(east.map(|n| *n.window), Some(2));
    }

    #[test]
    fn test_unreadable_sibling_is_skipped() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current), (2, at(800.0, 500.0))]);
        let resolver = NeighborResolver::new(&ws);
        let east = resolver.find_neighbor(&0, &current, &[1, 2], Direction::East);
        assert_eq!(east.map(|n| n.index), Some(1));
    }

    #[test]
    fn test_empty_siblings() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current)]);
        let resolver = NeighborResolver::new(&ws);
        assert!(
            resolver
                .find_neighbor(&0, &current, &[], Direction::West)
                .is_none()
        );
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current), (1, at(600.0, 450.0)), (2, at(600.0, 550.0))]);
        let resolver = NeighborResolver::new(&ws);
        let east = resolver.find_neighbor(&0, &current, &[1, 2], Direction::East);
        assert_eq!(east.map(|n| *n.window), Some(1));
    }

    #[test]
    fn test_same_column_is_not_a_neighbor() {
        let current = at(500.0, 500.0);
        let ws = frames(&[(0, current), (1, at(500.0, 520.0))]);
        let resolver = NeighborResolver::new(&ws);
        assert!(
            resolver
                .find_neighbor(&0, &current, &[1], Direction::East)
                .is_none()
        );
        assert!(
            resolver
                .find_neighbor(&0, &current, &[1], Direction::West)
                .is_none()
        );
    }
}
