//! Shortest paths between grid points
//!
//! The router treats every square inside the bounds as open space: it does
//! not look at the kinds of the squares. Corridors carved from its paths are
//! geometric shortest paths between two points, regardless of what has been
//! carved before.

use std::collections::VecDeque;

use tracing::trace;

use crate::grid::{Grid, Point};

/// Extent of the searchable area
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.cols && point.y < self.rows
    }

    fn index(&self, point: Point) -> usize {
        point.y * self.cols + point.x
    }
}

impl From<&Grid> for Bounds {
    fn from(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }
}

/// Relative (dx, dy) moves in search order: up, right, down, left
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Find the shortest 4-connected path from `start` to `goal`
///
/// Breadth-first search over all points inside `bounds`. The returned path
/// includes both ends. If `start == goal`, the path is `[start]`. An empty
/// path is returned when the goal cannot be reached, which only happens if
/// either end lies outside the bounds.
///
/// # Examples
/// ```
/// use room_maze::{route, Bounds, Point};
///
/// let bounds = Bounds { rows: 3, cols: 3 };
/// let (start, goal) = (Point::new(0, 0), Point::new(2, 1));
/// let path = route(bounds, start, goal);
/// assert_eq!(path.len(), start.manhattan(&goal) + 1);
/// assert_eq!(path[0], start);
/// assert_eq!(path[3], goal);
/// ```
pub fn route(bounds: Bounds, start: Point, goal: Point) -> Vec<Point> {
    if !bounds.contains(start) || !bounds.contains(goal) {
        trace!(?start, ?goal, "route endpoint out of bounds");
        return Vec::new();
    }

    // Parent of each discovered point; the start is its own parent
    let mut parent: Vec<Option<Point>> = vec![None; bounds.rows * bounds.cols];
    parent[bounds.index(start)] = Some(start);

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            let path = reconstruct(&parent, bounds, start, goal);
            trace!(?start, ?goal, length = path.len(), "route found");
            return path;
        }

        for (dx, dy) in DIRECTIONS {
            let (Some(x), Some(y)) = (
                current.x.checked_add_signed(dx),
                current.y.checked_add_signed(dy),
            ) else {
                continue;
            };
            let next = Point { x, y };
            if bounds.contains(next) && parent[bounds.index(next)].is_none() {
                parent[bounds.index(next)] = Some(current);
                queue.push_back(next);
            }
        }
    }

    trace!(?start, ?goal, "goal unreachable");
    Vec::new()
}

/// Walk parent links back from the goal, return path in start-to-goal order
fn reconstruct(parent: &[Option<Point>], bounds: Bounds, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut p = goal;
    while p != start {
        match parent[bounds.index(p)] {
            Some(prev) => p = prev,
            None => return Vec::new(),
        }
        path.push(p);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellKind;

    fn assert_connected(path: &[Point]) {
        for step in path.windows(2) {
            assert_eq!(step[0].manhattan(&step[1]), 1, "{:?}", step);
        }
    }

    #[test]
    fn route_to_self_is_single_point() {
        let bounds = Bounds { rows: 5, cols: 5 };
        let p = Point::new(2, 3);
        assert_eq!(route(bounds, p, p), vec![p]);
    }

    #[test]
    fn route_length_is_manhattan_distance() {
        let bounds = Bounds { rows: 7, cols: 9 };
        let pairs = [
            (Point::new(0, 0), Point::new(8, 6)),
            (Point::new(8, 0), Point::new(0, 6)),
            (Point::new(4, 3), Point::new(4, 0)),
            (Point::new(1, 5), Point::new(7, 5)),
        ];
        for (start, goal) in pairs {
            let path = route(bounds, start, goal);
            assert_eq!(path.len(), start.manhattan(&goal) + 1);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert_connected(&path);
        }
    }

    #[test]
    fn route_is_deterministic() {
        let bounds = Bounds { rows: 10, cols: 10 };
        let a = route(bounds, Point::new(1, 8), Point::new(9, 2));
        let b = route(bounds, Point::new(1, 8), Point::new(9, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn route_prefers_vertical_moves_first() {
        // Up is explored before right, so the corridor turns late
        let bounds = Bounds { rows: 3, cols: 3 };
        let path = route(bounds, Point::new(0, 2), Point::new(2, 0));
        assert_eq!(
            path,
            vec![
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    fn route_ignores_walls() {
        // Carving draws straight through walls; the route only depends on bounds
        let mut grid: Grid = "
S # # #
# # # #
# # # E"
            .trim()
            .parse()
            .unwrap();
        let before = route(Bounds::from(&grid), Point::new(0, 0), Point::new(3, 2));
        grid.set(Point::new(1, 1), CellKind::Path);
        let after = route(Bounds::from(&grid), Point::new(0, 0), Point::new(3, 2));
        assert_eq!(before, after);
        assert_eq!(before.len(), 6);
    }

    #[test]
    fn route_beyond_hundred_squares() {
        let bounds = Bounds {
            rows: 150,
            cols: 180,
        };
        let start = Point::new(0, 0);
        let goal = Point::new(179, 149);
        let path = route(bounds, start, goal);
        assert_eq!(path.len(), start.manhattan(&goal) + 1);
        assert!(path.iter().all(|&p| bounds.contains(p)));
    }

    #[test]
    fn route_out_of_bounds_is_empty() {
        let bounds = Bounds { rows: 4, cols: 4 };
        assert!(route(bounds, Point::new(0, 0), Point::new(4, 0)).is_empty());
        assert!(route(bounds, Point::new(0, 9), Point::new(0, 0)).is_empty());
    }
}
