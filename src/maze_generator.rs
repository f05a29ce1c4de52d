//! Map generation
//!
//! A maze is a single route carved through walls: start and exit are placed
//! on the boundary, the route visits a number of isolated rooms on the way,
//! and one of the rooms may hold a treasure.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::error::MazeError;
use crate::grid::{CellKind, Grid, Point};
use crate::router::{route, Bounds};

/// Side of the grid boundary
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Generated maze
#[derive(Clone, Debug)]
pub struct Maze {
    /// Finished layout
    pub grid: Grid,
    pub start: Point,
    pub exit: Point,
    /// Room holding the treasure, if the treasure was placed
    pub treasure: Option<Point>,
    /// Rooms the route passes through, in visiting order
    pub waypoints: Vec<Point>,
}

/// Maze generator
///
/// All random draws of a generation run come from the one generator held
/// here, seeded once.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create generator from a fixed seed, or from system entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a `rows` x `cols` maze
    ///
    /// Fails with [MazeError::InvalidDimensions] before any generation
    /// work, if the grid cannot hold a start and an exit.
    ///
    /// # Examples
    /// ```
    /// use room_maze::{CellKind, MazeGenerator};
    ///
    /// let mut gen = MazeGenerator::new(Some(7));
    /// let maze = gen.generate_maze(5, 5).unwrap();
    /// assert_eq!(maze.grid.count(CellKind::Start), 1);
    /// assert_eq!(maze.grid.count(CellKind::Exit), 1);
    /// ```
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> Result<Maze, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        let (start, exit) = self.place_exits(&mut grid);
        let (waypoints, treasure) = self.carve_route(&mut grid, start, exit);
        Ok(Maze {
            grid,
            start,
            exit,
            treasure,
            waypoints,
        })
    }

    /// Pick a random point on a random side of the boundary
    fn boundary_point(&mut self, rows: usize, cols: usize) -> Point {
        match Side::ALL[self.random.gen_range(0..Side::ALL.len())] {
            Side::Top => Point::new(self.random.gen_range(0..cols), 0),
            Side::Right => Point::new(cols - 1, self.random.gen_range(0..rows)),
            Side::Bottom => Point::new(self.random.gen_range(0..cols), rows - 1),
            Side::Left => Point::new(0, self.random.gen_range(0..rows)),
        }
    }

    /// Mark two distinct boundary points as start and exit
    fn place_exits(&mut self, grid: &mut Grid) -> (Point, Point) {
        let start = self.boundary_point(grid.rows(), grid.cols());
        let exit = self.pick_exit(grid, start, 4 * grid.rows() * grid.cols());
        debug!(?start, ?exit, "exits placed");

        grid.set(start, CellKind::Start);
        grid.set(exit, CellKind::Exit);
        (start, exit)
    }

    /// Draw a boundary point different from `start`
    ///
    /// At most `max_attempts` draws are made. After the last one the first
    /// other boundary point in row-major order is taken.
    fn pick_exit(&mut self, grid: &Grid, start: Point, max_attempts: usize) -> Point {
        let (rows, cols) = (grid.rows(), grid.cols());
        (0..max_attempts)
            .map(|_| self.boundary_point(rows, cols))
            .find(|&p| p != start)
            .or_else(|| {
                debug!(max_attempts, "exit draws exhausted");
                grid.points().find(|&p| p != start && grid.is_boundary(p))
            })
            .unwrap_or(start)
    }

    /// Find a point whose whole neighbourhood is still walls
    ///
    /// Tries at most `rows * cols` random points. Returns `None` if all of
    /// them touch something already carved.
    fn select_waypoint(&mut self, grid: &Grid) -> Option<Point> {
        let max_attempts = grid.rows() * grid.cols();
        for _ in 0..max_attempts {
            let point = Point::new(
                self.random.gen_range(0..grid.cols()),
                self.random.gen_range(0..grid.rows()),
            );
            if grid.neighbourhood(point).all(|p| !grid.get(p).is_carved()) {
                return Some(point);
            }
        }
        debug!(max_attempts, "no isolated point left");
        None
    }

    /// Place the treasure at `waypoint` with a `1 / waypoint_count` chance
    ///
    /// Nothing is drawn once the treasure has been placed. With a single
    /// room the draw can never hit.
    fn roll_treasure(
        &mut self,
        treasure: &mut Option<Point>,
        waypoint: Point,
        waypoint_count: usize,
    ) {
        if treasure.is_none() && self.random.gen_range(0..waypoint_count) == 1 {
            debug!(?waypoint, "treasure placed");
            *treasure = Some(waypoint);
        }
    }

    /// Carve the route from start through the rooms to the exit
    ///
    /// Returns the visited rooms and the treasure location.
    fn carve_route(
        &mut self,
        grid: &mut Grid,
        start: Point,
        exit: Point,
    ) -> (Vec<Point>, Option<Point>) {
        let bounds = Bounds::from(&*grid);
        let area = (grid.rows() * grid.cols()) as f64;
        let waypoint_count = (area / area.sqrt()) as usize;

        let mut waypoints = Vec::with_capacity(waypoint_count);
        let mut treasure = None;
        let mut current = start;

        for _ in 0..waypoint_count {
            let Some(waypoint) = self.select_waypoint(grid) else {
                break;
            };
            for p in route(bounds, current, waypoint) {
                grid.set(p, CellKind::Path);
            }
            debug!(?waypoint, "room carved");

            self.roll_treasure(&mut treasure, waypoint, waypoint_count);
            waypoints.push(waypoint);
            current = waypoint;
        }

        for p in route(bounds, current, exit) {
            grid.set(p, CellKind::Path);
        }
        debug!(rooms = waypoints.len(), "route to exit carved");

        // Corridors may run over the special squares, restore them
        grid.set(start, CellKind::Start);
        grid.set(exit, CellKind::Exit);
        if let Some(t) = treasure {
            grid.set(t, CellKind::Treasure);
        }

        (waypoints, treasure)
    }
}
