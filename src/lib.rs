//! Generate a maze: a single route carved from a start to an exit
//!
//! Start and exit are placed on the grid boundary. On its way, the route
//! visits a number of isolated rooms, roughly the square root of the grid
//! area. One of the rooms may hold a treasure.
//!
//! # Examples
//! ```
//! use room_maze::{CellKind, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(1));
//! let maze = gen.generate_maze(6, 8).unwrap();
//! assert!(maze.grid.is_boundary(maze.start));
//! assert!(maze.grid.is_boundary(maze.exit));
//! assert!(maze.grid.count(CellKind::Treasure) <= 1);
//! print!("{}", maze.grid);
//! ```

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod router;

pub use error::MazeError;
pub use grid::{CellKind, Grid, Point};
pub use maze_generator::{Maze, MazeGenerator};
pub use router::{route, Bounds};
