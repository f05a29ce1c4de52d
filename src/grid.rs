//! Maze grid and its squares

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::MazeError;

/// Location in the maze
///
/// `x` indexes columns, `y` indexes rows.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Number of 4-connected steps between two points
    ///
    /// # Examples
    /// ```
    /// use room_maze::Point;
    ///
    /// assert_eq!(Point::new(1, 4).manhattan(&Point::new(3, 1)), 5);
    /// ```
    pub fn manhattan(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Kind of a single square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CellKind {
    Wall,
    Path,
    Start,
    Exit,
    Treasure,
}

impl CellKind {
    const EMOJI_WALL: char = '🟫';
    const EMOJI_PATH: char = '🟩';
    const EMOJI_START: char = '🏃';
    const EMOJI_EXIT: char = '❎';
    const EMOJI_TREASURE: char = '💎';

    /// Ascii symbol used in the plain text rendering
    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Path => '.',
            CellKind::Start => 'S',
            CellKind::Exit => 'E',
            CellKind::Treasure => '@',
        }
    }

    /// Emoji used in the [Grid::render_emojis] rendering
    pub fn emoji(self) -> char {
        match self {
            CellKind::Wall => Self::EMOJI_WALL,
            CellKind::Path => Self::EMOJI_PATH,
            CellKind::Start => Self::EMOJI_START,
            CellKind::Exit => Self::EMOJI_EXIT,
            CellKind::Treasure => Self::EMOJI_TREASURE,
        }
    }

    /// Inverse of [Self::symbol]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Path),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::Exit),
            '@' => Some(CellKind::Treasure),
            _ => None,
        }
    }

    /// Anything but a wall has been carved out
    pub fn is_carved(self) -> bool {
        self != CellKind::Wall
    }
}

/// Rectangular maze of `rows` x `cols` squares
///
/// Dimensions are fixed at construction. Accessing a point outside of the
/// grid is a programming error and panics.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    squares: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Create a grid filled with walls
    ///
    /// Returns [MazeError::InvalidDimensions] if either dimension is zero,
    /// or if the grid would consist of a single square.
    ///
    /// # Examples
    /// ```
    /// use room_maze::{CellKind, Grid, Point};
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.get(Point::new(3, 2)), CellKind::Wall);
    /// assert!(Grid::new(1, 1).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 || (rows == 1 && cols == 1) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            squares: vec![vec![CellKind::Wall; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.squares.len()
    }

    pub fn cols(&self) -> usize {
        self.squares[0].len()
    }

    pub fn get(&self, point: Point) -> CellKind {
        self.squares[point.y][point.x]
    }

    pub fn set(&mut self, point: Point, kind: CellKind) {
        self.squares[point.y][point.x] = kind;
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.cols() && point.y < self.rows()
    }

    /// Is the point on the outer edge of the grid
    pub fn is_boundary(&self, point: Point) -> bool {
        self.contains(point)
            && (point.x == 0
                || point.y == 0
                || point.x == self.cols() - 1
                || point.y == self.rows() - 1)
    }

    /// The point itself and its up to 8 surrounding squares inside the grid
    pub fn neighbourhood(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let ys = point.y.saturating_sub(1)..=(point.y + 1).min(self.rows() - 1);
        let xs = point.x.saturating_sub(1)..=(point.x + 1).min(self.cols() - 1);
        ys.cartesian_product(xs).map(|(y, x)| Point { x, y })
    }

    /// All points in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        (0..self.rows())
            .cartesian_product(0..self.cols())
            .map(|(y, x)| Point { x, y })
    }

    /// Number of squares of the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.squares.iter().flatten().filter(|&&k| k == kind).count()
    }

    /// Render the grid with emoji squares, one row per line
    pub fn render_emojis(&self) -> String {
        self.squares
            .iter()
            .map(|row| row.iter().map(|k| k.emoji()).join(""))
            .join("\n")
    }
}

/// Plain text rendering: space separated symbols, one grid row per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            writeln!(f, "{}", row.iter().map(|k| k.symbol()).join(" "))?;
        }
        Ok(())
    }
}

/// Parse the plain text rendering produced by [Grid]'s `Display`
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(|(x, token)| {
                        let mut chars = token.chars();
                        match (chars.next().and_then(CellKind::from_symbol), chars.next()) {
                            (Some(kind), None) => Ok(kind),
                            _ => Err(MazeError::UnknownSymbol {
                                symbol: token.chars().next().unwrap_or(' '),
                                row: y,
                                col: x,
                            }),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cols = squares.first().map_or(0, Vec::len);
        if let Some((row, found)) = squares
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MazeError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        let mut grid = Grid::new(squares.len(), cols)?;
        grid.squares = squares;
        Ok(grid)
    }
}
