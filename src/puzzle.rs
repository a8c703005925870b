//! Core puzzle value types: the finalized grid, coordinates, and the fixed
//! direction table shared by the solver.

use std::fmt;

/// The eight straight search directions as `(d_row, d_col)` unit vectors.
///
/// The order is part of the observable contract: candidate paths are grown in
/// exactly this order from every start cell, so results are bit-for-bit
/// reproducible. Reading order: south, south-east, east, north-east, north,
/// north-west, west, south-west.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A grid coordinate. Always in range: `row < rows`, `col < cols`
/// (post-wrap when toroidal addressing is in effect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    /// Renders as `(row,col)` with no interior spaces — the output format
    /// used for found-word coordinate pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A finalized word-search puzzle: rectangular letter grid, wrap flag, and
/// the word list in original input order.
///
/// Immutable once built — the parser constructs it incrementally and hands it
/// out exactly when every section of the input has been read. Duplicate words
/// are permitted; each occurrence is reported independently by the writer.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Number of grid rows, positive.
    pub rows: usize,
    /// Number of grid columns, positive.
    pub cols: usize,
    /// Exactly `rows` rows of exactly `cols` characters each.
    pub grid: Vec<Vec<char>>,
    /// Toroidal addressing when true, clipped addressing when false.
    pub wrap: bool,
    /// Words to find, in original input order.
    pub words: Vec<String>,
}

impl Puzzle {
    /// The letter at `coord`. Callers only hold in-range coordinates, since
    /// [`Puzzle::step`] is the sole way paths move through the grid.
    #[must_use]
    pub fn letter(&self, coord: Coord) -> char {
        self.grid[coord.row][coord.col]
    }

    /// Takes one step from `from` along `(d_row, d_col)`.
    ///
    /// With wrapping, both coordinates are brought back in range via modulo
    /// arithmetic, so this always yields a cell — the grid is a torus.
    /// Without wrapping, a step past any edge yields `None` and terminates
    /// the caller's path.
    #[must_use]
    pub fn step(&self, from: Coord, (d_row, d_col): (isize, isize)) -> Option<Coord> {
        let row = from.row as isize + d_row;
        let col = from.col as isize + d_col;
        if self.wrap {
            Some(Coord {
                row: row.rem_euclid(self.rows as isize) as usize,
                col: col.rem_euclid(self.cols as isize) as usize,
            })
        } else if row < 0 || col < 0 || row >= self.rows as isize || col >= self.cols as isize {
            None
        } else {
            Some(Coord {
                row: row as usize,
                col: col as usize,
            })
        }
    }
}
