//! Coordinates, jump directions, and moves.

use std::fmt;

use serde::Serialize;

/// A slot position on the board, row-major with `(0, 0)` at the top left.
///
/// Components are signed so that callers can probe positions off the grid;
/// such positions are simply never playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// Row index (0 = top).
    pub row: i32,
    /// Column index (0 = left).
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by the given deltas, or `None` on integer overflow.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// The slot strictly between `self` and `other` if they are a straight
    /// two-step jump apart on exactly one axis.
    #[must_use]
    pub fn between(self, other: Self) -> Option<Self> {
        let d_row = i64::from(other.row) - i64::from(self.row);
        let d_col = i64::from(other.col) - i64::from(self.col);
        if !matches!((d_row.abs(), d_col.abs()), (2, 0) | (0, 2)) {
            return None;
        }
        // Deltas are in -2..=2 here.
        let half_row = i32::try_from(d_row / 2).ok()?;
        let half_col = i32::try_from(d_col / 2).ok()?;
        self.offset(half_row, half_col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four straight jump directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All directions, in the order moves are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(d_row, d_col)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The target of a two-step jump from `from` in this direction.
    #[must_use]
    pub fn jump_from(self, from: Coord) -> Option<Coord> {
        let (d_row, d_col) = self.delta();
        from.offset(2 * d_row, 2 * d_col)
    }
}

/// A jump from one slot to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// Slot holding the moving marble.
    pub from: Coord,
    /// Empty slot the marble lands on.
    pub to: Coord,
}

impl Move {
    /// Create a move between two coordinates.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Create a move from raw `(from_row, from_col, to_row, to_col)` values.
    #[must_use]
    pub const fn from_parts(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(Coord::new(from_row, from_col), Coord::new(to_row, to_col))
    }

    /// The same move played backwards.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
