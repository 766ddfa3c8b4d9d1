//! Board state, move legality, and move execution.

use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, GameError, GameResult};
use crate::game::shape::{board_size, is_valid_arm_thickness, on_board, playable_slots};
use crate::game::{Coord, Direction, Move};

/// State of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    /// Not part of the playable board. Never changes.
    Absent,
    /// Holds a marble.
    Occupied,
    /// Playable, no marble.
    Empty,
}

impl Slot {
    /// Character used in the textual board dump.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Slot::Absent => ' ',
            Slot::Occupied => 'O',
            Slot::Empty => '_',
        }
    }

    /// Whether the slot belongs to the playable board.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Slot::Absent)
    }
}

/// Whether any legal move remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// At least one legal move exists.
    InProgress,
    /// No legal move exists.
    Over,
}

/// A cross-shaped marble solitaire board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Arm thickness the shape was derived from.
    arm_thickness: i32,
    /// Side length of the square grid.
    size: i32,
    /// Slot that started empty.
    start: Coord,
    /// Slots stored in row-major order.
    slots: Vec<Slot>,
}

impl Board {
    /// Build a board with every playable slot occupied except `(start_row, start_col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if `arm_thickness` is not a positive
    /// odd number no greater than [`crate::game::MAX_ARM_THICKNESS`], if the
    /// grid cannot be allocated, or if the start slot is not playable.
    pub fn new(arm_thickness: i32, start_row: i32, start_col: i32) -> GameResult<Self> {
        let bad_arm = ConfigError::ArmThickness(arm_thickness);
        if !is_valid_arm_thickness(arm_thickness) {
            return Err(bad_arm.into());
        }

        let size = i32::try_from(board_size(arm_thickness)).map_err(|_| bad_arm)?;
        let start = Coord::new(start_row, start_col);
        if !on_board(start_row, start_col, arm_thickness, size) {
            return Err(ConfigError::StartPosition(start).into());
        }

        let width = usize::try_from(size).map_err(|_| bad_arm)?;
        let cells = width.checked_mul(width).ok_or(bad_arm)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(cells).map_err(|_| bad_arm)?;
        slots.extend(
            (0..size)
                .flat_map(|row| (0..size).map(move |col| (row, col)))
                .map(|(row, col)| {
                    if (row, col) == (start_row, start_col) {
                        Slot::Empty
                    } else if on_board(row, col, arm_thickness, size) {
                        Slot::Occupied
                    } else {
                        Slot::Absent
                    }
                }),
        );

        Ok(Self {
            arm_thickness,
            size,
            start,
            slots,
        })
    }

    /// Arm thickness the board was built with.
    #[must_use]
    pub const fn arm_thickness(&self) -> i32 {
        self.arm_thickness
    }

    /// Side length of the square grid.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Slot that was empty when the board was built.
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Number of playable slots.
    #[must_use]
    pub fn playable_count(&self) -> i64 {
        playable_slots(self.arm_thickness)
    }

    /// Whether `coord` is part of the playable board.
    #[must_use]
    pub fn is_playable(&self, coord: Coord) -> bool {
        on_board(coord.row, coord.col, self.arm_thickness, self.size)
    }

    /// Convert a coordinate to an index into the slots vector.
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 || coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        let width = usize::try_from(self.size).ok()?;
        Some(row * width + col)
    }

    /// State of the slot at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn slot(&self, coord: Coord) -> Option<Slot> {
        self.index(coord).map(|idx| self.slots[idx])
    }

    pub(crate) fn set(&mut self, coord: Coord, slot: Slot) {
        if let Some(idx) = self.index(coord) {
            self.slots[idx] = slot;
        }
    }

    /// Iterate over all slots with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Slot)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
            .zip(self.slots.iter().copied())
    }

    /// The slots of one row, left to right. Empty if `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: i32) -> &[Slot] {
        match (self.index(Coord::new(row, 0)), usize::try_from(self.size)) {
            (Some(start), Ok(width)) => &self.slots[start..start + width],
            _ => &[],
        }
    }

    /// The jumped slot if `from -> to` is a legal move, `None` otherwise.
    ///
    /// A move is legal when both ends are playable, `from` holds a marble,
    /// `to` is empty, the two are exactly two apart along one axis, and the
    /// slot between them holds a marble. Never mutates the board.
    #[must_use]
    pub fn jumped_cell(&self, from: Coord, to: Coord) -> Option<Coord> {
        if !self.is_playable(from) || !self.is_playable(to) {
            return None;
        }
        if self.slot(from)? != Slot::Occupied || self.slot(to)? != Slot::Empty {
            return None;
        }
        let over = from.between(to)?;
        (self.slot(over)? == Slot::Occupied).then_some(over)
    }

    /// Whether moving the marble at `(from_row, from_col)` to `(to_row, to_col)` is legal.
    #[must_use]
    pub fn is_legal_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.jumped_cell(Coord::new(from_row, from_col), Coord::new(to_row, to_col))
            .is_some()
    }

    /// Jump the marble at `(from_row, from_col)` to `(to_row, to_col)`, removing the
    /// marble it passes over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move is not legal; the board is
    /// left unchanged.
    pub fn make_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> GameResult<()> {
        self.apply(Move::from_parts(from_row, from_col, to_row, to_col))
    }

    /// Play a [`Move`]. Same semantics as [`Board::make_move`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move is not legal.
    pub fn apply(&mut self, mv: Move) -> GameResult<()> {
        let over = self
            .jumped_cell(mv.from, mv.to)
            .ok_or(GameError::IllegalMove {
                from: mv.from,
                to: mv.to,
            })?;

        self.set(mv.from, Slot::Empty);
        self.set(over, Slot::Empty);
        self.set(mv.to, Slot::Occupied);
        Ok(())
    }

    /// Every legal move, scanning slots row by row and trying
    /// up, down, left, right from each.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter()
            .filter(|(_, slot)| slot.is_playable())
            .flat_map(move |(from, _)| {
                Direction::ALL.into_iter().filter_map(move |dir| {
                    let to = dir.jump_from(from)?;
                    self.jumped_cell(from, to).map(|_| Move::new(from, to))
                })
            })
    }

    /// Whether at least one legal move starts at `coord`.
    #[must_use]
    pub fn has_move_from(&self, coord: Coord) -> bool {
        self.is_playable(coord)
            && Direction::ALL.into_iter().any(|dir| {
                dir.jump_from(coord)
                    .and_then(|to| self.jumped_cell(coord, to))
                    .is_some()
            })
    }

    /// True when no legal move remains anywhere on the board.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.legal_moves().next().is_none()
    }

    /// Current status, recomputed from the slots.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of marbles left on the board.
    #[must_use]
    pub fn score(&self) -> usize {
        self.slots.iter().filter(|&&s| s == Slot::Occupied).count()
    }

    /// Textual board dump. See [`crate::render::render_text`].
    #[must_use]
    pub fn render(&self) -> String {
        crate::render::render_text(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
