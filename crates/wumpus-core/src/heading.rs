//! Agent heading and the two rotation cycles.

use crate::cell::Cell;
use std::fmt;

/// Cardinal heading of the agent.
///
/// Turning left walks the cycle `Up → Left → Down → Right → Up`; turning
/// right walks `Up → Right → Down → Left → Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Heading {
    /// Facing row - 1.
    Up = 0,
    /// Facing row + 1.
    Down = 1,
    /// Facing col - 1.
    Left = 2,
    /// Facing col + 1.
    Right = 3,
}

impl Heading {
    /// All headings, in discriminant order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// The heading after a quarter turn counter-clockwise.
    pub const fn turned_left(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// The heading after a quarter turn clockwise.
    pub const fn turned_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Returns the `(row_offset, col_offset)` of one step along this heading.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    /// The cell one step ahead of `from`. Not bounds-checked.
    pub const fn ahead_of(self, from: Cell) -> Cell {
        let (dr, dc) = self.offset();
        from.offset(dr, dc)
    }

    /// Dense index in `0..4`, usable for per-heading tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The heading pointing from `from` straight at `to`.
    ///
    /// Returns `None` when the cells are identical or share neither a row
    /// nor a column.
    pub fn toward(from: Cell, to: Cell) -> Option<Self> {
        if from == to {
            return None;
        }
        if from.row == to.row {
            Some(if to.col > from.col {
                Heading::Right
            } else {
                Heading::Left
            })
        } else if from.col == to.col {
            Some(if to.row > from.row {
                Heading::Down
            } else {
                Heading::Up
            })
        } else {
            None
        }
    }

    /// Whether an agent at `from` facing `self` looks straight at `to`.
    pub fn faces(self, from: Cell, to: Cell) -> bool {
        Self::toward(from, to) == Some(self)
    }

    /// Single-character arrow used by the text renderer.
    pub const fn glyph(self) -> char {
        match self {
            Heading::Up => '^',
            Heading::Down => 'v',
            Heading::Left => '<',
            Heading::Right => '>',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        };
        f.write_str(name)
    }
}
