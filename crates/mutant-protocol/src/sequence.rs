use crate::DnaBase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A matrix cell; rows grow downward, columns grow rightward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Walks `steps` cells along `direction`. `None` once the walk would leave
    /// the non-negative quadrant.
    pub fn advance(self, direction: SequenceDirection, steps: usize) -> Option<Self> {
        let (d_row, d_col) = direction.step();
        let steps = isize::try_from(steps).ok()?;
        let row = (self.row as isize).checked_add(d_row.checked_mul(steps)?)?;
        let col = (self.col as isize).checked_add(d_col.checked_mul(steps)?)?;
        Some(Self {
            row: usize::try_from(row).ok()?,
            col: usize::try_from(col).ok()?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceDirection {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagonalRight,
    /// Down and to the left.
    DiagonalLeft,
}

impl SequenceDirection {
    /// Scan order of the detector.
    pub const ALL: [SequenceDirection; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalRight,
        Self::DiagonalLeft,
    ];

    /// Unit vector as `(row delta, col delta)`.
    #[inline(always)]
    pub fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalRight => (1, 1),
            Self::DiagonalLeft => (1, -1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalRight => "diagonal_right",
            Self::DiagonalLeft => "diagonal_left",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::DiagonalRight => "Diagonal ↘",
            Self::DiagonalLeft => "Diagonal ↙",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Horizontal => '→',
            Self::Vertical => '↓',
            Self::DiagonalRight => '↘',
            Self::DiagonalLeft => '↙',
        }
    }
}

impl fmt::Display for SequenceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of `length` identical bases. `end_position` is `start_position`
/// advanced `length - 1` steps along `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceMatch {
    pub base: DnaBase,
    pub direction: SequenceDirection,
    pub start_position: Position,
    pub end_position: Position,
    pub length: usize,
}

impl SequenceMatch {
    /// Builds a match from its anchor, deriving the end cell.
    pub fn from_start(
        base: DnaBase,
        direction: SequenceDirection,
        start_position: Position,
        length: usize,
    ) -> Option<Self> {
        let end_position = start_position.advance(direction, length.checked_sub(1)?)?;
        Some(Self {
            base,
            direction,
            start_position,
            end_position,
            length,
        })
    }

    /// Cells covered by the run, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.length).filter_map(move |i| self.start_position.advance(self.direction, i))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        let target = Position::new(row, col);
        self.cells().any(|cell| cell == target)
    }
}
