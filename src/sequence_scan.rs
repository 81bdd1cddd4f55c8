use crate::dna_matrix::DnaMatrix;
use mutant_protocol::{DnaBase, Position, SequenceDirection, SequenceMatch};

/// Directional scanners over a validated matrix.
///
/// Rows and columns use a running count and report at most one run per line.
/// Diagonals check every anchor independently, so an anchor inside a longer
/// run yields its own, overlapping match.
#[derive(Clone, Debug)]
pub struct SequenceScanner<'m, 'a> {
    matrix: &'m DnaMatrix<'a>,
    sequence_length: usize,
}

impl<'m, 'a> SequenceScanner<'m, 'a> {
    pub fn new(matrix: &'m DnaMatrix<'a>, sequence_length: usize) -> Self {
        Self {
            matrix,
            sequence_length,
        }
    }

    pub fn scan_row(&self, row: usize) -> Option<SequenceMatch> {
        self.scan_line(Position::new(row, 0), SequenceDirection::Horizontal)
    }

    pub fn scan_column(&self, col: usize) -> Option<SequenceMatch> {
        self.scan_line(Position::new(0, col), SequenceDirection::Vertical)
    }

    /// Runs the down-right pass, then the down-left pass, appending to
    /// `found` until it holds `min_sequences` matches.
    pub fn scan_diagonals(&self, found: &mut Vec<SequenceMatch>, min_sequences: usize) {
        self.scan_diagonals_right(found, min_sequences);
        self.scan_diagonals_left(found, min_sequences);
    }

    pub fn scan_diagonals_right(&self, found: &mut Vec<SequenceMatch>, min_sequences: usize) {
        let Some(last_anchor) = self.last_anchor() else {
            return;
        };
        for row in 0..=last_anchor {
            for col in 0..=last_anchor {
                if found.len() >= min_sequences {
                    return;
                }
                let anchor = Position::new(row, col);
                if let Some(m) = self.anchor_match(anchor, SequenceDirection::DiagonalRight) {
                    found.push(m);
                }
            }
        }
    }

    pub fn scan_diagonals_left(&self, found: &mut Vec<SequenceMatch>, min_sequences: usize) {
        let Some(last_anchor) = self.last_anchor() else {
            return;
        };
        let size = self.matrix.size();
        for row in 0..=last_anchor {
            for col in (self.sequence_length - 1)..size {
                if found.len() >= min_sequences {
                    return;
                }
                let anchor = Position::new(row, col);
                if let Some(m) = self.anchor_match(anchor, SequenceDirection::DiagonalLeft) {
                    found.push(m);
                }
            }
        }
    }

    /// Highest row (and, for the down-right pass, column) a diagonal run can
    /// start from. `None` when no run fits.
    #[inline(always)]
    fn last_anchor(&self) -> Option<usize> {
        if self.sequence_length == 0 {
            return None;
        }
        self.matrix.size().checked_sub(self.sequence_length)
    }

    fn scan_line(&self, origin: Position, direction: SequenceDirection) -> Option<SequenceMatch> {
        if self.sequence_length == 0 {
            return None;
        }
        let mut current: Option<u8> = None;
        let mut run_start = origin;
        let mut run_length = 0;
        for i in 0..self.matrix.size() {
            let pos = origin.advance(direction, i)?;
            let letter = self.matrix.get(pos)?;
            if current == Some(letter) {
                run_length += 1;
            } else {
                current = Some(letter);
                run_start = pos;
                run_length = 1;
            }
            if run_length == self.sequence_length {
                return Some(SequenceMatch {
                    base: DnaBase::from_letter(letter)?,
                    direction,
                    start_position: run_start,
                    end_position: pos,
                    length: run_length,
                });
            }
        }
        None
    }

    fn anchor_match(&self, anchor: Position, direction: SequenceDirection) -> Option<SequenceMatch> {
        let base = self.matrix.base_at(anchor)?;
        let end_position = anchor.advance(direction, self.sequence_length - 1)?;
        let homogeneous = (1..self.sequence_length).all(|i| {
            anchor
                .advance(direction, i)
                .and_then(|pos| self.matrix.get(pos))
                == Some(base.letter())
        });
        homogeneous.then_some(SequenceMatch {
            base,
            direction,
            start_position: anchor,
            end_position,
            length: self.sequence_length,
        })
    }
}
