//! Read-only view over a caller-owned square matrix of DNA rows, plus the
//! shape and alphabet checks every detector call starts with.

use crate::error::{DetectorError, ErrorCode};
use mutant_protocol::{DnaBase, Position};

/// Message carried by every rejected matrix, whichever check failed.
pub const INVALID_MATRIX_MESSAGE: &str =
    "Invalid DNA matrix: expected a non-empty NxN matrix containing only A, T, C and G";

#[derive(Clone, Debug)]
pub struct DnaMatrix<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> DnaMatrix<'a> {
    pub fn from_rows<S: AsRef<str>>(rows: &'a [S]) -> Result<Self, DetectorError> {
        let size = rows.len();
        if size == 0 {
            return Err(DetectorError::new(
                ErrorCode::InvalidShape,
                "matrix has no rows",
            ));
        }
        let rows: Vec<&'a [u8]> = rows.iter().map(|row| row.as_ref().as_bytes()).collect();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(DetectorError::new(
                    ErrorCode::InvalidShape,
                    format!(
                        "row {index} has length {}, expected {size} for a {size}x{size} matrix",
                        row.len()
                    ),
                ));
            }
        }
        for (index, row) in rows.iter().enumerate() {
            if let Some(col) = row.iter().position(|&c| !DnaBase::is_valid_letter(c)) {
                return Err(DetectorError::new(
                    ErrorCode::InvalidAlphabet,
                    format!("row {index} has invalid base at column {col}"),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// `None` stands for an absent matrix, e.g. JSON `null`.
    pub fn from_optional_rows<S: AsRef<str>>(
        rows: Option<&'a [S]>,
    ) -> Result<Self, DetectorError> {
        match rows {
            Some(rows) => Self::from_rows(rows),
            None => Err(DetectorError::new(
                ErrorCode::InvalidShape,
                "matrix is missing",
            )),
        }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline(always)]
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    #[inline(always)]
    pub fn base_at(&self, pos: Position) -> Option<DnaBase> {
        DnaBase::from_letter(self.get(pos)?)
    }
}

/// Shape and alphabet check without keeping the view. Returns the matrix size.
pub fn check_matrix<S: AsRef<str>>(rows: Option<&[S]>) -> Result<usize, DetectorError> {
    DnaMatrix::from_optional_rows(rows).map(|matrix| matrix.size())
}
