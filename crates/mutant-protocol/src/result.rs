use crate::SequenceMatch;
use serde::{Deserialize, Serialize};

/// Outcome of one detector call.
///
/// `sequences` is in discovery order. Once enough runs are found the scan
/// stops, so a mutant result may not list every run in the matrix.
/// `error_message` is present exactly when `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaValidationResult {
    pub is_mutant: bool,
    pub sequences: Vec<SequenceMatch>,
    pub matrix_size: usize,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DnaValidationResult {
    pub fn valid(matrix_size: usize, sequences: Vec<SequenceMatch>, min_sequences: usize) -> Self {
        Self {
            is_mutant: sequences.len() >= min_sequences,
            sequences,
            matrix_size,
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(matrix_size: usize, message: impl Into<String>) -> Self {
        Self {
            is_mutant: false,
            sequences: vec![],
            matrix_size,
            is_valid: false,
            error_message: Some(message.into()),
        }
    }

    #[inline(always)]
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }
}
