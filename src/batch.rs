use crate::{detector::MutantDetector, matrix_input::MatrixRows};
use mutant_protocol::DnaValidationResult;
use rayon::prelude::*;

/// Validates independent matrices in parallel. Results keep the input order.
pub fn validate_batch(detector: &MutantDetector, grids: &[MatrixRows]) -> Vec<DnaValidationResult> {
    grids
        .par_iter()
        .map(|grid| detector.validate_optional(grid.as_deref()))
        .collect()
}
