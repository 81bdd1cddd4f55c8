pub mod about;
pub mod batch;
pub mod cli_options;
pub mod detector;
pub mod dna_matrix;
pub mod error;
pub mod matrix_input;
pub mod report;
pub mod sequence_scan;

pub use detector::{MutantDetector, is_mutant, validate};
pub use mutant_protocol::{
    DnaBase, DnaValidationResult, MutantDetectionConfig, Position, SequenceDirection,
    SequenceMatch,
};
