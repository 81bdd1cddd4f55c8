//! Shared machine-readable contracts for the mutant DNA detector.
//!
//! Everything here serializes to snake_case JSON so the CLI output, batch
//! files and configuration files all speak the same shapes.

mod base;
mod config;
mod result;
mod sequence;

pub use base::DnaBase;
pub use config::{DEFAULT_MIN_SEQUENCES, DEFAULT_SEQUENCE_LENGTH, MutantDetectionConfig};
pub use result::DnaValidationResult;
pub use sequence::{Position, SequenceDirection, SequenceMatch};

pub const PROTOCOL_VERSION: &str = "v1";
