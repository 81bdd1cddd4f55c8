use serde::{Deserialize, Serialize};

pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;
pub const DEFAULT_MIN_SEQUENCES: usize = 2;

/// Run length and number of runs needed to call a matrix mutant.
///
/// Missing JSON fields fall back to the defaults, so `{"min_sequences": 3}`
/// is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutantDetectionConfig {
    pub sequence_length: usize,
    pub min_sequences: usize,
}

impl Default for MutantDetectionConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            min_sequences: DEFAULT_MIN_SEQUENCES,
        }
    }
}

impl MutantDetectionConfig {
    pub fn new(sequence_length: usize, min_sequences: usize) -> Result<Self, String> {
        let ret = Self {
            sequence_length,
            min_sequences,
        };
        ret.check()?;
        Ok(ret)
    }

    /// Both values must be positive.
    pub fn check(&self) -> Result<(), String> {
        if self.sequence_length == 0 {
            return Err("sequence_length must be at least 1".to_string());
        }
        if self.min_sequences == 0 {
            return Err("min_sequences must be at least 1".to_string());
        }
        Ok(())
    }
}
