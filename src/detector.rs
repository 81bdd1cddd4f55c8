use crate::{
    dna_matrix::{DnaMatrix, INVALID_MATRIX_MESSAGE},
    sequence_scan::SequenceScanner,
};
use mutant_protocol::{
    DnaValidationResult, MutantDetectionConfig, PROTOCOL_VERSION, SequenceDirection,
    SequenceMatch,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    pub protocol_version: String,
    pub supported_commands: Vec<String>,
    pub supported_directions: Vec<SequenceDirection>,
    pub default_config: MutantDetectionConfig,
    pub early_stop: bool,
}

/// Decides whether a DNA matrix holds at least `min_sequences` runs of
/// `sequence_length` identical bases.
///
/// Scan order is fixed: every row, then every column, then the down-right
/// and down-left diagonals. The scan stops as soon as enough runs are found,
/// so which runs are reported depends on that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutantDetector {
    config: MutantDetectionConfig,
}

impl MutantDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MutantDetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MutantDetectionConfig {
        &self.config
    }

    pub fn capabilities() -> Capabilities {
        Capabilities {
            protocol_version: PROTOCOL_VERSION.to_string(),
            supported_commands: vec![
                "capabilities".to_string(),
                "validate".to_string(),
                "is-mutant".to_string(),
                "report".to_string(),
                "batch".to_string(),
            ],
            supported_directions: SequenceDirection::ALL.to_vec(),
            default_config: MutantDetectionConfig::default(),
            early_stop: true,
        }
    }

    pub fn validate_dna<S: AsRef<str>>(&self, dna: &[S]) -> DnaValidationResult {
        self.validate_optional(Some(dna))
    }

    /// Never fails: a bad configuration or a malformed matrix comes back as
    /// `is_valid == false` with no runs.
    pub fn validate_optional<S: AsRef<str>>(&self, dna: Option<&[S]>) -> DnaValidationResult {
        let row_count = dna.map_or(0, <[S]>::len);
        if let Err(e) = self.config.check() {
            return DnaValidationResult::invalid(
                row_count,
                format!("Invalid detection configuration: {e}"),
            );
        }
        let matrix = match DnaMatrix::from_optional_rows(dna) {
            Ok(matrix) => matrix,
            Err(_) => return DnaValidationResult::invalid(row_count, INVALID_MATRIX_MESSAGE),
        };
        let sequences = self.detect(&matrix);
        DnaValidationResult::valid(matrix.size(), sequences, self.config.min_sequences)
    }

    pub fn is_mutant<S: AsRef<str>>(&self, dna: &[S]) -> bool {
        self.validate_dna(dna).is_mutant
    }

    fn detect(&self, matrix: &DnaMatrix) -> Vec<SequenceMatch> {
        let min_sequences = self.config.min_sequences;
        let scanner = SequenceScanner::new(matrix, self.config.sequence_length);
        let size = matrix.size();
        let mut found = vec![];

        for row in 0..size {
            if found.len() >= min_sequences {
                return found;
            }
            found.extend(scanner.scan_row(row));
        }

        for col in 0..size {
            if found.len() >= min_sequences {
                return found;
            }
            found.extend(scanner.scan_column(col));
        }

        if found.len() < min_sequences {
            scanner.scan_diagonals(&mut found, min_sequences);
        }
        found
    }
}

/// Validates `dna` with `config`, or the default configuration.
pub fn validate<S: AsRef<str>>(
    dna: &[S],
    config: Option<&MutantDetectionConfig>,
) -> DnaValidationResult {
    let detector = config.copied().map_or_else(MutantDetector::new, MutantDetector::with_config);
    detector.validate_dna(dna)
}

pub fn is_mutant<S: AsRef<str>>(dna: &[S]) -> bool {
    MutantDetector::new().is_mutant(dna)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutant_protocol::{DnaBase, Position};

    const MUTANT: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
    const HUMAN: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"];

    fn assert_well_formed(dna: &[&str], result: &DnaValidationResult, length: usize) {
        let matrix = DnaMatrix::from_rows(dna).unwrap();
        for m in &result.sequences {
            assert_eq!(m.length, length);
            assert!(m.cells().all(|p| matrix.base_at(p) == Some(m.base)));
            assert_eq!(m.cells().last(), Some(m.end_position));
        }
    }

    #[test]
    fn test_mutant_example() {
        let result = validate(&MUTANT, None);
        assert!(result.is_mutant);
        assert!(result.is_valid);
        assert_eq!(result.matrix_size, 6);
        assert!(result.error_message.is_none());
        assert_eq!(result.sequences.len(), 2);
        assert_eq!(result.sequences[0].base, DnaBase::C);
        assert_eq!(result.sequences[0].direction, SequenceDirection::Horizontal);
        assert_eq!(result.sequences[0].start_position, Position::new(4, 0));
        assert_eq!(result.sequences[1].base, DnaBase::G);
        assert_eq!(result.sequences[1].direction, SequenceDirection::Vertical);
        assert_eq!(result.sequences[1].start_position, Position::new(0, 4));
        assert_eq!(result.sequences[1].end_position, Position::new(3, 4));
        assert_well_formed(&MUTANT, &result, 4);
    }

    #[test]
    fn test_human_example() {
        let result = validate(&HUMAN, None);
        assert!(!result.is_mutant);
        assert!(result.is_valid);
        assert!(result.sequences.is_empty());
        assert!(!is_mutant(&HUMAN));
    }

    #[test]
    fn test_empty_matrix() {
        let empty: [&str; 0] = [];
        let result = validate(&empty, None);
        assert!(!result.is_valid);
        assert!(!result.is_mutant);
        assert!(result.sequences.is_empty());
        assert!(result.error_message.is_some());
    }

    #[test]
    fn test_missing_matrix() {
        let result = MutantDetector::new().validate_optional::<String>(None);
        assert!(!result.is_valid);
        assert!(!result.is_mutant);
        assert_eq!(result.matrix_size, 0);
    }

    #[test]
    fn test_ragged_matrix() {
        let dna = ["ATGC", "CAGTGC", "TTAT"];
        let result = validate(&dna, None);
        assert!(!result.is_valid);
        assert!(!result.is_mutant);
        assert!(result.sequences.is_empty());
        assert_eq!(result.error_message.as_deref(), Some(INVALID_MATRIX_MESSAGE));
    }

    #[test]
    fn test_invalid_characters_share_message() {
        let lower = ["atgcga", "cagtgc", "ttatgt", "agaagg", "ccccta", "tcactg"];
        let special = ["ATG!GA", "CAGTGC", "TTATGT", "AGACGG", "GCGTCA", "TCACTG"];
        let bad = ["ATGCGA", "CAGTGC", "TTATXT", "AGACGG", "GCGTCA", "TCACTG"];
        for dna in [lower, special, bad] {
            let result = validate(&dna, None);
            assert!(!result.is_valid);
            assert!(!result.is_mutant);
            assert_eq!(result.error_message.as_deref(), Some(INVALID_MATRIX_MESSAGE));
        }
    }

    #[test]
    fn test_four_by_four_stops_after_two_rows() {
        let dna = ["AAAA", "CCCC", "TTTT", "GGGG"];
        let result = validate(&dna, None);
        assert!(result.is_mutant);
        assert_eq!(result.sequences.len(), 2);
        assert!(
            result
                .sequences
                .iter()
                .all(|m| m.direction == SequenceDirection::Horizontal)
        );
        assert_eq!(result.sequences[1].start_position, Position::new(1, 0));
    }

    #[test]
    fn test_single_run_is_not_mutant() {
        let dna = ["AAAATG", "CAGTGC", "TTATGT", "AGACGG", "GCGTCA", "TCACTG"];
        let result = validate(&dna, None);
        assert!(!result.is_mutant);
        assert_eq!(result.sequences.len(), 1);
        assert_eq!(result.sequences[0].direction, SequenceDirection::Horizontal);
        assert_eq!(result.sequences[0].end_position, Position::new(0, 3));
    }

    #[test]
    fn test_exactly_two_runs() {
        let dna = ["AAAATG", "CAGTGC", "TTATGT", "AGACGG", "CCCCTA", "TCACTG"];
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_vertical_runs() {
        let dna = ["ATGCGA", "ATGTGC", "ATATGT", "AGACGG", "GCGTCA", "TCACTG"];
        let result = validate(&dna, None);
        assert!(result.is_mutant);
        assert!(
            result
                .sequences
                .iter()
                .all(|m| m.direction == SequenceDirection::Vertical)
        );
        assert_well_formed(&dna, &result, 4);
    }

    #[test]
    fn test_diagonal_runs_reported() {
        let right = ["ATGCGA", "CATGCC", "TCATGT", "AGACAG", "GCGTCA", "TCACTG"];
        let result = validate(&right, None);
        assert!(!result.is_mutant);
        assert_eq!(result.sequences.len(), 1);
        assert_eq!(result.sequences[0].direction, SequenceDirection::DiagonalRight);

        let left = ["ATGCAA", "CAGTAC", "TTAAGT", "AGACGG", "GCGTCA", "TCACTG"];
        let result = validate(&left, None);
        assert_eq!(result.sequences.len(), 1);
        assert_eq!(result.sequences[0].direction, SequenceDirection::DiagonalLeft);
    }

    #[test]
    fn test_no_runs() {
        let dna = ["ATCG", "CGAT", "ATCG", "CGAT"];
        let result = validate(&dna, None);
        assert!(result.is_valid);
        assert!(!result.is_mutant);
        assert!(result.sequences.is_empty());
    }

    #[test]
    fn test_early_stop_skips_later_passes() {
        let dna = ["AAAATG", "CCCCGC", "TTTTGT", "GGGGGG", "GCGTCA", "TCACTG"];
        let result = validate(&dna, None);
        assert!(result.is_mutant);
        assert_eq!(result.sequences.len(), 2);
        assert_eq!(result.sequences[0].base, DnaBase::A);
        assert_eq!(result.sequences[1].base, DnaBase::C);
    }

    #[test]
    fn test_high_minimum_collects_every_pass() {
        let config = MutantDetectionConfig::new(4, 100).unwrap();
        let result = validate(&MUTANT, Some(&config));
        assert!(!result.is_mutant);
        let directions: Vec<SequenceDirection> =
            result.sequences.iter().map(|m| m.direction).collect();
        assert_eq!(
            directions,
            vec![
                SequenceDirection::Horizontal,
                SequenceDirection::Vertical,
                SequenceDirection::DiagonalRight,
            ]
        );
        assert_eq!(result.sequences[2].start_position, Position::new(0, 0));
        assert_well_formed(&MUTANT, &result, 4);
    }

    #[test]
    fn test_all_same_base() {
        let dna = ["AAAA", "AAAA", "AAAA", "AAAA"];
        assert!(is_mutant(&dna));
        let config = MutantDetectionConfig::new(4, 100).unwrap();
        let result = validate(&dna, Some(&config));
        assert_eq!(result.sequences.len(), 10);
        assert_well_formed(&dna, &result, 4);
    }

    #[test]
    fn test_large_matrix() {
        let dna = [
            "ATGCGAATGC",
            "CAGTGCAGTG",
            "TTATGTTTAT",
            "AGAAGGAGAA",
            "CCCCTACCCC",
            "TCACTGTCAC",
            "ATGCGAATGC",
            "CAGTGCAGTG",
            "TTATGTTTAT",
            "AGAAGGAGAA",
        ];
        let result = validate(&dna, None);
        assert!(result.is_valid);
        assert!(result.is_mutant);
        assert_eq!(result.matrix_size, 10);
    }

    #[test]
    fn test_custom_run_length() {
        let dna = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
        let config = MutantDetectionConfig::new(3, 1).unwrap();
        let result = validate(&dna, Some(&config));
        assert!(result.is_mutant);
        assert_eq!(result.sequences.len(), 1);
        assert_eq!(result.sequences[0].length, 3);
        assert_eq!(result.sequences[0].base, DnaBase::C);
        assert_eq!(result.sequences[0].start_position, Position::new(4, 0));
        assert_eq!(result.sequences[0].end_position, Position::new(4, 2));
        assert_well_formed(&dna, &result, 3);
    }

    #[test]
    fn test_zero_config_is_invalid_result() {
        let detector = MutantDetector::with_config(MutantDetectionConfig {
            sequence_length: 0,
            min_sequences: 2,
        });
        let result = detector.validate_dna(&MUTANT);
        assert!(!result.is_valid);
        assert!(!result.is_mutant);
        assert!(
            result
                .error_message
                .unwrap()
                .starts_with("Invalid detection configuration")
        );
    }

    #[test]
    fn test_is_mutant_agrees_with_validate() {
        let detector = MutantDetector::new();
        for dna in [MUTANT, HUMAN] {
            assert_eq!(detector.is_mutant(&dna), detector.validate_dna(&dna).is_mutant);
        }
    }

    #[test]
    fn test_idempotent() {
        let detector = MutantDetector::new();
        assert_eq!(detector.validate_dna(&MUTANT), detector.validate_dna(&MUTANT));
        let owned: Vec<String> = MUTANT.iter().map(|s| s.to_string()).collect();
        assert_eq!(detector.validate_dna(&owned), detector.validate_dna(&MUTANT));
    }

    #[test]
    fn test_config_accessor() {
        assert_eq!(MutantDetector::new().config(), &MutantDetectionConfig::default());
        let config = MutantDetectionConfig::new(5, 3).unwrap();
        assert_eq!(MutantDetector::with_config(config).config(), &config);
    }

    #[test]
    fn test_capabilities() {
        let caps = MutantDetector::capabilities();
        assert_eq!(caps.protocol_version, "v1");
        assert_eq!(caps.supported_directions.len(), 4);
        assert!(caps.supported_commands.iter().any(|c| c == "validate"));
        assert_eq!(caps.default_config, MutantDetectionConfig::default());
    }
}
