//! Plain-text and summary views of a validation result, for the CLI.

use itertools::Itertools;
use mutant_protocol::{DnaValidationResult, SequenceDirection, SequenceMatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionCount {
    pub direction: SequenceDirection,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub is_mutant: bool,
    pub matrix_size: usize,
    pub sequence_count: usize,
    pub by_direction: Vec<DirectionCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationSummary {
    pub fn from_result(result: &DnaValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            is_mutant: result.is_mutant,
            matrix_size: result.matrix_size,
            sequence_count: result.sequence_count(),
            by_direction: counts_by_direction(&result.sequences),
            error_message: result.error_message.clone(),
        }
    }
}

/// Directions that occur at least once, in scan order.
pub fn counts_by_direction(sequences: &[SequenceMatch]) -> Vec<DirectionCount> {
    let counts = sequences.iter().map(|m| m.direction).counts();
    SequenceDirection::ALL
        .into_iter()
        .filter_map(|direction| {
            counts.get(&direction).map(|&count| DirectionCount { direction, count })
        })
        .collect()
}

fn match_at(sequences: &[SequenceMatch], row: usize, col: usize) -> Option<usize> {
    sequences.iter().position(|m| m.contains(row, col))
}

/// Renders the matrix with matched cells in brackets, followed by a legend.
/// A cell shared by several runs is attributed to the first one found.
pub fn render_text_report<S: AsRef<str>>(dna: &[S], result: &DnaValidationResult) -> String {
    let mut out = String::new();
    if !result.is_valid {
        out.push_str("Invalid matrix\n");
        if let Some(message) = &result.error_message {
            out.push_str(message);
            out.push('\n');
        }
        return out;
    }

    let verdict = if result.is_mutant { "MUTANT" } else { "HUMAN" };
    out.push_str(&format!(
        "{verdict}: {} sequence(s) in a {size}x{size} matrix\n",
        result.sequence_count(),
        size = result.matrix_size
    ));
    out.push('\n');

    for (row, line) in dna.iter().enumerate() {
        let cells = line
            .as_ref()
            .chars()
            .enumerate()
            .map(|(col, c)| match match_at(&result.sequences, row, col) {
                Some(_) => format!("[{c}]"),
                None => format!(" {c} "),
            })
            .join("");
        out.push_str(cells.trim_end());
        out.push('\n');
    }

    if result.sequences.is_empty() {
        return out;
    }
    out.push('\n');
    for (index, m) in result.sequences.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {:<12} {} {} -> {}\n",
            index + 1,
            m.direction.symbol(),
            m.direction.label(),
            m.base,
            m.start_position,
            m.end_position
        ));
    }
    let totals = counts_by_direction(&result.sequences)
        .iter()
        .map(|dc| format!("{} {}", dc.direction.symbol(), dc.count))
        .join(", ");
    out.push('\n');
    out.push_str("By direction: ");
    out.push_str(&totals);
    out.push('\n');
    out
}
