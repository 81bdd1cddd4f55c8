//! Loading matrices and configuration for the command-line front end.
//!
//! None of this runs inside the detector: the core sees the rows exactly as
//! given, so trimming and upper-casing happen here and only on request.

use crate::error::{DetectorError, ErrorCode};
use mutant_protocol::MutantDetectionConfig;
use std::{fs, path::Path};

/// A matrix as read from input; `None` is an explicit JSON `null`.
pub type MatrixRows = Option<Vec<String>>;

pub fn normalize_rows<S: AsRef<str>>(rows: &[S]) -> Vec<String> {
    rows.iter()
        .map(|row| row.as_ref().trim().to_ascii_uppercase())
        .collect()
}

/// One row per line; blank lines are skipped and line endings stripped.
pub fn parse_matrix_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_matrix_json(text: &str) -> Result<MatrixRows, DetectorError> {
    serde_json::from_str(text).map_err(|e| {
        DetectorError::new(
            ErrorCode::InvalidInput,
            format!("Invalid matrix JSON (expected an array of row strings): {e}"),
        )
    })
}

pub fn parse_batch_json(text: &str) -> Result<Vec<MatrixRows>, DetectorError> {
    serde_json::from_str(text).map_err(|e| {
        DetectorError::new(
            ErrorCode::InvalidInput,
            format!("Invalid batch JSON (expected an array of matrices): {e}"),
        )
    })
}

fn read_file(path: &str) -> Result<String, DetectorError> {
    fs::read_to_string(path).map_err(|e| {
        DetectorError::new(ErrorCode::Io, format!("Could not read file '{path}': {e}"))
    })
}

fn is_json_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Inline JSON, or `@path` to read a file. Files ending in `.json` are parsed
/// as JSON, anything else as one row per line.
pub fn load_matrix_arg(value: &str) -> Result<MatrixRows, DetectorError> {
    match value.strip_prefix('@') {
        Some(path) if is_json_path(path) => parse_matrix_json(&read_file(path)?),
        Some(path) => Ok(Some(parse_matrix_text(&read_file(path)?))),
        None => parse_matrix_json(value),
    }
}

/// Inline JSON or `@file.json` holding an array of matrices.
pub fn load_batch_arg(value: &str) -> Result<Vec<MatrixRows>, DetectorError> {
    match value.strip_prefix('@') {
        Some(path) => parse_batch_json(&read_file(path)?),
        None => parse_batch_json(value),
    }
}

pub fn load_config(path: &str) -> Result<MutantDetectionConfig, DetectorError> {
    let config: MutantDetectionConfig =
        serde_json::from_str(&read_file(path)?).map_err(|e| {
            DetectorError::new(
                ErrorCode::InvalidConfig,
                format!("Could not parse config JSON '{path}': {e}"),
            )
        })?;
    config
        .check()
        .map_err(|e| DetectorError::new(ErrorCode::InvalidConfig, format!("'{path}': {e}")))?;
    Ok(config)
}
