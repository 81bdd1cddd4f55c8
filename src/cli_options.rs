//! Argument handling for `mutant_cli`.

use crate::matrix_input::{self, MatrixRows};
use mutant_protocol::MutantDetectionConfig;
use std::env;

pub const VERBOSE_ENV: &str = "MUTANT_DETECTOR_VERBOSE";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<String>,
    pub sequence_length: Option<usize>,
    pub min_sequences: Option<usize>,
    pub normalize: bool,
    pub verbose: bool,
    pub positional: Vec<String>,
}

pub fn flag_value_enabled(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn env_flag_enabled(name: &str) -> bool {
    flag_value_enabled(&env::var(name).unwrap_or_default())
}

fn parse_count(flag: &str, value: Option<&String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("Missing value for {flag}"))?;
    value
        .parse::<usize>()
        .map_err(|e| format!("Invalid value '{value}' for {flag}: {e}"))
}

impl CliOptions {
    /// `args` excludes the program name. `verbose` is the starting value,
    /// usually taken from `MUTANT_DETECTOR_VERBOSE`.
    pub fn parse(args: &[String], verbose: bool) -> Result<Self, String> {
        let mut options = Self {
            verbose,
            ..Self::default()
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    let path = iter.next().ok_or("Missing path for --config")?;
                    options.config_path = Some(path.clone());
                }
                "--length" => options.sequence_length = Some(parse_count(arg, iter.next())?),
                "--min" => options.min_sequences = Some(parse_count(arg, iter.next())?),
                "--normalize" => options.normalize = true,
                "--verbose" | "-v" => options.verbose = true,
                _ => options.positional.push(arg.clone()),
            }
        }
        Ok(options)
    }

    /// Config file first, then `--length` and `--min` on top.
    pub fn resolve_config(&self) -> Result<MutantDetectionConfig, String> {
        let mut config = match &self.config_path {
            Some(path) => matrix_input::load_config(path).map_err(|e| e.to_string())?,
            None => MutantDetectionConfig::default(),
        };
        if let Some(length) = self.sequence_length {
            config.sequence_length = length;
        }
        if let Some(min) = self.min_sequences {
            config.min_sequences = min;
        }
        config.check()?;
        Ok(config)
    }

    pub fn prepare_rows(&self, rows: MatrixRows) -> MatrixRows {
        if self.normalize {
            rows.map(|rows| matrix_input::normalize_rows(&rows))
        } else {
            rows
        }
    }
}
