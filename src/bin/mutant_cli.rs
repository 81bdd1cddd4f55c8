use mutant_detector::{
    about,
    batch::validate_batch,
    cli_options::{CliOptions, VERBOSE_ENV, env_flag_enabled},
    detector::MutantDetector,
    matrix_input::{self, MatrixRows},
    report::{ValidationSummary, render_text_report},
};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct BatchOutput {
    matrix_count: usize,
    mutant_count: usize,
    invalid_count: usize,
    results: Vec<ValidationSummary>,
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  mutant_cli --version\n  \
  mutant_cli [OPTIONS] capabilities\n  \
  mutant_cli [OPTIONS] validate '<matrix-json>'\n  \
  mutant_cli [OPTIONS] is-mutant '<matrix-json>'\n  \
  mutant_cli [OPTIONS] report '<matrix-json>'\n  \
  mutant_cli [OPTIONS] batch '<matrices-json>'\n\n  \
  Options:\n  \
  --config PATH   detection config JSON (sequence_length, min_sequences)\n  \
  --length N      run length (default 4)\n  \
  --min N         runs needed to call a mutant (default 2)\n  \
  --normalize     trim and upper-case rows before detection\n  \
  --verbose       diagnostics on stderr (or {VERBOSE_ENV}=1)\n\n  \
  Tip: pass @file.json, or @file.txt with one row per line, instead of inline JSON"
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn matrix_arg(options: &CliOptions, command: &str) -> Result<MatrixRows, String> {
    let value = options.positional.get(1).ok_or_else(|| {
        usage();
        format!("Missing matrix for {command}")
    })?;
    let rows = matrix_input::load_matrix_arg(value).map_err(|e| e.to_string())?;
    Ok(options.prepare_rows(rows))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", about::version_cli_text());
        return Ok(());
    }

    let options = CliOptions::parse(&args[1..], env_flag_enabled(VERBOSE_ENV))?;
    let Some(command) = options.positional.first() else {
        usage();
        return Err("Missing command".to_string());
    };
    let detector = MutantDetector::with_config(options.resolve_config()?);
    if options.verbose {
        let config = detector.config();
        eprintln!(
            "config: sequence_length={} min_sequences={}",
            config.sequence_length, config.min_sequences
        );
    }

    match command.as_str() {
        "capabilities" => print_json(&MutantDetector::capabilities()),
        "validate" => {
            let rows = matrix_arg(&options, command)?;
            let result = detector.validate_optional(rows.as_deref());
            if options.verbose {
                eprintln!(
                    "matrix_size={} valid={} sequences={}",
                    result.matrix_size,
                    result.is_valid,
                    result.sequence_count()
                );
            }
            print_json(&result)
        }
        "is-mutant" => {
            let rows = matrix_arg(&options, command)?;
            let result = detector.validate_optional(rows.as_deref());
            if options.verbose {
                if let Some(message) = &result.error_message {
                    eprintln!("{message}");
                }
            }
            println!("{}", result.is_mutant);
            Ok(())
        }
        "report" => {
            let rows = matrix_arg(&options, command)?;
            let result = detector.validate_optional(rows.as_deref());
            let text = render_text_report(rows.as_deref().unwrap_or_default(), &result);
            print!("{text}");
            Ok(())
        }
        "batch" => {
            let value = options.positional.get(1).ok_or_else(|| {
                usage();
                "Missing matrices for batch".to_string()
            })?;
            let grids: Vec<MatrixRows> = matrix_input::load_batch_arg(value)
                .map_err(|e| e.to_string())?
                .into_iter()
                .map(|rows| options.prepare_rows(rows))
                .collect();
            let results = validate_batch(&detector, &grids);
            if options.verbose {
                eprintln!("validated {} matrices", results.len());
            }
            let output = BatchOutput {
                matrix_count: results.len(),
                mutant_count: results.iter().filter(|r| r.is_mutant).count(),
                invalid_count: results.iter().filter(|r| !r.is_valid).count(),
                results: results.iter().map(ValidationSummary::from_result).collect(),
            };
            print_json(&output)
        }
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}
