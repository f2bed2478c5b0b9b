//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the model bundle (exactly once per process)
//! - runs the analysis pipeline
//! - prints reports
//! - writes optional exports
//!
//! The loaded [`Bundle`](crate::io::bundle::Bundle) is the only long-lived
//! state: constructed here, then passed by shared reference into every
//! handler. No globals, no lazy statics.

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command, SampleArgs};
use crate::error::AppError;
use crate::io::bundle::Bundle;
use crate::io::export::AnalysisRow;

pub mod pipeline;

/// Entry point for the `retain` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Options(args) => {
            let bundle = Bundle::load(&args.bundle)?;
            print!("{}", crate::report::format_options(&bundle.options));
            Ok(())
        }
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let bundle = Bundle::load(&args.bundle.bundle)?;
    let records = crate::io::record::read_records(&args.record)?;
    let results = pipeline::analyze_batch(&bundle, &records)?;

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| AppError::internal(format!("Failed to serialize results: {e}")))?;
        println!("{json}");
    } else if let [result] = results.as_slice() {
        print!("{}", crate::report::format_analysis(result));
    } else {
        let rows: Vec<_> = records.iter().cloned().zip(results.iter().cloned()).collect();
        print!("{}", crate::report::format_batch(&rows));
    }

    if let Some(path) = &args.export {
        let rows = records
            .into_iter()
            .zip(results)
            .map(|(record, result)| AnalysisRow { record, result })
            .collect();
        crate::io::export::write_export_json(path, rows)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let bundle = Bundle::load(&args.bundle.bundle)?;
    let records = crate::data::generate_records(&bundle.options, args.seed, args.count)?;

    let json = if let [record] = records.as_slice() {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string_pretty(&records)
    }
    .map_err(|e| AppError::internal(format!("Failed to serialize records: {e}")))?;

    println!("{json}");
    Ok(())
}
