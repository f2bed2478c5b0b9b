//! Command-line parsing for the retention strategy advisor.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/decision code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "retain",
    version,
    about = "HR Retention Strategy Advisor (attrition risk + ELTV)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze employee record(s) and print the recommended HR strategy.
    Analyze(AnalyzeArgs),
    /// Print the categorical option sets from the model bundle.
    ///
    /// This is the data a form front-end would use to populate its choice
    /// widgets.
    Options(BundleArgs),
    /// Generate random valid employee record(s) as JSON.
    Sample(SampleArgs),
}

/// Options shared by every subcommand that reads the model bundle.
#[derive(Debug, Args, Clone)]
pub struct BundleArgs {
    /// Directory holding the eight model artifacts.
    #[arg(short = 'b', long, default_value = "bundle")]
    pub bundle: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,

    /// Path to the record JSON (a single object, or an array for batch
    /// scoring).
    pub record: PathBuf,

    /// Print machine-readable JSON instead of the formatted report.
    #[arg(long)]
    pub json: bool,

    /// Write records + results to a timestamped export JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of records to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}
