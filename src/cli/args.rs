//! Command line argument parsing for the Garble CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Garble - a deterministic, lemma-keyed vowel-disguise text transform
#[derive(Parser, Debug, Clone)]
#[command(name = "garble")]
#[command(about = "Disguise text by remapping vowels per lemma")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Garble Contributors")]
#[command(long_about = None)]
pub struct GarbleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GarbleArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mix text line by line from a file or stdin
    Mix(MixArgs),

    /// Show the per-token pipeline values for a piece of text
    Inspect(InspectArgs),
}

/// Arguments for the mix command
#[derive(Parser, Debug, Clone)]
pub struct MixArgs {
    /// Input file to read lines from (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Digest algorithm to key permutations with
    #[arg(long, default_value = "sha-1")]
    pub algorithm: String,
}

/// Arguments for the inspect command
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// The text to trace through the pipeline
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Digest algorithm to key permutations with
    #[arg(long, default_value = "sha-1")]
    pub algorithm: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
