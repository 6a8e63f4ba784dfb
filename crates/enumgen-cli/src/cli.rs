//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Generate safe Go enum types from `// ENUM Name (a, b, c)` comments.
///
/// Every declaration in the input becomes a struct-backed enum with string
/// conversion, case-insensitive parsing, integer lookup, and JSON, text,
/// database and (optionally) YAML marshaling.
#[derive(Parser, Debug)]
#[command(name = "enumgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file to process
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate YAML marshaler/unmarshaler
    #[arg(short, long)]
    pub yaml: bool,

    /// Package name for the output (defaults to the input's package clause)
    #[arg(long)]
    pub package: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
