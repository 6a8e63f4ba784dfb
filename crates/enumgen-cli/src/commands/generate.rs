//! Generate command implementation.
//!
//! This command:
//! 1. Reads the input file
//! 2. Generates the Go enum source in memory
//! 3. Writes it to the output file, or stdout when none is given
//!
//! The output is opened only after generation succeeded, so a failed run
//! never leaves a truncated file behind.

use anyhow::{Context, Result};
use enumgen_codegen::EnumGenerator;
use enumgen_core::GeneratorConfig;
use enumgen_core::cli::ExitCode;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Options for one generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Input Go source file
    pub file: PathBuf,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Emit YAML marshal/unmarshal methods
    pub yaml: bool,
    /// Package name override
    pub package: Option<String>,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read
/// - The package name cannot be derived
/// - The input has no declarations, or a declaration has no values
/// - The output cannot be written
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let input_name = options.file.display().to_string();

    let source = fs::read_to_string(&options.file)
        .with_context(|| format!("failed to read input file '{input_name}'"))?;

    let config = GeneratorConfig::new(input_name.clone())
        .with_yaml(options.yaml)
        .with_package(options.package.clone());

    let generator = EnumGenerator::new().context("failed to initialize templates")?;
    let generated = generator
        .generate(&source, &config)
        .with_context(|| format!("failed to generate enums from '{input_name}'"))?;

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            write_output(BufWriter::new(file), &generated.content)
                .with_context(|| format!("failed to write output file '{}'", path.display()))?;
            info!(
                "Wrote {} enums ({}) to {}",
                generated.enum_count(),
                generated.enum_names.join(", "),
                path.display()
            );
        }
        None => {
            write_output(io::stdout().lock(), &generated.content)
                .context("failed to write to stdout")?;
            info!("Wrote {} enums to stdout", generated.enum_count());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_output<W: Write>(mut out: W, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}
