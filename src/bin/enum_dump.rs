//! Parse an enum spec file and print the resolved registry.
//!
//! Usage:
//!   enum-dump enum.spec
//!   enum-dump --category Boolean,AttribMask --format text enum.spec
//!   enum-dump --strict < enumext.spec

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glenums::{ParseOutcome, Registry, read_enums, read_enums_from_file};
use std::collections::BTreeSet;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const ENV_LOG: &str = "GLENUMS_LOG";
const EXIT_DIAGNOSTICS: u8 = 2;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "enum-dump")]
#[command(about = "Resolve an enum spec file into category -> constant -> value")]
struct Cli {
    /// Enum spec file; reads stdin when omitted or '-'.
    file: Option<PathBuf>,
    /// Only print these categories (repeatable, comma separated).
    #[arg(long = "category")]
    categories: Vec<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Exit with status 2 when any diagnostic was produced.
    #[arg(long)]
    strict: bool,
    /// Do not echo diagnostics on stderr.
    #[arg(long)]
    quiet: bool,
    /// Enable debug tracing on stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let outcome = load(cli.file.as_ref())?;
    let ParseOutcome {
        mut registry,
        diagnostics,
    } = outcome;

    if !cli.quiet {
        for diagnostic in &diagnostics {
            eprintln!("{diagnostic}");
        }
    }

    let wanted: BTreeSet<String> = cli
        .categories
        .iter()
        .flat_map(|raw| split_list(raw))
        .collect();
    if !wanted.is_empty() {
        registry.retain(|name| wanted.contains(name));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &registry).context("serializing registry")?;
            writeln!(out)?;
        }
        Format::Text => write_text(&mut out, &registry)?,
    }
    out.flush().context("flushing stdout")?;

    if cli.strict && !diagnostics.is_empty() {
        return Ok(ExitCode::from(EXIT_DIAGNOSTICS));
    }
    Ok(ExitCode::SUCCESS)
}

fn load(file: Option<&PathBuf>) -> Result<ParseOutcome> {
    match file {
        Some(path) if path.as_os_str() != "-" => read_enums_from_file(path),
        _ => read_enums(io::stdin().lock()).context("parsing enum spec from stdin"),
    }
}

// Category filters accept commas as well as repeated flags.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Emits a form the reader accepts back unchanged. Empty values have no
// definition syntax, so they are written as comments.
fn write_text(out: &mut impl Write, registry: &Registry) -> Result<()> {
    for (name, category) in registry.iter() {
        writeln!(out, "{name} enum:")?;
        for (constant, value) in category.iter() {
            if value.is_empty() {
                writeln!(out, "\t# {constant} has an empty value")?;
            } else {
                writeln!(out, "\t{constant} = {value}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // Diagnostics are already echoed by `run`; tracing stays quiet by default.
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("glenums=debug")
        } else {
            EnvFilter::new("off")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
