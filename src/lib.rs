//! Reader for Khronos-style enum spec files (`enum.spec`, `enumext.spec`).
//!
//! Files group constants under `<Category> enum:` headers. Definitions bind a
//! name to a numeric literal (type suffixes such as `u`/`ull` are dropped) or to
//! another constant via `GL_<name>`. `use <Category> <name>` lines copy a value
//! from a category that may only be declared later, so they are resolved after
//! the whole file is read.
//!
//! Malformed or unresolvable lines never abort a parse; they are collected as
//! [`Diagnostic`]s alongside the best-effort [`Registry`].

pub mod diagnostic;
pub mod grammar;
pub mod literal;
pub mod reader;
pub mod registry;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use reader::{EnumReader, ParseOutcome};
pub use registry::{Category, Registry};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses an enum spec from any buffered reader.
pub fn read_enums<R: BufRead>(input: R) -> Result<ParseOutcome> {
    EnumReader::new().read(input)
}

/// Opens `path` and parses it with [`read_enums`].
pub fn read_enums_from_file(path: &Path) -> Result<ParseOutcome> {
    let file =
        File::open(path).with_context(|| format!("opening enum spec {}", path.display()))?;
    read_enums(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}
