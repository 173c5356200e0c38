//! Non-fatal problems found while reading an enum spec.
//!
//! None of these stop a parse: the affected constant is simply left out of
//! the registry. The `Display` form is the one-line message echoed to users.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Line matched none of the known shapes.
    UnparsedLine { text: String },
    /// `GL_`/`GLX_` literal named a constant not defined yet.
    UnresolvedReference { name: String },
    /// `use` alias whose source (and its `_DEPRECATED` sibling) lacks the name.
    UnresolvedAlias {
        target: String,
        source: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line that produced the problem; for aliases, the `use` line.
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::UnresolvedReference { .. } => Severity::Error,
            DiagnosticKind::UnparsedLine { .. } | DiagnosticKind::UnresolvedAlias { .. } => {
                Severity::Warning
            }
        }
    }

    /// Emits this diagnostic as a `tracing` event at its severity.
    pub(crate) fn trace(&self) {
        match self.severity() {
            Severity::Error => tracing::error!(line = self.line, "{}", self),
            Severity::Warning => tracing::warn!(line = self.line, "{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = self.severity().as_str();
        match &self.kind {
            DiagnosticKind::UnparsedLine { text } => {
                write!(f, "{severity}: Unable to parse line: '{text}' (Ignoring)")
            }
            DiagnosticKind::UnresolvedReference { name } => {
                write!(f, "{severity}: Unable to find {name}.")
            }
            DiagnosticKind::UnresolvedAlias {
                target,
                source,
                name,
            } => write!(
                f,
                "{severity}: Failed to dereference {target}: \"use {source} {name}\""
            ),
        }
    }
}
