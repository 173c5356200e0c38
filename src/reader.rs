//! Two-pass enum spec reader.
//!
//! The first pass walks the input line by line, filling the registry and
//! resolving `GL_`/`GLX_` references against whatever has been defined so far.
//! `use` aliases may point at categories that appear later in the file, so they
//! are parked in a side table and resolved in a second pass once the whole
//! input has been read.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::grammar::{Line, classify, trim_line};
use crate::literal::{Literal, normalize};
use crate::registry::Registry;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Sibling category consulted when an alias source lacks the constant.
const DEPRECATED_SUFFIX: &str = "_DEPRECATED";

/// Registry plus every non-fatal problem met while building it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub registry: Registry,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone)]
struct PendingAlias {
    source: String,
    line: usize,
}

/// Builder state for a single parse. Created fresh per input.
#[derive(Debug, Default)]
pub struct EnumReader {
    registry: Registry,
    current: String,
    // target category -> constant name -> alias source
    deferred: BTreeMap<String, BTreeMap<String, PendingAlias>>,
    diagnostics: Vec<Diagnostic>,
}

impl EnumReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every line from `input`, then resolves deferred aliases.
    ///
    /// Only I/O failures (including non-UTF-8 input) are returned as errors;
    /// malformed lines end up in `ParseOutcome::diagnostics`.
    pub fn read<R: BufRead>(mut self, mut input: R) -> Result<ParseOutcome> {
        let mut buf = String::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            let read = input
                .read_line(&mut buf)
                .with_context(|| format!("reading enum spec line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            self.feed_line(line_no, &buf);
        }
        tracing::debug!(lines = line_no, "first pass complete");
        Ok(self.finish())
    }

    /// Applies one raw input line to the registry.
    pub(crate) fn feed_line(&mut self, line_no: usize, raw: &str) {
        let line = trim_line(raw);
        match classify(line) {
            Line::Ignored => {}
            Line::Header { name } => {
                self.current = name.to_string();
                self.registry.reset_category(name);
            }
            Line::Definition { name, literal } => self.define(line_no, name, literal),
            Line::Alias { source, name } => {
                self.deferred
                    .entry(self.current.clone())
                    .or_default()
                    .insert(
                        name.to_string(),
                        PendingAlias {
                            source: source.to_string(),
                            line: line_no,
                        },
                    );
            }
            Line::Unrecognized => self.report(Diagnostic::new(
                line_no,
                DiagnosticKind::UnparsedLine {
                    text: line.to_string(),
                },
            )),
        }
    }

    fn define(&mut self, line_no: usize, name: &str, literal: &str) {
        let value = match normalize(literal) {
            Literal::Value(value) => value.to_string(),
            Literal::Reference { name: referenced } => {
                match self.registry.lookup_definition(referenced) {
                    Some(value) => value.to_string(),
                    None => {
                        self.report(Diagnostic::new(
                            line_no,
                            DiagnosticKind::UnresolvedReference {
                                name: referenced.to_string(),
                            },
                        ));
                        return;
                    }
                }
            }
        };
        self.registry.category_mut(&self.current).insert(name, value);
    }

    /// Runs the deferred alias pass and hands back the finished registry.
    ///
    /// Every alias is looked up against the registry as the first pass left
    /// it, so an alias never sees another alias's result.
    pub(crate) fn finish(mut self) -> ParseOutcome {
        let deferred = std::mem::take(&mut self.deferred);
        let mut resolved = Vec::new();
        for (target, aliases) in deferred {
            for (name, alias) in aliases {
                match self.dereference(&alias.source, &name) {
                    Some(value) => resolved.push((target.clone(), name, value)),
                    None => self.report(Diagnostic::new(
                        alias.line,
                        DiagnosticKind::UnresolvedAlias {
                            target: target.clone(),
                            source: alias.source,
                            name,
                        },
                    )),
                }
            }
        }
        tracing::debug!(resolved = resolved.len(), "deferred aliases resolved");
        for (target, name, value) in resolved {
            self.registry.category_mut(&target).insert(name, value);
        }
        ParseOutcome {
            registry: self.registry,
            diagnostics: self.diagnostics,
        }
    }

    fn dereference(&self, source: &str, name: &str) -> Option<String> {
        self.registry
            .value(source, name)
            .or_else(|| {
                self.registry
                    .value(&format!("{source}{DEPRECATED_SUFFIX}"), name)
            })
            .map(str::to_string)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.trace();
        self.diagnostics.push(diagnostic);
    }
}
