//! Line classification for enum spec files.
//!
//! Each trimmed line is one of: noise (blank, `#` comment, `passthru:`), a
//! category header, a constant definition, or a `use` alias. Shapes are tried
//! in that order and the first match wins; trailing text after a recognized
//! shape is ignored.

use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([_0-9A-Za-z]+)[ \t]+enum:").expect("header pattern compiles")
});
static DEFINITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([_0-9A-Za-z]+)[ \t]*=[ \t]*([\-_0-9A-Za-z]+)")
        .expect("definition pattern compiles")
});
static ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^use[ \t]+([_0-9A-Za-z]+)[ \t]+([_0-9A-Za-z]+)").expect("alias pattern compiles")
});

const COMMENT_PREFIX: &str = "#";
const PASSTHRU_PREFIX: &str = "passthru:";

/// Borrowed view of one classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank, comment or pass-through line.
    Ignored,
    /// `<name> enum:`
    Header { name: &'a str },
    /// `<name> = <literal>`
    Definition { name: &'a str, literal: &'a str },
    /// `use <source> <name>`
    Alias { source: &'a str, name: &'a str },
    Unrecognized,
}

/// Strips the whitespace the reader treats as insignificant around a line.
pub fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Classifies an already-trimmed line.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) || line.starts_with(PASSTHRU_PREFIX) {
        return Line::Ignored;
    }

    if let Some(caps) = HEADER_RE.captures(line) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        return Line::Header { name };
    }

    if let Some(caps) = DEFINITION_RE.captures(line) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let literal = caps.get(2).map_or("", |m| m.as_str());
        return Line::Definition { name, literal };
    }

    if let Some(caps) = ALIAS_RE.captures(line) {
        let source = caps.get(1).map_or("", |m| m.as_str());
        let name = caps.get(2).map_or("", |m| m.as_str());
        return Line::Alias { source, name };
    }

    Line::Unrecognized
}
