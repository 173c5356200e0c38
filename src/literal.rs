//! Right-hand side normalization for constant definitions.

const GL_PREFIX: &str = "GL_";
const GLX_PREFIX: &str = "GLX_";
const UNSIGNED_SUFFIX: &str = "u";
const UNSIGNED_LONG_LONG_SUFFIX: &str = "ull";

/// What a definition's literal turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    /// `GL_<name>` or `GLX_<name>`: the value of another constant.
    Reference { name: &'a str },
    /// A bare numeric literal with any type suffix removed.
    Value(&'a str),
}

/// Normalizes a raw literal token.
///
/// Rules are checked in order: `GL_` prefix, `GLX_` prefix, `u` suffix,
/// `ull` suffix, verbatim.
pub fn normalize(raw: &str) -> Literal<'_> {
    if let Some(name) = raw.strip_prefix(GL_PREFIX) {
        Literal::Reference { name }
    } else if let Some(name) = raw.strip_prefix(GLX_PREFIX) {
        Literal::Reference { name }
    } else if let Some(value) = raw.strip_suffix(UNSIGNED_SUFFIX) {
        Literal::Value(value)
    } else if let Some(value) = raw.strip_suffix(UNSIGNED_LONG_LONG_SUFFIX) {
        Literal::Value(value)
    } else {
        Literal::Value(raw)
    }
}
