//! Errors raised while building and navigating the tree.

use crate::kind::NodeKind;
use formula_symbols::InvalidLiteral;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The underlying failure of a free-form literal conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Malformed or out-of-range 32-bit integer.
    #[error(transparent)]
    Integer(#[from] ParseIntError),
    /// Malformed floating-point number.
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    /// Non-finite value spelled other than `Infinity` or `NaN`.
    #[error("non-finite numbers are spelled `Infinity` or `NaN`")]
    NonFiniteSpelling,
    /// Neither `true` nor `false`.
    #[error("expected `true` or `false`")]
    Boolean,
    /// Text that does not match the date-time layout.
    #[error(transparent)]
    Date(#[from] chrono::ParseError),
    /// Text that matches the layout but uses a form the date-time grammar excludes.
    #[error("{0}")]
    DateLayout(&'static str),
    /// A name outside a closed set whose failures are not enumerated.
    #[error("no {type_name} is named `{raw}`")]
    UnknownName { type_name: &'static str, raw: String },
}

/// Raised by a node constructor when the raw text cannot be converted to the node's value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A free-form literal failed to parse; the parser's error is the source.
    #[error("cannot convert `{raw}` to {target}")]
    Failure {
        raw: String,
        /// Name of the target type.
        target: &'static str,
        source: ParseFailure,
    },
    /// The raw text is not a member of a closed vocabulary.
    #[error(transparent)]
    InvalidLiteral(#[from] InvalidLiteral),
}

impl ConversionError {
    pub(crate) fn failure(raw: &str, target: &'static str, source: impl Into<ParseFailure>) -> Self {
        ConversionError::Failure {
            raw: raw.to_string(),
            target,
            source: source.into(),
        }
    }

    /// Returns `true` if the raw text is outside a closed vocabulary.
    pub fn is_invalid_literal(&self) -> bool {
        matches!(self, ConversionError::InvalidLiteral(_))
    }

    /// The raw text that failed to convert.
    pub fn raw_value(&self) -> &str {
        match self {
            ConversionError::Failure { raw, .. } => raw,
            ConversionError::InvalidLiteral(err) => &err.raw,
        }
    }
}

/// Structural misuse of a node. These are bugs in the caller, not data errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    /// `child(index)` with `index >= size()`.
    #[error("child index {index} is out of range for a node with {size} children")]
    ChildIndexOutOfRange { index: usize, size: usize },
    /// `child_of_kind(n, kind)` with fewer than `n + 1` matching children.
    #[error("child #{n} of kind {kind} was requested but the node has only {found} such children")]
    NotEnoughChildrenOfKind {
        n: usize,
        kind: NodeKind,
        found: usize,
    },
    /// `add_child` on a leaf.
    #[error("{kind} node is a leaf and cannot hold children")]
    NotComposite { kind: NodeKind },
}
