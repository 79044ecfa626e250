//! Encode and decode failures.
//!
//! Decode failures are expected: they describe malformed input and carry the
//! trail of properties, variants and array indices leading to the first
//! mismatch. Encode failures mean a grammar does not cover a value its type
//! allows, which is a defect in the grammar.

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Coarse JSON value kind, used in mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One step of an error trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Property(&'static str),
    /// Variant selected by a tag, shown as the tag literal.
    Variant(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(name) => f.write_str(name),
            Self::Variant(tag) => f.write_str(tag),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeReason {
    #[error("missing property '{0}'")]
    MissingProperty(&'static str),
    #[error("expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: JsonKind,
    },
    #[error("integer {0} is out of range")]
    IntegerOutOfRange(String),
    #[error("unmatched tag {found} for '{key}' of {label}")]
    UnknownTag {
        label: &'static str,
        key: &'static str,
        found: Value,
    },
    #[error("{found:?} is not a {label} literal")]
    UnknownLiteral { label: &'static str, found: String },
    #[error("expected {expected}, found {found}")]
    LiteralMismatch { expected: Value, found: Value },
    #[error("expected a pair, found an array of {found} elements")]
    PairLength { found: usize },
    #[error("{found} matches no alternative of {label}")]
    NoAlternative {
        label: &'static str,
        found: JsonKind,
    },
}

/// A JSON value that does not match a grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    label: Option<&'static str>,
    path: Vec<Segment>,
    reason: DecodeReason,
}

impl DecodeError {
    #[must_use]
    pub fn new(reason: DecodeReason) -> Self {
        Self {
            label: None,
            path: Vec::new(),
            reason,
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: &Value) -> Self {
        Self::new(DecodeReason::UnexpectedKind {
            expected,
            found: JsonKind::of(found),
        })
    }

    /// Prefix the trail with the step the failure happened under.
    #[must_use]
    pub fn within(mut self, segment: Segment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Name the type the whole decode was attempted for.
    #[must_use]
    pub fn labelled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    #[must_use]
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    #[must_use]
    pub fn reason(&self) -> &DecodeReason {
        &self.reason
    }

    /// The value failed at its outermost shape (wrong JSON kind), so the
    /// grammar never started matching it.
    pub(crate) fn is_shape_mismatch(&self) -> bool {
        self.path.is_empty() && matches!(self.reason, DecodeReason::UnexpectedKind { .. })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trail = render_trail(self.label, &self.path);
        if trail.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{trail}: {}", self.reason)
        }
    }
}

impl StdError for DecodeError {}

/// A value the grammar for its type does not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    label: &'static str,
    path: Vec<Segment>,
}

impl EncodeError {
    #[must_use]
    pub fn uncovered(label: &'static str) -> Self {
        Self {
            label,
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn within(mut self, segment: Segment) -> Self {
        self.path.insert(0, segment);
        self
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn path(&self) -> &[Segment] {
        &self.path
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trail = render_trail(None, &self.path);
        if !trail.is_empty() {
            write!(f, "{trail}: ")?;
        }
        write!(f, "no case of {} covers the value", self.label)
    }
}

impl StdError for EncodeError {}

fn render_trail(label: Option<&str>, path: &[Segment]) -> String {
    label
        .map(str::to_string)
        .into_iter()
        .chain(path.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join(" / ")
}
