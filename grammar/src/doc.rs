//! Documentation tree carried by every grammar.
//!
//! `Display` renders the compact inline notation used in the API reference,
//! e.g. `{"request": "getSpanInfo", "module": ModuleName, "span": EitherSpan}`.
//! The tree also serializes to JSON for tooling.

use std::{fmt, slice};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Doc {
    String,
    Integer,
    /// A fixed JSON value (tags and flags).
    Literal { value: Value },
    Array { items: Box<Doc> },
    /// Two-element JSON array.
    Pair { first: Box<Doc>, second: Box<Doc> },
    /// A named type documented in its own entry.
    Ref { name: &'static str },
    Object { properties: Vec<PropertyDoc> },
    Enumeration {
        name: &'static str,
        literals: Vec<&'static str>,
    },
    /// Alternatives tried in order. `discriminator` names the tag key when
    /// the alternatives are tagged; untagged alternatives are told apart by
    /// shape alone.
    #[serde(rename_all = "camelCase")]
    OneOf {
        #[serde(skip_serializing_if = "Option::is_none")]
        discriminator: Option<&'static str>,
        alternatives: Vec<Doc>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDoc {
    pub name: &'static str,
    pub required: bool,
    pub shape: Doc,
}

impl Doc {
    /// Alternatives of a union, or the doc itself for anything else.
    #[must_use]
    pub fn alternatives(&self) -> &[Doc] {
        match self {
            Self::OneOf { alternatives, .. } => alternatives,
            other => slice::from_ref(other),
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Array { items } => write!(f, "[{items}]"),
            Self::Pair { first, second } => write!(f, "[{first}, {second}]"),
            Self::Ref { name } => f.write_str(name),
            Self::Object { properties } => {
                f.write_str("{")?;
                for (i, property) in properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{property}")?;
                }
                f.write_str("}")
            }
            Self::Enumeration { literals, .. } => {
                for (i, literal) in literals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", Value::from(*literal))?;
                }
                Ok(())
            }
            Self::OneOf { alternatives, .. } => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for PropertyDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.required { "" } else { "?" };
        write!(f, "{}{marker}: {}", Value::from(self.name), self.shape)
    }
}
