//! The `Grammar` value and its leaf primitives.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::doc::Doc;
use crate::error::{DecodeError, DecodeReason, EncodeError, Segment};

type EncodeFn<T> = dyn Fn(&T) -> Result<Value, EncodeError> + Send + Sync;
type DecodeFn<T> = dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync;

/// Bidirectional mapping between `T` and JSON, plus its documentation.
///
/// The encoder, the decoder and the [`Doc`] are produced by the same
/// combinator calls, so they cannot disagree about field names, tags or
/// optionality. Grammars are cheap to clone and safe to share across threads.
pub struct Grammar<T> {
    doc: Doc,
    encode: Arc<EncodeFn<T>>,
    decode: Arc<DecodeFn<T>>,
}

impl<T> Clone for Grammar<T> {
    fn clone(&self) -> Self {
        Self {
            doc: self.doc.clone(),
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for Grammar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Grammar<T> {
    /// Build a grammar from raw parts. Prefer the combinators; this is the
    /// escape hatch for leaf types they do not cover.
    pub fn new(
        doc: Doc,
        encode: impl Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
        decode: impl Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            doc,
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    #[must_use]
    pub fn doc(&self) -> &Doc {
        &self.doc
    }

    /// Run the grammar forward.
    pub fn encode(&self, value: &T) -> Result<Value, EncodeError> {
        (self.encode)(value)
    }

    /// Run the grammar backward.
    pub fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        (self.decode)(value)
    }

    /// Reuse this grammar for a type isomorphic to `T` (typically a newtype).
    #[must_use]
    pub fn map<U: 'static>(
        self,
        into: impl Fn(T) -> U + Send + Sync + 'static,
        from: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> Grammar<U> {
        let Self {
            doc,
            encode,
            decode,
        } = self;
        Grammar::new(
            doc,
            move |value| encode(&from(value)),
            move |json| decode(json).map(&into),
        )
    }
}

#[must_use]
pub fn string() -> Grammar<String> {
    Grammar::new(
        Doc::String,
        |value: &String| Ok(Value::String(value.clone())),
        |json| match json {
            Value::String(text) => Ok(text.clone()),
            other => Err(DecodeError::unexpected("string", other)),
        },
    )
}

#[must_use]
pub fn integer() -> Grammar<i64> {
    Grammar::new(
        Doc::Integer,
        |value: &i64| Ok(Value::from(*value)),
        |json| match json {
            Value::Number(number) => number.as_i64().ok_or_else(|| {
                if number.is_u64() {
                    DecodeError::new(DecodeReason::IntegerOutOfRange(number.to_string()))
                } else {
                    DecodeError::unexpected("integer", json)
                }
            }),
            other => Err(DecodeError::unexpected("integer", other)),
        },
    )
}

/// JSON array whose elements all follow `items`. Failures name the index.
#[must_use]
pub fn array<T: 'static>(items: Grammar<T>) -> Grammar<Vec<T>> {
    let doc = Doc::Array {
        items: Box::new(items.doc().clone()),
    };
    let encoder = items.clone();
    Grammar::new(
        doc,
        move |values: &Vec<T>| {
            values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    encoder
                        .encode(value)
                        .map_err(|err| err.within(Segment::Index(index)))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        },
        move |json| match json {
            Value::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    items
                        .decode(element)
                        .map_err(|err| err.within(Segment::Index(index)))
                })
                .collect(),
            other => Err(DecodeError::unexpected("array", other)),
        },
    )
}

/// Two-element JSON array `[first, second]`.
#[must_use]
pub fn pair<A: 'static, B: 'static>(first: Grammar<A>, second: Grammar<B>) -> Grammar<(A, B)> {
    let doc = Doc::Pair {
        first: Box::new(first.doc().clone()),
        second: Box::new(second.doc().clone()),
    };
    let (encode_first, encode_second) = (first.clone(), second.clone());
    Grammar::new(
        doc,
        move |(a, b): &(A, B)| {
            let a = encode_first
                .encode(a)
                .map_err(|err| err.within(Segment::Index(0)))?;
            let b = encode_second
                .encode(b)
                .map_err(|err| err.within(Segment::Index(1)))?;
            Ok(Value::Array(vec![a, b]))
        },
        move |json| match json {
            Value::Array(elements) if elements.len() == 2 => {
                let a = first
                    .decode(&elements[0])
                    .map_err(|err| err.within(Segment::Index(0)))?;
                let b = second
                    .decode(&elements[1])
                    .map_err(|err| err.within(Segment::Index(1)))?;
                Ok((a, b))
            }
            Value::Array(elements) => Err(DecodeError::new(DecodeReason::PairLength {
                found: elements.len(),
            })),
            other => Err(DecodeError::unexpected("array", other)),
        },
    )
}

/// Closed set of values, each written as one string literal.
///
/// Literals must be distinct; an unknown literal fails decoding with an error
/// naming `label`.
#[must_use]
pub fn enumeration<T>(label: &'static str, cases: &'static [(T, &'static str)]) -> Grammar<T>
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    debug_assert!(
        cases
            .iter()
            .enumerate()
            .all(|(i, (_, literal))| cases[..i].iter().all(|(_, seen)| seen != literal)),
        "duplicate literal in enumeration {label}"
    );
    let doc = Doc::Enumeration {
        name: label,
        literals: cases.iter().map(|(_, literal)| *literal).collect(),
    };
    Grammar::new(
        doc,
        move |value| {
            cases
                .iter()
                .find(|(case, _)| case == value)
                .map(|(_, literal)| Value::from(*literal))
                .ok_or_else(|| EncodeError::uncovered(label))
        },
        move |json| match json {
            Value::String(text) => cases
                .iter()
                .find(|(_, literal)| literal == text)
                .map(|(case, _)| *case)
                .ok_or_else(|| {
                    DecodeError::new(DecodeReason::UnknownLiteral {
                        label,
                        found: text.clone(),
                    })
                }),
            other => Err(DecodeError::unexpected("string", other)),
        },
    )
}

/// Refer to a named grammar without inlining its documentation.
///
/// The referenced grammar is built on first use, once per reference, which
/// also allows recursive definitions.
#[must_use]
pub fn reference<T: 'static>(name: &'static str, define: fn() -> Grammar<T>) -> Grammar<T> {
    let cell: Arc<OnceLock<Grammar<T>>> = Arc::new(OnceLock::new());
    let decode_cell = Arc::clone(&cell);
    Grammar::new(
        Doc::Ref { name },
        move |value| cell.get_or_init(define).encode(value),
        move |json| decode_cell.get_or_init(define).decode(json),
    )
}
