//! Bidirectional JSON grammars.
//!
//! A [`Grammar<T>`] encodes `T` to a [`serde_json::Value`], decodes it back
//! with a labelled error trail on mismatch, and documents the JSON shape. All
//! three come from one combinator expression:
//!
//! - leaves: [`string`], [`integer`], [`enumeration`], [`reference`]
//! - containers: [`array`], [`pair`], [`object`]
//! - sums: [`tagged`] (tag key or flag) and [`alternatives`] (by shape)
//!
//! Grammars hold no mutable state and are `Send + Sync`.

mod doc;
mod error;
mod grammar;
mod object;
mod union;

pub use doc::{Doc, PropertyDoc};
pub use error::{DecodeError, DecodeReason, EncodeError, JsonKind, Segment};
pub use grammar::{Grammar, array, enumeration, integer, pair, reference, string};
pub use object::{Field, Fields, ObjectGrammar, OptionalField, object};
pub use union::{Alternatives, TaggedUnion, alternatives, tagged};
