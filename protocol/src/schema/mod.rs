//! Wire schema of every protocol type.
//!
//! Each [`Schema`] impl is the single definition of how its type is written,
//! read and documented. Nested types are referenced through [`schema`] so
//! their documentation appears once, under their own label.

mod ident;
mod module;
mod request;
mod response;
mod span;

use idewire_grammar::{Grammar, reference};

pub trait Schema: Sized + 'static {
    /// Name used in documentation and at the head of decode error trails.
    const LABEL: &'static str;
    /// One-line description for the API reference.
    const SUMMARY: &'static str;

    fn grammar() -> Grammar<Self>;
}

/// Grammar for a nested schema type, documented by name.
#[must_use]
pub fn schema<S: Schema>() -> Grammar<S> {
    reference(S::LABEL, S::grammar)
}
