//! Sum-type grammars.
//!
//! [`tagged`] selects a variant by the literal stored under one key: a
//! variant name (`{"request": "getSourceErrors"}`) or a flag
//! (`{"isQuasiQuote": true, ...}`). [`alternatives`] has no tag at all and
//! accepts the first case whose shape matches; it is the only place in the
//! engine where overlapping shapes could make decoding ambiguous.

use std::sync::Arc;

use serde_json::Value;

use crate::doc::Doc;
use crate::error::{DecodeError, DecodeReason, EncodeError, JsonKind, Segment};
use crate::grammar::Grammar;
use crate::object::{ObjectGrammar, object};

type Project<T> = Box<dyn Fn(&T) -> Option<Result<Value, EncodeError>> + Send + Sync>;
type Inject<T> = Box<dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync>;

/// One alternative of a sum type, with its payload type erased.
struct Case<T> {
    doc: Doc,
    encode: Project<T>,
    decode: Inject<T>,
}

impl<T: 'static> Case<T> {
    fn new<P: 'static>(
        grammar: Grammar<P>,
        inject: impl Fn(P) -> T + Send + Sync + 'static,
        project: impl Fn(&T) -> Option<&P> + Send + Sync + 'static,
    ) -> Self {
        let encoder = grammar.clone();
        Self {
            doc: grammar.doc().clone(),
            encode: Box::new(move |value| project(value).map(|payload| encoder.encode(payload))),
            decode: Box::new(move |json| grammar.decode(json).map(&inject)),
        }
    }
}

struct Variant<T> {
    tag: Value,
    segment: String,
    case: Case<T>,
}

pub struct TaggedUnion<T> {
    label: &'static str,
    key: &'static str,
    variants: Vec<Variant<T>>,
}

/// Sum type whose variant is named by the literal under `key`.
#[must_use]
pub fn tagged<T: 'static>(label: &'static str, key: &'static str) -> TaggedUnion<T> {
    TaggedUnion {
        label,
        key,
        variants: Vec::new(),
    }
}

impl<T: 'static> TaggedUnion<T> {
    /// Add a variant carrying payload `P`.
    ///
    /// `body` receives an object grammar that already holds the tag property
    /// and declares the payload's sibling properties. `project` returns the
    /// payload when a value is this variant; `inject` rebuilds the value.
    #[must_use]
    pub fn variant<P: 'static>(
        mut self,
        tag: impl Into<Value>,
        inject: impl Fn(P) -> T + Send + Sync + 'static,
        project: impl Fn(&T) -> Option<&P> + Send + Sync + 'static,
        body: impl FnOnce(ObjectGrammar<P>) -> Grammar<P>,
    ) -> Self {
        let tag = tag.into();
        debug_assert!(
            self.variants.iter().all(|variant| variant.tag != tag),
            "duplicate tag {tag} in {}",
            self.label
        );
        let mut payload = object::<P>();
        payload.literal(self.key, tag.clone());
        let segment = match &tag {
            Value::String(name) => name.clone(),
            other => format!("{}={other}", self.key),
        };
        self.variants.push(Variant {
            tag,
            segment,
            case: Case::new(body(payload), inject, project),
        });
        self
    }

    /// Add a variant without payload.
    #[must_use]
    pub fn unit(self, tag: impl Into<Value>, value: T) -> Self
    where
        T: Clone + PartialEq + Send + Sync,
    {
        let matches = value.clone();
        self.variant::<()>(
            tag,
            move |()| value.clone(),
            move |candidate| (*candidate == matches).then_some(&()),
            |payload| payload.build(|_| Ok(())),
        )
    }

    #[must_use]
    pub fn build(self) -> Grammar<T> {
        let Self {
            label,
            key,
            variants,
        } = self;
        let doc = Doc::OneOf {
            discriminator: Some(key),
            alternatives: variants
                .iter()
                .map(|variant| variant.case.doc.clone())
                .collect(),
        };
        let variants = Arc::new(variants);
        let encoders = Arc::clone(&variants);
        Grammar::new(
            doc,
            move |value| {
                encoders
                    .iter()
                    .find_map(|variant| {
                        (variant.case.encode)(value).map(|encoded| {
                            encoded
                                .map_err(|err| err.within(Segment::Variant(variant.segment.clone())))
                        })
                    })
                    .unwrap_or_else(|| Err(EncodeError::uncovered(label)))
            },
            move |json| {
                let Value::Object(map) = json else {
                    return Err(DecodeError::unexpected("object", json));
                };
                let found = map
                    .get(key)
                    .ok_or_else(|| DecodeError::new(DecodeReason::MissingProperty(key)))?;
                let variant = variants
                    .iter()
                    .find(|variant| variant.tag == *found)
                    .ok_or_else(|| {
                        DecodeError::new(DecodeReason::UnknownTag {
                            label,
                            key,
                            found: found.clone(),
                        })
                    })?;
                (variant.case.decode)(json)
                    .map_err(|err| err.within(Segment::Variant(variant.segment.clone())))
            },
        )
    }
}

pub struct Alternatives<T> {
    label: &'static str,
    cases: Vec<Case<T>>,
}

/// Untagged sum type: cases are tried in order and the first structural
/// match wins.
#[must_use]
pub fn alternatives<T: 'static>(label: &'static str) -> Alternatives<T> {
    Alternatives {
        label,
        cases: Vec::new(),
    }
}

impl<T: 'static> Alternatives<T> {
    #[must_use]
    pub fn case<P: 'static>(
        mut self,
        grammar: Grammar<P>,
        inject: impl Fn(P) -> T + Send + Sync + 'static,
        project: impl Fn(&T) -> Option<&P> + Send + Sync + 'static,
    ) -> Self {
        self.cases.push(Case::new(grammar, inject, project));
        self
    }

    /// When every case fails, the reported error is the first one from a case
    /// whose outer shape matched; if none matched, `NoAlternative`.
    #[must_use]
    pub fn build(self) -> Grammar<T> {
        let Self { label, cases } = self;
        let doc = Doc::OneOf {
            discriminator: None,
            alternatives: cases.iter().map(|case| case.doc.clone()).collect(),
        };
        let cases = Arc::new(cases);
        let encoders = Arc::clone(&cases);
        Grammar::new(
            doc,
            move |value| {
                encoders
                    .iter()
                    .find_map(|case| (case.encode)(value))
                    .unwrap_or_else(|| Err(EncodeError::uncovered(label)))
            },
            move |json| {
                let mut closest: Option<DecodeError> = None;
                for case in cases.iter() {
                    match (case.decode)(json) {
                        Ok(value) => return Ok(value),
                        Err(err) if err.is_shape_mismatch() => {}
                        Err(err) => {
                            closest.get_or_insert(err);
                        }
                    }
                }
                Err(closest.unwrap_or_else(|| {
                    DecodeError::new(DecodeReason::NoAlternative {
                        label,
                        found: JsonKind::of(json),
                    })
                }))
            },
        )
    }
}
