//! Object grammars built from an ordered list of named properties.
//!
//! Each [`ObjectGrammar::prop`] call registers the property for encoding and
//! documentation and hands back a typed [`Field`] handle; the constructor
//! passed to [`ObjectGrammar::build`] reads properties only through those
//! handles, so decoding looks up exactly the keys encoding writes.

use serde_json::{Map, Value};
use tracing::Level;

use crate::doc::{Doc, PropertyDoc};
use crate::error::{DecodeError, DecodeReason, EncodeError, Segment};
use crate::grammar::Grammar;

type Writer<T> =
    Box<dyn Fn(&T, &mut Map<String, Value>) -> Result<(), EncodeError> + Send + Sync>;

pub struct ObjectGrammar<T> {
    properties: Vec<PropertyDoc>,
    literals: Vec<(&'static str, Value)>,
    writers: Vec<Writer<T>>,
}

/// Handle to a required property.
pub struct Field<F> {
    key: &'static str,
    grammar: Grammar<F>,
}

/// Handle to an optional property.
pub struct OptionalField<F> {
    key: &'static str,
    grammar: Grammar<F>,
}

/// Properties of the JSON object being decoded.
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
}

#[must_use]
pub fn object<T: 'static>() -> ObjectGrammar<T> {
    ObjectGrammar {
        properties: Vec::new(),
        literals: Vec::new(),
        writers: Vec::new(),
    }
}

impl<T: 'static> ObjectGrammar<T> {
    /// Property whose value is always `value`, such as a variant tag.
    pub fn literal(&mut self, key: &'static str, value: impl Into<Value>) {
        let value = value.into();
        self.properties.push(PropertyDoc {
            name: key,
            required: true,
            shape: Doc::Literal {
                value: value.clone(),
            },
        });
        self.literals.push((key, value.clone()));
        self.writers.push(Box::new(move |_, map| {
            map.insert(key.to_string(), value.clone());
            Ok(())
        }));
    }

    pub fn prop<F: 'static>(
        &mut self,
        key: &'static str,
        grammar: Grammar<F>,
        get: impl Fn(&T) -> &F + Send + Sync + 'static,
    ) -> Field<F> {
        self.push_property(key, true, &grammar);
        let encoder = grammar.clone();
        self.writers.push(Box::new(move |value, map| {
            let encoded = encoder
                .encode(get(value))
                .map_err(|err| err.within(Segment::Property(key)))?;
            map.insert(key.to_string(), encoded);
            Ok(())
        }));
        Field { key, grammar }
    }

    /// Property written only when `get` returns `Some`; the key is omitted
    /// otherwise.
    pub fn optional<F: 'static>(
        &mut self,
        key: &'static str,
        grammar: Grammar<F>,
        get: impl Fn(&T) -> Option<&F> + Send + Sync + 'static,
    ) -> OptionalField<F> {
        self.push_property(key, false, &grammar);
        let encoder = grammar.clone();
        self.writers.push(Box::new(move |value, map| {
            if let Some(present) = get(value) {
                let encoded = encoder
                    .encode(present)
                    .map_err(|err| err.within(Segment::Property(key)))?;
                map.insert(key.to_string(), encoded);
            }
            Ok(())
        }));
        OptionalField { key, grammar }
    }

    fn push_property<F: 'static>(
        &mut self,
        key: &'static str,
        required: bool,
        grammar: &Grammar<F>,
    ) {
        debug_assert!(
            self.properties.iter().all(|property| property.name != key),
            "property '{key}' declared twice"
        );
        self.properties.push(PropertyDoc {
            name: key,
            required,
            shape: grammar.doc().clone(),
        });
    }

    /// Finish the object. `construct` assembles `T` from decoded fields.
    ///
    /// Undeclared keys in the input are ignored.
    #[must_use]
    pub fn build(
        self,
        construct: impl Fn(&Fields<'_>) -> Result<T, DecodeError> + Send + Sync + 'static,
    ) -> Grammar<T> {
        let Self {
            properties,
            literals,
            writers,
        } = self;
        let declared: Vec<&'static str> = properties.iter().map(|property| property.name).collect();
        Grammar::new(
            Doc::Object { properties },
            move |value| {
                let mut map = Map::new();
                for write in &writers {
                    write(value, &mut map)?;
                }
                Ok(Value::Object(map))
            },
            move |json| {
                let Value::Object(map) = json else {
                    return Err(DecodeError::unexpected("object", json));
                };
                for &(key, ref expected) in &literals {
                    match map.get(key) {
                        None => return Err(DecodeError::new(DecodeReason::MissingProperty(key))),
                        Some(found) if found != expected => {
                            return Err(DecodeError::new(DecodeReason::LiteralMismatch {
                                expected: expected.clone(),
                                found: found.clone(),
                            })
                            .within(Segment::Property(key)));
                        }
                        Some(_) => {}
                    }
                }
                if tracing::enabled!(Level::TRACE) {
                    let undeclared = map
                        .keys()
                        .filter(|key| !declared.contains(&key.as_str()));
                    for key in undeclared {
                        tracing::trace!(key = %key, "ignoring undeclared property");
                    }
                }
                construct(&Fields { object: map })
            },
        )
    }
}

impl Fields<'_> {
    pub fn get<F: 'static>(&self, field: &Field<F>) -> Result<F, DecodeError> {
        let value = self
            .object
            .get(field.key)
            .ok_or_else(|| DecodeError::new(DecodeReason::MissingProperty(field.key)))?;
        field
            .grammar
            .decode(value)
            .map_err(|err| err.within(Segment::Property(field.key)))
    }

    /// A missing key and an explicit `null` both read as absent.
    pub fn get_optional<F: 'static>(
        &self,
        field: &OptionalField<F>,
    ) -> Result<Option<F>, DecodeError> {
        match self.object.get(field.key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => field
                .grammar
                .decode(value)
                .map(Some)
                .map_err(|err| err.within(Segment::Property(field.key))),
        }
    }
}
