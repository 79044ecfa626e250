//! Encoding and decoding of whole messages.
//!
//! Grammars are built per call; nested schemas inside one call are built at
//! most once.

use idewire_grammar::{DecodeError, EncodeError};
use idewire_types::Response;
use serde_json::Value;
use thiserror::Error;

use crate::schema::Schema;

/// Failure to read a message from JSON text.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Encode `value`, returning a schema that does not cover it as an error.
pub fn try_encode<S: Schema>(value: &S) -> Result<Value, EncodeError> {
    S::grammar().encode(value)
}

/// Encode `value` as a JSON message.
///
/// # Panics
///
/// Panics if the schema for `S` does not cover `value`. Every schema in this
/// crate covers every value of its type, so this only fires on a broken
/// schema definition.
#[must_use]
pub fn encode<S: Schema>(value: &S) -> Value {
    match try_encode(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(schema = S::LABEL, error = %err, "schema does not cover value");
            panic!("{}: {err}", S::LABEL);
        }
    }
}

/// Decode a JSON message. The error names `S` and the trail to the first
/// mismatch.
pub fn decode<S: Schema>(json: &Value) -> Result<S, DecodeError> {
    S::grammar().decode(json).map_err(|err| {
        let err = err.labelled(S::LABEL);
        tracing::debug!(error = %err, "decode failed");
        err
    })
}

/// [`encode`] followed by JSON serialisation.
///
/// # Panics
///
/// Same conditions as [`encode`].
#[must_use]
pub fn to_string<S: Schema>(value: &S) -> String {
    encode(value).to_string()
}

/// JSON parsing followed by [`decode`].
pub fn from_str<S: Schema>(text: &str) -> Result<S, ProtocolError> {
    let json: Value = serde_json::from_str(text)?;
    Ok(decode(&json)?)
}

/// The reply a backend sends for a request it could not decode.
#[must_use]
pub fn invalid_request(err: &DecodeError) -> Response {
    Response::InvalidRequest(err.to_string())
}
