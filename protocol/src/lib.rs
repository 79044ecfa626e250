//! Wire protocol between an editor and an IDE backend.
//!
//! Every message is one JSON object. [`encode`] and [`decode`] map between
//! the domain types in [`types`] and that JSON; [`api_docs`] describes the
//! same mapping for humans and tools. All three read from one [`Schema`]
//! per type, so the three views cannot disagree.
//!
//! ```
//! use idewire_protocol::types::Request;
//! use serde_json::json;
//!
//! let json = idewire_protocol::encode(&Request::GetSourceErrors);
//! assert_eq!(json, json!({"request": "getSourceErrors"}));
//! assert_eq!(idewire_protocol::decode::<Request>(&json), Ok(Request::GetSourceErrors));
//! ```

mod api;
mod docs;
mod schema;

pub use idewire_grammar::{DecodeError, DecodeReason, Doc, EncodeError, Segment};
pub use idewire_types as types;

pub use api::{ProtocolError, decode, encode, from_str, invalid_request, to_string, try_encode};
pub use docs::{ApiDocs, DocEntry, api_docs};
pub use schema::{Schema, schema};
