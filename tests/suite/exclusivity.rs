//! No JSON value is accepted by two variants of one sum type.

use std::fmt::Debug;

use idewire_protocol::types::{EitherSpan, IdScope, Request, Response, SessionUpdate, SpanInfo};
use idewire_protocol::{DecodeReason, Schema, decode, encode};
use serde_json::{Value, json};

use crate::common;

/// Re-tagging an encoded variant with any other tag of the same union must
/// either fail or decode to that other variant, never back to the original.
fn assert_tags_exclusive<S>(values: &[S], key: &str)
where
    S: Schema + Debug + PartialEq,
{
    let encoded: Vec<Value> = values.iter().map(encode).collect();
    let tags: Vec<Value> = encoded.iter().map(|json| json[key].clone()).collect();
    for (value, json) in values.iter().zip(&encoded) {
        for tag in tags.iter().filter(|tag| **tag != json[key]) {
            let mut retagged = json.clone();
            retagged[key] = tag.clone();
            if let Ok(decoded) = decode::<S>(&retagged) {
                assert_ne!(&decoded, value, "{retagged} decoded under two tags");
            }
        }
    }
}

#[test]
fn request_tags_are_exclusive() {
    assert_tags_exclusive(&common::requests(), "request");
}

#[test]
fn session_update_tags_are_exclusive() {
    assert_tags_exclusive(&common::session_updates(), "update");
}

#[test]
fn retagged_file_update_reads_as_the_new_variant() {
    let retagged = json!({"update": "updateSourceFileFromFile", "filePath": "A.hs", "contents": "x"});
    assert_eq!(
        decode::<SessionUpdate>(&retagged),
        Ok(SessionUpdate::UpdateSourceFileFromFile("A.hs".to_string()))
    );
}

#[test]
fn response_tags_are_exclusive() {
    assert_tags_exclusive(&common::responses(), "response");
}

#[test]
fn scope_tags_are_exclusive() {
    let scopes = [
        IdScope::Binder,
        IdScope::Local,
        common::imported_scope(),
        IdScope::WiredIn,
    ];
    assert_tags_exclusive(&scopes, "scope");
}

#[test]
fn quasi_quote_flag_selects_exactly_one_variant() {
    let info = common::id_info(IdScope::Binder);
    let plain = encode(&SpanInfo::SpanId(info.clone()));
    let mut flipped = plain.clone();
    flipped["isQuasiQuote"] = json!(true);
    assert_eq!(decode::<SpanInfo>(&plain), Ok(SpanInfo::SpanId(info.clone())));
    assert_eq!(decode::<SpanInfo>(&flipped), Ok(SpanInfo::SpanQQ(info)));
}

#[test]
fn span_shapes_do_not_overlap() {
    let text = encode(&EitherSpan::text("A.hs:1:1"));
    let proper = encode(&EitherSpan::from(common::proper_span()));
    assert!(text.is_string());
    assert!(proper.is_object());
    assert!(matches!(
        decode::<EitherSpan>(&text),
        Ok(EitherSpan::TextSpan(_))
    ));
    assert!(matches!(
        decode::<EitherSpan>(&proper),
        Ok(EitherSpan::ProperSpan(_))
    ));
    for other in [json!(null), json!(true), json!(3), json!(["A.hs"])] {
        let err = decode::<EitherSpan>(&other).unwrap_err();
        assert!(matches!(err.reason(), DecodeReason::NoAlternative { .. }));
    }
}

#[test]
fn unknown_literals_name_their_type() {
    let err = decode::<Response>(&json!({
        "response": "getSourceErrors",
        "errors": [{"kind": "info", "span": "x", "msg": "m"}]
    }))
    .unwrap_err();
    assert_eq!(
        err.reason(),
        &DecodeReason::UnknownLiteral {
            label: "SourceErrorKind",
            found: "info".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Response / getSourceErrors / errors / [0] / kind: \"info\" is not a SourceErrorKind literal"
    );

    let err = decode::<Request>(&json!({"request": "getSpanInfo "})).unwrap_err();
    assert!(matches!(err.reason(), DecodeReason::UnknownTag { key: "request", .. }));
}
