//! Concrete messages as they appear on the wire.

use idewire_protocol::types::{
    EitherSpan, IdScope, ModuleName, Progress, Request, Response, SpanInfo, SpanQuery,
};
use idewire_protocol::{DecodeReason, Segment, decode, encode, invalid_request};
use serde_json::json;

use crate::common;

#[test]
fn get_source_errors_is_only_a_tag() {
    assert_eq!(
        encode(&Request::GetSourceErrors),
        json!({"request": "getSourceErrors"})
    );
}

#[test]
fn get_span_info_with_text_span() {
    let request = decode::<Request>(&json!({
        "request": "getSpanInfo",
        "module": "Foo.Bar",
        "span": "whole-file"
    }));
    assert_eq!(
        request,
        Ok(Request::GetSpanInfo(SpanQuery {
            module: ModuleName::new("Foo.Bar"),
            span: EitherSpan::text("whole-file"),
        }))
    );
}

#[test]
fn finished_session_update_has_no_progress() {
    assert_eq!(
        encode(&Response::SessionUpdate(None)),
        json!({"response": "sessionUpdate"})
    );
}

#[test]
fn session_update_with_progress() {
    let response = decode::<Response>(&json!({
        "response": "sessionUpdate",
        "progress": {"step": 1, "numSteps": 3}
    }));
    assert_eq!(response, Ok(Response::SessionUpdate(Some(Progress::new(1, 3)))));
}

#[test]
fn unknown_request_tag_is_labelled() {
    let err = decode::<Request>(&json!({"request": "bogus"})).unwrap_err();
    assert_eq!(err.label(), Some("Request"));
    assert_eq!(
        err.reason(),
        &DecodeReason::UnknownTag {
            label: "Request",
            key: "request",
            found: json!("bogus")
        }
    );
    assert_eq!(
        invalid_request(&err),
        Response::InvalidRequest("Request: unmatched tag \"bogus\" for 'request' of Request".to_string())
    );
}

#[test]
fn quasi_quote_span_info_sets_the_flag() {
    let info = common::id_info(IdScope::WiredIn);
    let json = encode(&SpanInfo::SpanQQ(info.clone()));
    assert_eq!(json, json!({"isQuasiQuote": true, "idInfo": encode(&info)}));
}

#[test]
fn missing_span_field_reports_full_trail() {
    let err = decode::<Request>(&json!({
        "request": "getSpanInfo",
        "module": "Foo.Bar",
        "span": {"filePath": "Foo/Bar.hs", "fromColumn": 1, "toLine": 2, "toColumn": 1}
    }))
    .unwrap_err();
    assert_eq!(
        err.path(),
        &[
            Segment::Variant("getSpanInfo".to_string()),
            Segment::Property("span"),
        ]
    );
    assert_eq!(
        err.to_string(),
        "Request / getSpanInfo / span: missing property 'fromLine'"
    );
}

#[test]
fn unknown_nested_tag_names_its_union() {
    let mut json = encode(&Response::GetSpanInfo(vec![(
        EitherSpan::text("A.hs:1:1"),
        SpanInfo::SpanId(common::id_info(IdScope::Local)),
    )]));
    json["info"][0][1]["idInfo"]["scope"]["scope"] = json!("global");
    let err = decode::<Response>(&json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Response / getSpanInfo / info / [0] / [1] / isQuasiQuote=false / idInfo / scope: \
         unmatched tag \"global\" for 'scope' of IdScope"
    );
}

#[test]
fn wrong_kind_inside_span_info_pairs() {
    let err = decode::<Response>(&json!({
        "response": "getSpanInfo",
        "info": [["A.hs", {"isQuasiQuote": 0, "idInfo": {}}]]
    }))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Response / getSpanInfo / info / [0] / [1]: unmatched tag 0 for 'isQuasiQuote' of SpanInfo"
    );
}
