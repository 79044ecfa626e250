//! Decoding an encoded value reproduces it.

use std::fmt::Debug;

use idewire_protocol::types::{
    EitherSpan, IdNameSpace, IdScope, ModuleId, PackageId, Request, Response, SourceErrorKind,
    SpanInfo,
};
use idewire_protocol::{Schema, decode, encode, from_str, to_string};

use crate::common;

fn assert_round_trip<S: Schema + Debug + PartialEq>(value: &S) {
    let json = encode(value);
    assert_eq!(decode::<S>(&json).as_ref(), Ok(value), "via {json}");
    assert_eq!(from_str::<S>(&to_string(value)).ok().as_ref(), Some(value));
}

#[test]
fn requests_round_trip() {
    for request in common::requests() {
        assert_round_trip(&request);
    }
}

#[test]
fn responses_round_trip() {
    for response in common::responses() {
        assert_round_trip(&response);
    }
}

#[test]
fn nested_types_round_trip() {
    assert_round_trip(&common::prelude());
    assert_round_trip(&common::local_module());
    assert_round_trip(&common::base_package());
    assert_round_trip(&common::imported_scope());
    assert_round_trip(&SpanInfo::SpanQQ(common::id_info(IdScope::Local)));
    assert_round_trip(&EitherSpan::from(common::proper_span()));
    assert_round_trip(&EitherSpan::text(""));
    assert_round_trip(&SourceErrorKind::Warning);
    assert_round_trip(&IdNameSpace::DataName);
}

#[test]
fn optional_fields_are_omitted_or_present() {
    let with = common::base_package();
    let without = PackageId {
        version: None,
        ..with.clone()
    };
    let present = encode(&with);
    let absent = encode(&without);
    assert_eq!(present["version"], "4.18.0.0");
    assert!(absent.as_object().is_some_and(|map| !map.contains_key("version")));
    assert_eq!(decode::<PackageId>(&absent), Ok(without));

    let module = ModuleId {
        package: PackageId {
            version: None,
            ..common::base_package()
        },
        ..common::prelude()
    };
    assert_round_trip(&module);
}

#[test]
fn key_order_is_irrelevant_when_decoding() {
    let text = r#"{"span":"whole-file","module":"Foo.Bar","request":"getSpanInfo"}"#;
    assert_eq!(
        from_str::<Request>(text).map(|request| request.name()).ok(),
        Some("getSpanInfo")
    );
}

#[test]
fn undeclared_keys_are_ignored() {
    let response = from_str::<Response>(
        r#"{"response":"shutdownSession","requestId":7,"progress":{"step":1,"numSteps":1}}"#,
    );
    assert_eq!(response.ok(), Some(Response::ShutdownSession));
}
