//! The generated API reference.

use idewire_protocol::types::PROTOCOL_VERSION;
use idewire_protocol::{Doc, api_docs};

#[test]
fn messages_come_first_then_value_types() {
    let docs = api_docs();
    let names: Vec<&str> = docs.entries.iter().map(|entry| entry.name).collect();
    assert_eq!(
        names,
        [
            "Request",
            "SessionUpdate",
            "Response",
            "Progress",
            "SourceError",
            "SourceErrorKind",
            "EitherSpan",
            "ProperSpan",
            "SpanInfo",
            "IdInfo",
            "IdProp",
            "IdNameSpace",
            "IdScope",
            "ModuleId",
            "ModuleName",
            "PackageId",
            "VersionInfo",
        ]
    );
}

#[test]
fn every_referenced_type_has_an_entry() {
    fn refs<'a>(doc: &'a Doc, out: &mut Vec<&'a str>) {
        match doc {
            Doc::Ref { name } => out.push(*name),
            Doc::Array { items } => refs(items, out),
            Doc::Pair { first, second } => {
                refs(first, out);
                refs(second, out);
            }
            Doc::Object { properties } => {
                for property in properties {
                    refs(&property.shape, out);
                }
            }
            Doc::OneOf { alternatives, .. } => {
                for alternative in alternatives {
                    refs(alternative, out);
                }
            }
            Doc::String | Doc::Integer | Doc::Literal { .. } | Doc::Enumeration { .. } => {}
        }
    }

    let docs = api_docs();
    let mut names = Vec::new();
    for entry in &docs.entries {
        refs(&entry.shape, &mut names);
    }
    for name in names {
        assert!(docs.entry(name).is_some(), "{name} is referenced but not documented");
    }
}

#[test]
fn markdown_lists_each_variant() {
    let markdown = api_docs().to_string();
    assert!(markdown.starts_with("# idewire protocol\n\nProtocol version 0.1.0.\n"));
    assert!(markdown.contains("## Response\n"));
    assert!(markdown.contains("- `{\"response\": \"sessionUpdate\", \"progress\"?: Progress}`"));
    assert!(markdown.contains(
        "- `{\"isQuasiQuote\": true, \"idInfo\": IdInfo}`"
    ));
    assert!(markdown.contains("`\"varName\" | \"dataName\" | \"tvName\" | \"tcClsName\"`"));
}

#[test]
fn json_form_carries_version_and_shapes() {
    let json = serde_json::to_value(api_docs()).unwrap();
    assert_eq!(json["version"], PROTOCOL_VERSION.to_string());
    assert_eq!(json["entries"][0]["name"], "Request");
    assert_eq!(json["entries"][0]["shape"]["kind"], "oneOf");
    assert_eq!(json["entries"][0]["shape"]["discriminator"], "request");
    let first = &json["entries"][0]["shape"]["alternatives"][0]["properties"][0];
    assert_eq!(first["name"], "request");
    assert_eq!(first["shape"]["kind"], "literal");
    assert_eq!(first["shape"]["value"], "updateSession");
}
