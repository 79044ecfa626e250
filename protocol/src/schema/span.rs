use idewire_grammar::{Grammar, alternatives, integer, object, string};
use idewire_types::{EitherSpan, ProperSpan};

use super::{Schema, schema};

impl Schema for ProperSpan {
    const LABEL: &'static str = "ProperSpan";
    const SUMMARY: &'static str = "A region of a source file. Lines and columns are 1-based.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let file_path = object.prop("filePath", string(), |span| &span.file_path);
        let from_line = object.prop("fromLine", integer(), |span| &span.from_line);
        let from_column = object.prop("fromColumn", integer(), |span| &span.from_column);
        let to_line = object.prop("toLine", integer(), |span| &span.to_line);
        let to_column = object.prop("toColumn", integer(), |span| &span.to_column);
        object.build(move |fields| {
            Ok(Self {
                file_path: fields.get(&file_path)?,
                from_line: fields.get(&from_line)?,
                from_column: fields.get(&from_column)?,
                to_line: fields.get(&to_line)?,
                to_column: fields.get(&to_column)?,
            })
        })
    }
}

// The only untagged union in the protocol: a JSON string is a text span, an
// object is a proper span. Any new alternative must not accept either shape.
impl Schema for EitherSpan {
    const LABEL: &'static str = "EitherSpan";
    const SUMMARY: &'static str = "A source span: free-form text (JSON string) or a ProperSpan (JSON object). \
         There is no tag; the JSON kind selects the alternative.";

    fn grammar() -> Grammar<Self> {
        alternatives::<Self>(Self::LABEL)
            .case(string(), EitherSpan::TextSpan, |span| match span {
                EitherSpan::TextSpan(text) => Some(text),
                EitherSpan::ProperSpan(_) => None,
            })
            .case(
                schema::<ProperSpan>(),
                EitherSpan::ProperSpan,
                |span| match span {
                    EitherSpan::ProperSpan(proper) => Some(proper),
                    EitherSpan::TextSpan(_) => None,
                },
            )
            .build()
    }
}
