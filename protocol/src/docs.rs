//! API reference generated from the schemas.
//!
//! The reference is rebuilt from the same grammars that encode and decode
//! messages, so it cannot drift from the wire format. It renders as Markdown
//! through `Display` and serializes to JSON for tooling.

use std::fmt;

use idewire_grammar::Doc;
use idewire_types::{
    EitherSpan, IdInfo, IdNameSpace, IdProp, IdScope, ModuleId, ModuleName, PROTOCOL_VERSION,
    PackageId, Progress, ProperSpan, Request, Response, SessionUpdate, SourceError,
    SourceErrorKind, SpanInfo, VersionInfo,
};
use serde::Serialize;

use crate::schema::Schema;

const TITLE: &str = "idewire protocol";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDocs {
    pub title: &'static str,
    pub version: String,
    pub entries: Vec<DocEntry>,
}

/// Documentation of one schema type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub shape: Doc,
}

impl DocEntry {
    fn of<S: Schema>() -> Self {
        Self {
            name: S::LABEL,
            summary: S::SUMMARY,
            shape: S::grammar().doc().clone(),
        }
    }
}

impl ApiDocs {
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&DocEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    fn register<S: Schema>(&mut self) -> &mut Self {
        self.entries.push(DocEntry::of::<S>());
        self
    }
}

/// Reference for every registered schema: the two message types first, then
/// the value types they contain.
#[must_use]
pub fn api_docs() -> ApiDocs {
    let mut docs = ApiDocs {
        title: TITLE,
        version: PROTOCOL_VERSION.to_string(),
        entries: Vec::new(),
    };
    docs.register::<Request>()
        .register::<SessionUpdate>()
        .register::<Response>()
        .register::<Progress>()
        .register::<SourceError>()
        .register::<SourceErrorKind>()
        .register::<EitherSpan>()
        .register::<ProperSpan>()
        .register::<SpanInfo>()
        .register::<IdInfo>()
        .register::<IdProp>()
        .register::<IdNameSpace>()
        .register::<IdScope>()
        .register::<ModuleId>()
        .register::<ModuleName>()
        .register::<PackageId>()
        .register::<VersionInfo>();
    docs
}

impl fmt::Display for ApiDocs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "Protocol version {}.", self.version)?;
        for entry in &self.entries {
            writeln!(f)?;
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        match &self.shape {
            Doc::OneOf {
                discriminator,
                alternatives,
            } => {
                match discriminator {
                    Some(key) => writeln!(f, "Tagged by `{key}`.")?,
                    None => writeln!(f, "Told apart by shape.")?,
                }
                writeln!(f)?;
                for alternative in alternatives {
                    writeln!(f, "- `{alternative}`")?;
                }
            }
            shape => writeln!(f, "`{shape}`")?,
        }
        Ok(())
    }
}
