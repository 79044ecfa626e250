//! Domain model of the editor <-> analysis backend protocol.
//!
//! Pure data: no IO, no serialization. The wire mapping for every type lives in
//! `idewire-protocol`; the analysis engine builds and consumes these values
//! directly.

mod ident;
mod module;
mod request;
mod response;
mod span;

pub use ident::{IdInfo, IdNameSpace, IdProp, IdScope, ImportInfo, SpanInfo};
pub use module::{ModuleId, ModuleName, PackageId};
pub use request::{
    FileContents, InvalidUtf8Error, Request, SessionUpdate, SourceFileUpdate, SpanQuery,
};
pub use response::{
    PROTOCOL_VERSION, Progress, Response, SourceError, SourceErrorKind, VersionInfo,
};
pub use span::{EitherSpan, ProperSpan, SourceSpan};
