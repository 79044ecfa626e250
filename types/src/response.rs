//! Messages sent by the backend.

use std::fmt;

use crate::ident::SpanInfo;
use crate::module::ModuleName;
use crate::span::SourceSpan;

/// Version of the wire protocol described by this crate.
pub const PROTOCOL_VERSION: VersionInfo = VersionInfo {
    major: 0,
    minor: 1,
    patch: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionInfo {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl VersionInfo {
    /// Same major version: messages from `other` decode with this schema.
    #[must_use]
    pub fn is_compatible_with(&self, other: &VersionInfo) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compilation progress reported while a session update runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub step: i64,
    pub num_steps: i64,
    /// Compiler message, parsed into a short description.
    pub parsed_msg: Option<String>,
    /// Compiler message as emitted.
    pub orig_msg: Option<String>,
}

impl Progress {
    #[must_use]
    pub fn new(step: i64, num_steps: i64) -> Self {
        Self {
            step,
            num_steps,
            parsed_msg: None,
            orig_msg: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceErrorKind {
    Error,
    Warning,
    /// The compilation server crashed; the span is not meaningful.
    ServerDied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub span: SourceSpan,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Intermediate progress while `progress` is present; completion when absent.
    SessionUpdate(Option<Progress>),
    GetSourceErrors(Vec<SourceError>),
    GetSpanInfo(Vec<(SourceSpan, SpanInfo)>),
    GetExpTypes(Vec<(SourceSpan, String)>),
    GetLoadedModules(Vec<ModuleName>),
    ShutdownSession,
    InvalidRequest(String),
    /// First message of every session.
    Welcome(VersionInfo),
}

impl Response {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionUpdate(_) => "sessionUpdate",
            Self::GetSourceErrors(_) => "getSourceErrors",
            Self::GetSpanInfo(_) => "getSpanInfo",
            Self::GetExpTypes(_) => "getExpTypes",
            Self::GetLoadedModules(_) => "getLoadedModules",
            Self::ShutdownSession => "shutdownSession",
            Self::InvalidRequest(_) => "invalidRequest",
            Self::Welcome(_) => "welcome",
        }
    }

    /// `true` for the final message of a session update.
    #[must_use]
    pub fn is_update_done(&self) -> bool {
        matches!(self, Self::SessionUpdate(None))
    }
}
