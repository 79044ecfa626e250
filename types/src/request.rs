//! Messages sent by the editor.

use thiserror::Error;

use crate::module::ModuleName;
use crate::span::SourceSpan;

/// Source text shipped inside a session update.
///
/// The wire carries contents as a JSON string, so only UTF-8 byte sequences
/// are representable. Conversion from raw bytes happens here, at the domain
/// boundary, which keeps encoding total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FileContents(String);

#[derive(Debug, Error)]
#[error("file contents are not valid UTF-8 (invalid byte at offset {offset})")]
pub struct InvalidUtf8Error {
    offset: usize,
    bytes: Vec<u8>,
}

impl InvalidUtf8Error {
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the rejected bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl FileContents {
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, InvalidUtf8Error> {
        String::from_utf8(bytes).map(Self).map_err(|err| InvalidUtf8Error {
            offset: err.utf8_error().valid_up_to(),
            bytes: err.into_bytes(),
        })
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for FileContents {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for FileContents {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl TryFrom<Vec<u8>> for FileContents {
    type Error = InvalidUtf8Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_utf8(bytes)
    }
}

/// New in-memory contents for a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileUpdate {
    pub file_path: String,
    pub contents: FileContents,
}

/// One change applied to the session by an `UpdateSession` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    UpdateSourceFile(SourceFileUpdate),
    /// Re-read the file from disk; carries the file path.
    UpdateSourceFileFromFile(String),
    /// Replace the compiler options.
    UpdateGhcOpts(Vec<String>),
}

/// Location query shared by span-info and expression-type requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanQuery {
    pub module: ModuleName,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Apply updates in order, then recompile.
    UpdateSession(Vec<SessionUpdate>),
    GetSourceErrors,
    GetSpanInfo(SpanQuery),
    GetExpTypes(SpanQuery),
    GetLoadedModules,
    ShutdownSession,
}

impl Request {
    /// Wire tag of this request, useful for log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateSession(_) => "updateSession",
            Self::GetSourceErrors => "getSourceErrors",
            Self::GetSpanInfo(_) => "getSpanInfo",
            Self::GetExpTypes(_) => "getExpTypes",
            Self::GetLoadedModules => "getLoadedModules",
            Self::ShutdownSession => "shutdownSession",
        }
    }
}
