use std::fmt;

/// A region of a source file, 1-based lines and columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProperSpan {
    pub file_path: String,
    pub from_line: i64,
    pub from_column: i64,
    pub to_line: i64,
    pub to_column: i64,
}

impl ProperSpan {
    #[must_use]
    pub fn new(
        file_path: impl Into<String>,
        (from_line, from_column): (i64, i64),
        (to_line, to_column): (i64, i64),
    ) -> Self {
        Self {
            file_path: file_path.into(),
            from_line,
            from_column,
            to_line,
            to_column,
        }
    }
}

impl fmt::Display for ProperSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}:{}",
            self.file_path, self.from_line, self.from_column, self.to_line, self.to_column
        )
    }
}

/// Either a proper file region or free-form text describing a location
/// (e.g. `"<no location info>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EitherSpan {
    TextSpan(String),
    ProperSpan(ProperSpan),
}

/// Spans carried by requests and responses.
pub type SourceSpan = EitherSpan;

impl EitherSpan {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextSpan(text.into())
    }

    #[must_use]
    pub fn as_proper(&self) -> Option<&ProperSpan> {
        match self {
            Self::ProperSpan(span) => Some(span),
            Self::TextSpan(_) => None,
        }
    }
}

impl From<ProperSpan> for EitherSpan {
    fn from(span: ProperSpan) -> Self {
        Self::ProperSpan(span)
    }
}

impl fmt::Display for EitherSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextSpan(text) => f.write_str(text),
            Self::ProperSpan(span) => span.fmt(f),
        }
    }
}
