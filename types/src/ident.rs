//! Identifier information attached to spans.

use crate::module::ModuleId;
use crate::span::EitherSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdNameSpace {
    /// Variables, including data constructors used as values.
    VarName,
    DataName,
    /// Type variables.
    TvName,
    /// Type constructors and classes.
    TcClsName,
}

/// Static properties of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdProp {
    pub name: String,
    pub name_space: IdNameSpace,
    /// Pretty-printed type, when the compiler knows it.
    pub ty: Option<String>,
    pub defined_in: ModuleId,
    pub def_span: EitherSpan,
    /// Module the identifier's documentation points at, if different.
    pub home_module: Option<ModuleId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    pub imported_from: ModuleId,
    pub import_span: EitherSpan,
    /// Qualifier under which the name was imported (`""` for unqualified).
    pub import_qual: String,
}

/// How an identifier came into scope at the use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdScope {
    /// The occurrence binds the identifier.
    Binder,
    Local,
    Imported(ImportInfo),
    /// Built into the compiler.
    WiredIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdInfo {
    pub prop: IdProp,
    pub scope: IdScope,
}

/// What sits at a span: a plain identifier or one inside a quasi-quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanInfo {
    SpanId(IdInfo),
    SpanQQ(IdInfo),
}

impl SpanInfo {
    #[must_use]
    pub fn id_info(&self) -> &IdInfo {
        match self {
            Self::SpanId(info) | Self::SpanQQ(info) => info,
        }
    }

    #[must_use]
    pub fn is_quasi_quote(&self) -> bool {
        matches!(self, Self::SpanQQ(_))
    }
}
