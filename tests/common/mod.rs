//! Shared test fixtures
//!
//! One representative value per protocol type, reused by the suites.

#![allow(dead_code)]

use idewire_protocol::types::{
    EitherSpan, FileContents, IdInfo, IdNameSpace, IdProp, IdScope, ImportInfo, ModuleId,
    ModuleName, PROTOCOL_VERSION, PackageId, Progress, ProperSpan, Request, Response,
    SessionUpdate, SourceError, SourceErrorKind, SourceFileUpdate, SpanInfo, SpanQuery,
};

pub fn proper_span() -> ProperSpan {
    ProperSpan::new("src/Data/Queue.hs", (12, 3), (12, 27))
}

pub fn base_package() -> PackageId {
    PackageId {
        name: "base".to_string(),
        version: Some("4.18.0.0".to_string()),
        package_key: "base".to_string(),
    }
}

pub fn prelude() -> ModuleId {
    ModuleId {
        name: ModuleName::new("Prelude"),
        package: base_package(),
    }
}

pub fn local_module() -> ModuleId {
    ModuleId {
        name: ModuleName::new("Data.Queue"),
        package: PackageId {
            name: "main".to_string(),
            version: None,
            package_key: "main".to_string(),
        },
    }
}

pub fn id_info(scope: IdScope) -> IdInfo {
    IdInfo {
        prop: IdProp {
            name: "foldr".to_string(),
            name_space: IdNameSpace::VarName,
            ty: Some("(a -> b -> b) -> b -> [a] -> b".to_string()),
            defined_in: prelude(),
            def_span: EitherSpan::text("<no location info>"),
            home_module: Some(prelude()),
        },
        scope,
    }
}

pub fn imported_scope() -> IdScope {
    IdScope::Imported(ImportInfo {
        imported_from: prelude(),
        import_span: proper_span().into(),
        import_qual: "P.".to_string(),
    })
}

/// Every session update variant, in declaration order.
pub fn session_updates() -> Vec<SessionUpdate> {
    vec![
        SessionUpdate::UpdateSourceFile(SourceFileUpdate {
            file_path: "src/Data/Queue.hs".to_string(),
            contents: FileContents::from("module Data.Queue where\n\nλ = ()\n"),
        }),
        SessionUpdate::UpdateSourceFileFromFile("src/Main.hs".to_string()),
        SessionUpdate::UpdateGhcOpts(vec!["-Wall".to_string(), "-O0".to_string()]),
    ]
}

/// Every request variant, in declaration order.
pub fn requests() -> Vec<Request> {
    let query = SpanQuery {
        module: ModuleName::new("Data.Queue"),
        span: proper_span().into(),
    };
    vec![
        Request::UpdateSession(session_updates()),
        Request::UpdateSession(Vec::new()),
        Request::GetSourceErrors,
        Request::GetSpanInfo(query.clone()),
        Request::GetExpTypes(SpanQuery {
            span: EitherSpan::text("whole-file"),
            ..query
        }),
        Request::GetLoadedModules,
        Request::ShutdownSession,
    ]
}

/// Every response variant, in declaration order.
pub fn responses() -> Vec<Response> {
    let progress = Progress {
        step: 2,
        num_steps: 7,
        parsed_msg: Some("Compiling Data.Queue".to_string()),
        orig_msg: Some("[2 of 7] Compiling Data.Queue ( src/Data/Queue.hs, interpreted )".to_string()),
    };
    vec![
        Response::SessionUpdate(Some(progress)),
        Response::SessionUpdate(Some(Progress::new(1, 1))),
        Response::SessionUpdate(None),
        Response::GetSourceErrors(vec![
            SourceError {
                kind: SourceErrorKind::Error,
                span: proper_span().into(),
                msg: "Variable not in scope: pop".to_string(),
            },
            SourceError {
                kind: SourceErrorKind::ServerDied,
                span: EitherSpan::text("<no location info>"),
                msg: "ghc exited".to_string(),
            },
        ]),
        Response::GetSpanInfo(vec![
            (proper_span().into(), SpanInfo::SpanId(id_info(imported_scope()))),
            (proper_span().into(), SpanInfo::SpanQQ(id_info(IdScope::WiredIn))),
        ]),
        Response::GetExpTypes(vec![(proper_span().into(), "Queue Int".to_string())]),
        Response::GetLoadedModules(vec![ModuleName::new("Data.Queue"), ModuleName::new("Main")]),
        Response::ShutdownSession,
        Response::InvalidRequest("Request: unmatched tag \"bogus\" for 'request' of Request".to_string()),
        Response::Welcome(PROTOCOL_VERSION),
    ]
}
