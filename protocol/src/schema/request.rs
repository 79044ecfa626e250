use idewire_grammar::{Grammar, ObjectGrammar, array, string, tagged};
use idewire_types::{
    EitherSpan, FileContents, ModuleName, Request, SessionUpdate, SourceFileUpdate, SpanQuery,
};

use super::{Schema, schema};

impl Schema for SessionUpdate {
    const LABEL: &'static str = "SessionUpdate";
    const SUMMARY: &'static str = "One change to the session, tagged by `update`. Updates in a \
         request are applied in order.";

    fn grammar() -> Grammar<Self> {
        tagged::<Self>(Self::LABEL, "update")
            .variant(
                "updateSourceFile",
                SessionUpdate::UpdateSourceFile,
                |update| match update {
                    SessionUpdate::UpdateSourceFile(file) => Some(file),
                    _ => None,
                },
                |mut payload| {
                    let file_path = payload.prop("filePath", string(), |file: &SourceFileUpdate| {
                        &file.file_path
                    });
                    let contents = payload.prop(
                        "contents",
                        file_contents(),
                        |file: &SourceFileUpdate| &file.contents,
                    );
                    payload.build(move |fields| {
                        Ok(SourceFileUpdate {
                            file_path: fields.get(&file_path)?,
                            contents: fields.get(&contents)?,
                        })
                    })
                },
            )
            .variant(
                "updateSourceFileFromFile",
                SessionUpdate::UpdateSourceFileFromFile,
                |update| match update {
                    SessionUpdate::UpdateSourceFileFromFile(path) => Some(path),
                    _ => None,
                },
                |mut payload| {
                    let file_path = payload.prop("filePath", string(), |path: &String| path);
                    payload.build(move |fields| fields.get(&file_path))
                },
            )
            .variant(
                "updateGhcOpts",
                SessionUpdate::UpdateGhcOpts,
                |update| match update {
                    SessionUpdate::UpdateGhcOpts(options) => Some(options),
                    _ => None,
                },
                |mut payload| {
                    let options =
                        payload.prop("options", array(string()), |options: &Vec<String>| options);
                    payload.build(move |fields| fields.get(&options))
                },
            )
            .build()
    }
}

/// File contents travel as a JSON string; the domain type is UTF-8 only.
fn file_contents() -> Grammar<FileContents> {
    string().map(FileContents::from, |contents: &FileContents| {
        contents.as_str().to_string()
    })
}

impl Schema for Request {
    const LABEL: &'static str = "Request";
    const SUMMARY: &'static str = "A message from the editor to the backend, tagged by `request`.";

    fn grammar() -> Grammar<Self> {
        tagged::<Self>(Self::LABEL, "request")
            .variant(
                "updateSession",
                Request::UpdateSession,
                |request| match request {
                    Request::UpdateSession(updates) => Some(updates),
                    _ => None,
                },
                |mut payload| {
                    let updates = payload.prop(
                        "updates",
                        array(schema::<SessionUpdate>()),
                        |updates: &Vec<SessionUpdate>| updates,
                    );
                    payload.build(move |fields| fields.get(&updates))
                },
            )
            .unit("getSourceErrors", Request::GetSourceErrors)
            .variant(
                "getSpanInfo",
                Request::GetSpanInfo,
                |request| match request {
                    Request::GetSpanInfo(query) => Some(query),
                    _ => None,
                },
                span_query,
            )
            .variant(
                "getExpTypes",
                Request::GetExpTypes,
                |request| match request {
                    Request::GetExpTypes(query) => Some(query),
                    _ => None,
                },
                span_query,
            )
            .unit("getLoadedModules", Request::GetLoadedModules)
            .unit("shutdownSession", Request::ShutdownSession)
            .build()
    }
}

fn span_query(mut payload: ObjectGrammar<SpanQuery>) -> Grammar<SpanQuery> {
    let module = payload.prop("module", schema::<ModuleName>(), |query| &query.module);
    let span = payload.prop("span", schema::<EitherSpan>(), |query| &query.span);
    payload.build(move |fields| {
        Ok(SpanQuery {
            module: fields.get(&module)?,
            span: fields.get(&span)?,
        })
    })
}
