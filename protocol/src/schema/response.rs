use idewire_grammar::{Grammar, array, enumeration, integer, object, pair, string, tagged};
use idewire_types::{
    EitherSpan, ModuleName, Progress, Response, SourceError, SourceErrorKind, SpanInfo,
    VersionInfo,
};

use super::{Schema, schema};

impl Schema for Progress {
    const LABEL: &'static str = "Progress";
    const SUMMARY: &'static str = "Compilation progress: step `step` of `numSteps`, with the compiler \
         message when there is one.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let step = object.prop("step", integer(), |progress| &progress.step);
        let num_steps = object.prop("numSteps", integer(), |progress| &progress.num_steps);
        let parsed_msg =
            object.optional("parsedMsg", string(), |progress| progress.parsed_msg.as_ref());
        let orig_msg = object.optional("origMsg", string(), |progress| progress.orig_msg.as_ref());
        object.build(move |fields| {
            Ok(Self {
                step: fields.get(&step)?,
                num_steps: fields.get(&num_steps)?,
                parsed_msg: fields.get_optional(&parsed_msg)?,
                orig_msg: fields.get_optional(&orig_msg)?,
            })
        })
    }
}

const ERROR_KINDS: &[(SourceErrorKind, &str)] = &[
    (SourceErrorKind::Error, "error"),
    (SourceErrorKind::Warning, "warning"),
    (SourceErrorKind::ServerDied, "serverDied"),
];

impl Schema for SourceErrorKind {
    const LABEL: &'static str = "SourceErrorKind";
    const SUMMARY: &'static str = "Severity of a source error.";

    fn grammar() -> Grammar<Self> {
        enumeration(Self::LABEL, ERROR_KINDS)
    }
}

impl Schema for SourceError {
    const LABEL: &'static str = "SourceError";
    const SUMMARY: &'static str = "A compiler diagnostic.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let kind = object.prop("kind", schema::<SourceErrorKind>(), |error| &error.kind);
        let span = object.prop("span", schema::<EitherSpan>(), |error| &error.span);
        let msg = object.prop("msg", string(), |error| &error.msg);
        object.build(move |fields| {
            Ok(Self {
                kind: fields.get(&kind)?,
                span: fields.get(&span)?,
                msg: fields.get(&msg)?,
            })
        })
    }
}

impl Schema for VersionInfo {
    const LABEL: &'static str = "VersionInfo";
    const SUMMARY: &'static str = "Protocol version. Peers with the same major version interoperate.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let major = object.prop("major", integer(), |version| &version.major);
        let minor = object.prop("minor", integer(), |version| &version.minor);
        let patch = object.prop("patch", integer(), |version| &version.patch);
        object.build(move |fields| {
            Ok(Self {
                major: fields.get(&major)?,
                minor: fields.get(&minor)?,
                patch: fields.get(&patch)?,
            })
        })
    }
}

impl Schema for Response {
    const LABEL: &'static str = "Response";
    const SUMMARY: &'static str = "A message from the backend to the editor, tagged by `response`.";

    fn grammar() -> Grammar<Self> {
        tagged::<Self>(Self::LABEL, "response")
            .variant(
                "sessionUpdate",
                Response::SessionUpdate,
                |response| match response {
                    Response::SessionUpdate(progress) => Some(progress),
                    _ => None,
                },
                |mut payload| {
                    let progress = payload.optional(
                        "progress",
                        schema::<Progress>(),
                        Option::as_ref,
                    );
                    payload.build(move |fields| fields.get_optional(&progress))
                },
            )
            .variant(
                "getSourceErrors",
                Response::GetSourceErrors,
                |response| match response {
                    Response::GetSourceErrors(errors) => Some(errors),
                    _ => None,
                },
                |mut payload| {
                    let errors = payload.prop(
                        "errors",
                        array(schema::<SourceError>()),
                        |errors: &Vec<SourceError>| errors,
                    );
                    payload.build(move |fields| fields.get(&errors))
                },
            )
            .variant(
                "getSpanInfo",
                Response::GetSpanInfo,
                |response| match response {
                    Response::GetSpanInfo(info) => Some(info),
                    _ => None,
                },
                |mut payload| {
                    let info = payload.prop(
                        "info",
                        array(pair(schema::<EitherSpan>(), schema::<SpanInfo>())),
                        |info: &Vec<(EitherSpan, SpanInfo)>| info,
                    );
                    payload.build(move |fields| fields.get(&info))
                },
            )
            .variant(
                "getExpTypes",
                Response::GetExpTypes,
                |response| match response {
                    Response::GetExpTypes(info) => Some(info),
                    _ => None,
                },
                |mut payload| {
                    let info = payload.prop(
                        "info",
                        array(pair(schema::<EitherSpan>(), string())),
                        |info: &Vec<(EitherSpan, String)>| info,
                    );
                    payload.build(move |fields| fields.get(&info))
                },
            )
            .variant(
                "getLoadedModules",
                Response::GetLoadedModules,
                |response| match response {
                    Response::GetLoadedModules(modules) => Some(modules),
                    _ => None,
                },
                |mut payload| {
                    let modules = payload.prop(
                        "modules",
                        array(schema::<ModuleName>()),
                        |modules: &Vec<ModuleName>| modules,
                    );
                    payload.build(move |fields| fields.get(&modules))
                },
            )
            .unit("shutdownSession", Response::ShutdownSession)
            .variant(
                "invalidRequest",
                Response::InvalidRequest,
                |response| match response {
                    Response::InvalidRequest(message) => Some(message),
                    _ => None,
                },
                |mut payload| {
                    let message =
                        payload.prop("errorMessage", string(), |message: &String| message);
                    payload.build(move |fields| fields.get(&message))
                },
            )
            .variant(
                "welcome",
                Response::Welcome,
                |response| match response {
                    Response::Welcome(version) => Some(version),
                    _ => None,
                },
                |mut payload| {
                    let version = payload.prop(
                        "version",
                        schema::<VersionInfo>(),
                        |version: &VersionInfo| version,
                    );
                    payload.build(move |fields| fields.get(&version))
                },
            )
            .build()
    }
}
