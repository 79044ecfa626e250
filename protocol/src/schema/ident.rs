use idewire_grammar::{Grammar, ObjectGrammar, enumeration, object, string, tagged};
use idewire_types::{
    EitherSpan, IdInfo, IdNameSpace, IdProp, IdScope, ImportInfo, ModuleId, SpanInfo,
};

use super::{Schema, schema};

const NAME_SPACES: &[(IdNameSpace, &str)] = &[
    (IdNameSpace::VarName, "varName"),
    (IdNameSpace::DataName, "dataName"),
    (IdNameSpace::TvName, "tvName"),
    (IdNameSpace::TcClsName, "tcClsName"),
];

impl Schema for IdNameSpace {
    const LABEL: &'static str = "IdNameSpace";
    const SUMMARY: &'static str = "Name space of an identifier.";

    fn grammar() -> Grammar<Self> {
        enumeration(Self::LABEL, NAME_SPACES)
    }
}

impl Schema for IdProp {
    const LABEL: &'static str = "IdProp";
    const SUMMARY: &'static str = "Static properties of an identifier. `type` is omitted when unknown.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let name = object.prop("name", string(), |prop| &prop.name);
        let name_space = object.prop("nameSpace", schema::<IdNameSpace>(), |prop| &prop.name_space);
        let ty = object.optional("type", string(), |prop| prop.ty.as_ref());
        let defined_in = object.prop("definedIn", schema::<ModuleId>(), |prop| &prop.defined_in);
        let def_span = object.prop("defSpan", schema::<EitherSpan>(), |prop| &prop.def_span);
        let home_module = object.optional("homeModule", schema::<ModuleId>(), |prop| {
            prop.home_module.as_ref()
        });
        object.build(move |fields| {
            Ok(Self {
                name: fields.get(&name)?,
                name_space: fields.get(&name_space)?,
                ty: fields.get_optional(&ty)?,
                defined_in: fields.get(&defined_in)?,
                def_span: fields.get(&def_span)?,
                home_module: fields.get_optional(&home_module)?,
            })
        })
    }
}

impl Schema for IdScope {
    const LABEL: &'static str = "IdScope";
    const SUMMARY: &'static str = "How an identifier is in scope at the use site, tagged by `scope`.";

    fn grammar() -> Grammar<Self> {
        tagged::<Self>(Self::LABEL, "scope")
            .unit("binder", IdScope::Binder)
            .unit("local", IdScope::Local)
            .variant(
                "imported",
                IdScope::Imported,
                |scope| match scope {
                    IdScope::Imported(import) => Some(import),
                    _ => None,
                },
                |mut payload| {
                    let imported_from = payload.prop(
                        "importedFrom",
                        schema::<ModuleId>(),
                        |import: &ImportInfo| &import.imported_from,
                    );
                    let import_span = payload.prop(
                        "importSpan",
                        schema::<EitherSpan>(),
                        |import: &ImportInfo| &import.import_span,
                    );
                    let import_qual =
                        payload.prop("importQual", string(), |import: &ImportInfo| {
                            &import.import_qual
                        });
                    payload.build(move |fields| {
                        Ok(ImportInfo {
                            imported_from: fields.get(&imported_from)?,
                            import_span: fields.get(&import_span)?,
                            import_qual: fields.get(&import_qual)?,
                        })
                    })
                },
            )
            .unit("wiredIn", IdScope::WiredIn)
            .build()
    }
}

impl Schema for IdInfo {
    const LABEL: &'static str = "IdInfo";
    const SUMMARY: &'static str = "An identifier occurrence: its properties and its scope.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let prop = object.prop("prop", schema::<IdProp>(), |info| &info.prop);
        let scope = object.prop("scope", schema::<IdScope>(), |info| &info.scope);
        object.build(move |fields| {
            Ok(Self {
                prop: fields.get(&prop)?,
                scope: fields.get(&scope)?,
            })
        })
    }
}

impl Schema for SpanInfo {
    const LABEL: &'static str = "SpanInfo";
    const SUMMARY: &'static str = "Identifier at a span. `isQuasiQuote` is true when the identifier \
         occurs inside a quasi-quotation.";

    fn grammar() -> Grammar<Self> {
        tagged::<Self>(Self::LABEL, "isQuasiQuote")
            .variant(
                false,
                SpanInfo::SpanId,
                |info| match info {
                    SpanInfo::SpanId(id_info) => Some(id_info),
                    SpanInfo::SpanQQ(_) => None,
                },
                id_info_body,
            )
            .variant(
                true,
                SpanInfo::SpanQQ,
                |info| match info {
                    SpanInfo::SpanQQ(id_info) => Some(id_info),
                    SpanInfo::SpanId(_) => None,
                },
                id_info_body,
            )
            .build()
    }
}

fn id_info_body(mut payload: ObjectGrammar<IdInfo>) -> Grammar<IdInfo> {
    let id_info = payload.prop("idInfo", schema::<IdInfo>(), |info| info);
    payload.build(move |fields| fields.get(&id_info))
}
