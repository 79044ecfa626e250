use idewire_grammar::{Grammar, object, string};
use idewire_types::{ModuleId, ModuleName, PackageId};

use super::{Schema, schema};

impl Schema for ModuleName {
    const LABEL: &'static str = "ModuleName";
    const SUMMARY: &'static str = "Dotted module name, e.g. \"Data.Map.Strict\".";

    fn grammar() -> Grammar<Self> {
        string().map(ModuleName::new, |name: &ModuleName| name.as_str().to_string())
    }
}

impl Schema for PackageId {
    const LABEL: &'static str = "PackageId";
    const SUMMARY: &'static str = "A package. `version` is omitted for unversioned packages.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let name = object.prop("name", string(), |package| &package.name);
        let version = object.optional("version", string(), |package| package.version.as_ref());
        let package_key = object.prop("packageKey", string(), |package| &package.package_key);
        object.build(move |fields| {
            Ok(Self {
                name: fields.get(&name)?,
                version: fields.get_optional(&version)?,
                package_key: fields.get(&package_key)?,
            })
        })
    }
}

impl Schema for ModuleId {
    const LABEL: &'static str = "ModuleId";
    const SUMMARY: &'static str = "A module together with the package that provides it.";

    fn grammar() -> Grammar<Self> {
        let mut object = object::<Self>();
        let name = object.prop("name", schema::<ModuleName>(), |module| &module.name);
        let package = object.prop("package", schema::<PackageId>(), |module| &module.package);
        object.build(move |fields| {
            Ok(Self {
                name: fields.get(&name)?,
                package: fields.get(&package)?,
            })
        })
    }
}
