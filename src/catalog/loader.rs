//! Loading catalogs from TOML files and the builtin template set

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::descriptor::{ChoiceValue, ParameterKind, ParameterSpec, TemplateDescriptor};
use super::error::CatalogError;
use super::Catalog;

/// File read from a custom storage location
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    defaults: Option<TomlDefaults>,
    #[serde(default, rename = "template")]
    templates: Vec<TomlTemplate>,
}

#[derive(Deserialize)]
struct TomlDefaults {
    language: Option<String>,
}

#[derive(Deserialize)]
struct TomlTemplate {
    identity: Option<String>,
    short_names: Vec<String>,
    name: String,
    language: Option<String>,
    author: Option<String>,
    description: Option<String>,
    #[serde(default, rename = "parameter")]
    parameters: Vec<TomlParameter>,
}

#[derive(Deserialize)]
struct TomlParameter {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default = "default_kind")]
    kind: String,
    description: Option<String>,
    default: Option<String>,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlChoice {
    Bare(String),
    Described {
        value: String,
        description: Option<String>,
    },
}

fn default_kind() -> String {
    "text".to_string()
}

/// Templates available when no storage location is given
const BUILTIN_CATALOG: &str = r##"
[defaults]
language = "C#"

[[template]]
identity = "Microsoft.Common.Console.CSharp"
short_names = ["console"]
name = "Console App"
language = "C#"
author = "Microsoft"
description = "A project for creating a command-line application that can run on .NET on Windows, Linux and macOS"

[[template.parameter]]
name = "--framework"
aliases = ["-f"]
kind = "choice"
description = "The target framework for the project."
default = "net7.0"
choices = [
    { value = "net7.0", description = "Target net7.0" },
    { value = "net6.0", description = "Target net6.0" },
]

[[template.parameter]]
name = "--langVersion"
description = "Sets the LangVersion property in the created project file"

[[template.parameter]]
name = "--no-restore"
kind = "bool"
description = "If specified, skips the automatic restore of the project on create."
default = "false"

[[template]]
identity = "Microsoft.Common.Console.FSharp"
short_names = ["console"]
name = "Console App"
language = "F#"
author = "Microsoft"
description = "A project for creating a command-line application that can run on .NET on Windows, Linux and macOS"

[[template.parameter]]
name = "--framework"
aliases = ["-f"]
kind = "choice"
description = "The target framework for the project."
default = "net7.0"
choices = [
    { value = "net7.0", description = "Target net7.0" },
    { value = "net6.0", description = "Target net6.0" },
]

[[template.parameter]]
name = "--no-restore"
kind = "bool"
description = "If specified, skips the automatic restore of the project on create."
default = "false"

[[template]]
identity = "Microsoft.Common.Library.CSharp"
short_names = ["classlib"]
name = "Class Library"
language = "C#"
author = "Microsoft"
description = "A project for creating a class library that targets .NET or .NET Standard"

[[template.parameter]]
name = "--framework"
aliases = ["-f"]
kind = "choice"
description = "The target framework for the project."
default = "net7.0"
choices = [
    { value = "net7.0", description = "Target net7.0" },
    { value = "net6.0", description = "Target net6.0" },
    { value = "netstandard2.1", description = "Target netstandard2.1" },
    { value = "netstandard2.0", description = "Target netstandard2.0" },
]

[[template.parameter]]
name = "--langVersion"
description = "Sets the LangVersion property in the created project file"

[[template.parameter]]
name = "--no-restore"
kind = "bool"
description = "If specified, skips the automatic restore of the project on create."
default = "false"

[[template]]
identity = "Microsoft.Common.Library.FSharp"
short_names = ["classlib"]
name = "Class Library"
language = "F#"
author = "Microsoft"
description = "A project for creating a class library that targets .NET or .NET Standard"

[[template.parameter]]
name = "--framework"
aliases = ["-f"]
kind = "choice"
description = "The target framework for the project."
default = "net7.0"
choices = [
    { value = "net7.0", description = "Target net7.0" },
    { value = "net6.0", description = "Target net6.0" },
    { value = "netstandard2.1", description = "Target netstandard2.1" },
    { value = "netstandard2.0", description = "Target netstandard2.0" },
]

[[template.parameter]]
name = "--no-restore"
kind = "bool"
description = "If specified, skips the automatic restore of the project on create."
default = "false"
"##;

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        let templates = parsed
            .templates
            .into_iter()
            .map(TomlTemplate::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::new(templates)?;
        Ok(match parsed.defaults.and_then(|d| d.language) {
            Some(language) => catalog.with_preferred_variant(language),
            None => catalog,
        })
    }

    /// The templates shipped with the tool
    pub fn builtin() -> Self {
        Self::from_str(BUILTIN_CATALOG).expect("Builtin catalog should be valid TOML")
    }
}

impl TomlTemplate {
    fn into_descriptor(self) -> Result<TemplateDescriptor, CatalogError> {
        let mut short_names = self.short_names.into_iter();
        let first = short_names.next().ok_or_else(|| CatalogError::Invalid {
            template: self.name.clone(),
            reason: "at least one short name is required".to_string(),
        })?;

        let mut builder = TemplateDescriptor::builder(self.name.clone(), first);
        for short_name in short_names {
            builder = builder.short_name(short_name);
        }
        if let Some(identity) = self.identity {
            builder = builder.identity(identity);
        }
        if let Some(language) = self.language {
            builder = builder.variant(language);
        }
        if let Some(author) = self.author {
            builder = builder.author(author);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        for param in self.parameters {
            let (name, spec) = param.into_spec(&self.name)?;
            builder = builder.parameter(name, spec);
        }
        builder.build()
    }
}

impl TomlParameter {
    fn into_spec(self, template: &str) -> Result<(String, ParameterSpec), CatalogError> {
        let kind = if self.kind == "choice" {
            ParameterKind::Choice(self.choices.into_iter().map(TomlChoice::into_value).collect())
        } else if self.choices.is_empty() {
            ParameterKind::free_form(self.kind)
        } else {
            return Err(CatalogError::Invalid {
                template: template.to_string(),
                reason: format!(
                    "parameter '{}' lists choices but has kind '{}'",
                    self.name, self.kind
                ),
            });
        };

        let mut spec = ParameterSpec::new(kind);
        spec.aliases = self.aliases;
        spec.description = self.description;
        spec.default_value = self.default;
        Ok((self.name, spec))
    }
}

impl TomlChoice {
    fn into_value(self) -> ChoiceValue {
        match self {
            TomlChoice::Bare(value) => ChoiceValue::new(value),
            TomlChoice::Described { value, description } => ChoiceValue { value, description },
        }
    }
}

/// Load the catalog for one invocation.
///
/// Without a storage location the builtin templates are used. A storage
/// location that cannot be read or parsed yields an empty catalog; the
/// failure is logged and never reaches the resolver.
pub fn load_catalog(storage: Option<&Path>) -> Catalog {
    let Some(dir) = storage else {
        debug!("no template storage given, using builtin catalog");
        return Catalog::builtin();
    };

    let path = dir.join(CATALOG_FILE_NAME);
    match Catalog::from_file(&path) {
        Ok(catalog) => {
            debug!(path = %path.display(), templates = catalog.len(), "loaded catalog");
            catalog
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load catalog, continuing with none");
            Catalog::empty()
        }
    }
}
