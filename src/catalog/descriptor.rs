//! Template descriptors and their parameter schemas

use super::error::CatalogError;

/// One legal value of a choice parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceValue {
    pub value: String,
    pub description: Option<String>,
}

impl ChoiceValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// How a parameter's value is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    /// Value must be one of the enumerated choices
    Choice(Vec<ChoiceValue>),
    /// Any value is accepted; `data_type` is only shown in help output
    FreeForm { data_type: String },
}

impl ParameterKind {
    /// Choice kind from plain values without descriptions
    pub fn choice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParameterKind::Choice(values.into_iter().map(ChoiceValue::new).collect())
    }

    /// Free-form text parameter
    pub fn text() -> Self {
        Self::free_form("text")
    }

    pub fn free_form(data_type: impl Into<String>) -> Self {
        ParameterKind::FreeForm {
            data_type: data_type.into(),
        }
    }

    /// Type name shown in help output
    pub fn type_name(&self) -> &str {
        match self {
            ParameterKind::Choice(_) => "choice",
            ParameterKind::FreeForm { data_type } => data_type,
        }
    }

    /// Enumerated values; empty for free-form parameters
    pub fn choices(&self) -> &[ChoiceValue] {
        match self {
            ParameterKind::Choice(values) => values,
            ParameterKind::FreeForm { .. } => &[],
        }
    }

    /// Whether `value` is legal for this kind
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ParameterKind::Choice(values) => values.iter().any(|c| c.value == value),
            ParameterKind::FreeForm { .. } => true,
        }
    }
}

/// Schema of a single template parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub kind: ParameterKind,
    /// Alternative option spellings, e.g. `-f` for `--framework`
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub default_value: Option<String>,
}

impl ParameterSpec {
    pub fn new(kind: ParameterKind) -> Self {
        Self {
            kind,
            aliases: Vec::new(),
            description: None,
            default_value: None,
        }
    }

    pub fn choice<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ParameterKind::choice(values))
    }

    pub fn text() -> Self {
        Self::new(ParameterKind::text())
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Every parameter in this model takes a value; there are no bare flags.
    pub fn requires_value(&self) -> bool {
        true
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, ParameterKind::Choice(_))
    }
}

/// An installed template as seen by the resolver
///
/// Descriptors are immutable once built. Use [`TemplateDescriptor::builder`]
/// so the short-name and parameter-name invariants are checked up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    identity: String,
    short_names: Vec<String>,
    full_name: String,
    variant_key: Option<String>,
    author: Option<String>,
    description: Option<String>,
    parameters: Vec<(String, ParameterSpec)>,
}

impl TemplateDescriptor {
    /// Start building a descriptor with its display name and first short name
    pub fn builder(full_name: impl Into<String>, short_name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder {
            identity: None,
            short_names: vec![short_name.into()],
            full_name: full_name.into(),
            variant_key: None,
            author: None,
            description: None,
            parameters: Vec::new(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn short_names(&self) -> &[String] {
        &self.short_names
    }

    /// The first declared short name, used in usage lines
    pub fn primary_short_name(&self) -> &str {
        &self.short_names[0]
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn variant_key(&self) -> Option<&str> {
        self.variant_key.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parameters(&self) -> &[(String, ParameterSpec)] {
        &self.parameters
    }

    /// Full name with the variant appended, e.g. `Console App (C#)`
    pub fn display_name(&self) -> String {
        match &self.variant_key {
            Some(variant) => format!("{} ({})", self.full_name, variant),
            None => self.full_name.clone(),
        }
    }

    /// Case-insensitive whole-token comparison against every short name
    pub fn matches_short_name(&self, selector: &str) -> bool {
        let selector = selector.to_lowercase();
        self.short_names.iter().any(|s| s.to_lowercase() == selector)
    }

    /// Case-sensitive whole-token comparison against the full name
    pub fn matches_full_name(&self, selector: &str) -> bool {
        self.full_name == selector
    }

    /// Case-insensitive comparison against the variant key
    pub fn matches_variant(&self, value: &str) -> bool {
        self.variant_key
            .as_deref()
            .is_some_and(|v| v.to_lowercase() == value.to_lowercase())
    }

    /// Look up a parameter by canonical name or alias.
    ///
    /// Returns the canonical name alongside its [`ParameterSpec`].
    pub fn parameter(&self, option: &str) -> Option<(&str, &ParameterSpec)> {
        self.parameters
            .iter()
            .find(|(name, spec)| name == option || spec.aliases.iter().any(|a| a == option))
            .map(|(name, spec)| (name.as_str(), spec))
    }
}

/// Builder for [`TemplateDescriptor`]
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    identity: Option<String>,
    short_names: Vec<String>,
    full_name: String,
    variant_key: Option<String>,
    author: Option<String>,
    description: Option<String>,
    parameters: Vec<(String, ParameterSpec)>,
}

impl TemplateBuilder {
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_names.push(short_name.into());
        self
    }

    pub fn variant(mut self, variant_key: impl Into<String>) -> Self {
        self.variant_key = Some(variant_key.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a parameter; a bare name like `framework` becomes `--framework`
    pub fn parameter(mut self, name: impl Into<String>, spec: ParameterSpec) -> Self {
        self.parameters.push((option_name(name.into()), spec));
        self
    }

    pub fn build(self) -> Result<TemplateDescriptor, CatalogError> {
        let invalid = |reason: String| CatalogError::Invalid {
            template: self.full_name.clone(),
            reason,
        };

        if self.short_names.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("short names must not be empty".to_string()));
        }

        let mut seen: Vec<&str> = Vec::new();
        for (name, spec) in &self.parameters {
            for option in std::iter::once(name).chain(spec.aliases.iter()) {
                if seen.contains(&option.as_str()) {
                    return Err(invalid(format!("duplicate parameter name '{}'", option)));
                }
                seen.push(option);
            }
            if let ParameterKind::Choice(values) = &spec.kind {
                if values.is_empty() {
                    return Err(invalid(format!(
                        "choice parameter '{}' declares no values",
                        name
                    )));
                }
            }
        }

        let identity = self.identity.clone().unwrap_or_else(|| {
            match &self.variant_key {
                Some(variant) => format!("{}.{}", self.short_names[0], variant),
                None => self.short_names[0].clone(),
            }
        });

        Ok(TemplateDescriptor {
            identity,
            short_names: self.short_names,
            full_name: self.full_name,
            variant_key: self.variant_key,
            author: self.author,
            description: self.description,
            parameters: self.parameters,
        })
    }
}

fn option_name(name: String) -> String {
    if name.starts_with('-') {
        name
    } else {
        format!("--{}", name)
    }
}
