//! Template catalog: the immutable snapshot of installed templates
//!
//! A [`Catalog`] is loaded once per invocation and passed by reference
//! through every resolution stage. Nothing in the resolver mutates it.
//!
//! # Example
//!
//! ```rust
//! use new3::catalog::{Catalog, ParameterSpec, TemplateDescriptor};
//!
//! let console = TemplateDescriptor::builder("Console App", "console")
//!     .variant("C#")
//!     .parameter("--framework", ParameterSpec::choice(["net7.0"]))
//!     .build()
//!     .unwrap();
//!
//! let catalog = Catalog::new(vec![console]).unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

mod descriptor;
mod error;
mod loader;

pub use descriptor::{
    ChoiceValue, ParameterKind, ParameterSpec, TemplateBuilder, TemplateDescriptor,
};
pub use error::CatalogError;
pub use loader::{load_catalog, CATALOG_FILE_NAME};

/// Point-in-time set of template descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<TemplateDescriptor>,
    /// Variant picked when a group is otherwise ambiguous
    preferred_variant: Option<String>,
}

impl Catalog {
    /// Create a catalog, checking that identities are unique and that
    /// templates sharing a name differ by variant.
    pub fn new(templates: Vec<TemplateDescriptor>) -> Result<Self, CatalogError> {
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                if a.identity() == b.identity() {
                    return Err(CatalogError::Invalid {
                        template: b.full_name().to_string(),
                        reason: format!("duplicate identity '{}'", b.identity()),
                    });
                }
                if same_group(a, b) && same_variant(a, b) {
                    return Err(CatalogError::Invalid {
                        template: b.full_name().to_string(),
                        reason: format!(
                            "variant '{}' is already used by '{}'",
                            b.variant_key().unwrap_or("<none>"),
                            a.identity()
                        ),
                    });
                }
            }
        }

        Ok(Self {
            templates,
            preferred_variant: None,
        })
    }

    /// A catalog with no templates
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the variant used to narrow otherwise ambiguous groups
    pub fn with_preferred_variant(mut self, variant: impl Into<String>) -> Self {
        self.preferred_variant = Some(variant.into());
        self
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    pub fn preferred_variant(&self) -> Option<&str> {
        self.preferred_variant.as_deref()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn same_group(a: &TemplateDescriptor, b: &TemplateDescriptor) -> bool {
    a.full_name() == b.full_name() || a.short_names().iter().any(|s| b.matches_short_name(s))
}

fn same_variant(a: &TemplateDescriptor, b: &TemplateDescriptor) -> bool {
    match (a.variant_key(), b.variant_key()) {
        (None, None) => true,
        (Some(v), _) => b.matches_variant(v),
        (None, Some(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(variant: &str) -> TemplateDescriptor {
        TemplateDescriptor::builder("Basic", "basic")
            .variant(variant)
            .build()
            .unwrap()
    }

    #[test]
    fn test_variant_group_accepted() {
        let catalog = Catalog::new(vec![basic("F#"), basic("VB")]).expect("valid group");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.preferred_variant(), None);
    }

    #[test]
    fn test_duplicate_variant_in_group_rejected() {
        let a = basic("F#");
        let b = TemplateDescriptor::builder("Basic Other", "BASIC")
            .identity("other.fsharp")
            .variant("f#")
            .build()
            .unwrap();
        let result = Catalog::new(vec![a, b]);
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let result = Catalog::new(vec![basic("F#"), basic("F#")]);
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_unrelated_templates_without_variant() {
        let a = TemplateDescriptor::builder("Console App", "console").build().unwrap();
        let b = TemplateDescriptor::builder("Class Library", "classlib").build().unwrap();
        assert!(Catalog::new(vec![a, b]).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.templates().is_empty());
    }
}
