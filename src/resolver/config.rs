//! Configuration for template resolution

/// Options controlling how selectors and variant options are interpreted
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Accept a selector equal to a template's full name
    pub full_name_matching: bool,

    /// Option spellings that select a variant, e.g. `--language`
    pub variant_options: Vec<String>,

    /// Maximum number of suggestions attached to a not-found error
    pub max_suggestions: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            full_name_matching: true,
            variant_options: vec!["--language".to_string(), "-lang".to_string()],
            max_suggestions: 3,
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable full-name selectors
    pub fn with_full_name_matching(mut self, enabled: bool) -> Self {
        self.full_name_matching = enabled;
        self
    }

    /// Replace the variant-selection option spellings
    pub fn with_variant_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variant_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the suggestion limit
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    pub fn is_variant_option(&self, token: &str) -> bool {
        self.variant_options.iter().any(|o| o == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.full_name_matching);
        assert!(config.is_variant_option("--language"));
        assert!(config.is_variant_option("-lang"));
        assert!(!config.is_variant_option("--Language"));
        assert_eq!(config.max_suggestions, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ResolverConfig::new()
            .with_full_name_matching(false)
            .with_variant_options(["--lang"])
            .with_max_suggestions(1);

        assert!(!config.full_name_matching);
        assert!(config.is_variant_option("--lang"));
        assert!(!config.is_variant_option("--language"));
        assert_eq!(config.max_suggestions, 1);
    }
}
