//! new3 - template resolution and help for a project scaffolding tool
//!
//! Given the command-line tokens of a help request and a catalog of
//! installed templates, this library decides which template (if any) the
//! request names, validates the supplied template options and renders either
//! the generic usage banner, a template-scoped help page, or a diagnostic.
//!
//! # Example
//!
//! ```rust
//! use new3::{show_help, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let output = show_help(["console", "--help"], &catalog);
//!
//! assert_eq!(output.exit_code(), 0);
//! assert!(output.stdout.contains("Console App (C#)"));
//! assert!(output.stderr.is_empty());
//! ```

pub mod catalog;
pub mod error;
pub mod help;
pub mod resolver;

pub use catalog::{load_catalog, Catalog, CatalogError, ParameterKind, ParameterSpec, TemplateDescriptor};
pub use error::{Candidate, ResolveError};
pub use help::{ExitStatus, HelpOutput, OutputConfig};
pub use resolver::{resolve, Outcome, Resolution, ResolutionContext, ResolverConfig};

/// Configuration for the complete help pipeline
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Selector and variant matching options
    pub resolver: ResolverConfig,
    /// Help and diagnostic output options
    pub output: OutputConfig,
}

impl HelpConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver configuration
    pub fn with_resolver(mut self, config: ResolverConfig) -> Self {
        self.resolver = config;
        self
    }

    /// Set the output configuration
    pub fn with_output(mut self, config: OutputConfig) -> Self {
        self.output = config;
        self
    }
}

/// Resolve a help request with default configuration
///
/// This is the main entry point for the library. Each call builds its own
/// [`ResolutionContext`]; the catalog is only read.
pub fn show_help<I>(tokens: I, catalog: &Catalog) -> HelpOutput
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    show_help_with_config(tokens, catalog, &HelpConfig::default())
}

/// Resolve a help request with custom configuration
///
/// # Example
///
/// ```rust
/// use new3::{show_help_with_config, Catalog, HelpConfig, ResolverConfig};
///
/// let config = HelpConfig::new()
///     .with_resolver(ResolverConfig::new().with_full_name_matching(false));
///
/// let output = show_help_with_config(["Console App", "-h"], &Catalog::builtin(), &config);
/// assert_ne!(output.exit_code(), 0);
/// assert!(output.stdout.is_empty());
/// ```
pub fn show_help_with_config<I>(tokens: I, catalog: &Catalog, config: &HelpConfig) -> HelpOutput
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut ctx = ResolutionContext::new(tokens);
    let outcome = resolve(&mut ctx, catalog, &config.resolver);
    help::render(outcome, &ctx, &config.output)
}
