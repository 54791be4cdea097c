//! Configuration for help output

/// Generic usage text shown when no template is selected
pub const DEFAULT_BANNER: &str = "\
Usage: new3 [options]

Options:
  -h, --help                    Displays help for this command.
  -lang, --language <LANGUAGE>  Selects the language of the template to show.
  --hive <DIR>                  Reads installed templates from DIR/catalog.toml.

Run 'new3 <TEMPLATE> --help' to list the options of a template.
";

/// Configuration options for rendering help and diagnostics
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Program name used in usage lines and diagnostics
    pub command_name: String,

    /// Pre-rendered generic help text
    pub banner: String,

    /// Source name shown in diagnostic headers
    pub source_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            command_name: "new3".to_string(),
            banner: DEFAULT_BANNER.to_string(),
            source_name: "command line".to_string(),
        }
    }
}

impl OutputConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program name
    pub fn with_command_name(mut self, name: impl Into<String>) -> Self {
        self.command_name = name.into();
        self
    }

    /// Replace the generic help text
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Generic help text to print; an empty banner falls back to
    /// [`DEFAULT_BANNER`] so a success always writes something
    pub fn banner_text(&self) -> &str {
        if self.banner.trim().is_empty() {
            DEFAULT_BANNER
        } else {
            &self.banner
        }
    }

    /// Set the diagnostic source name
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}
