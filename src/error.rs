//! Resolution errors and their command-line diagnostics

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::catalog::TemplateDescriptor;
use crate::resolver::CommandLine;

/// Summary of a template taking part in an ambiguous match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identity: String,
    pub full_name: String,
    pub short_names: String,
    pub variant: Option<String>,
}

impl From<&TemplateDescriptor> for Candidate {
    fn from(template: &TemplateDescriptor) -> Self {
        Self {
            identity: template.identity().to_string(),
            full_name: template.full_name().to_string(),
            short_names: template.short_names().join(","),
            variant: template.variant_key().map(str::to_string),
        }
    }
}

/// Every way a help request can fail.
///
/// Each variant records the index of the token it blames so the diagnostic
/// can point at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No template matches the selector (or the selector and language)
    #[error("No templates found matching: '{selector}'{}.", variant_filter(.variant))]
    SelectorNotFound {
        selector: String,
        variant: Option<String>,
        index: usize,
        suggestions: Vec<String>,
    },

    /// A variant group could not be narrowed to one template
    #[error("Unable to resolve the template '{selector}', the following installed templates are conflicting: {}", candidate_names(.candidates))]
    AmbiguousSelector {
        selector: String,
        index: usize,
        candidates: Vec<Candidate>,
    },

    /// The resolved template does not declare this parameter, or an option
    /// came before any template was named (`template` is then empty)
    #[error("Unrecognized parameter '{parameter}'{}.", for_template(.template))]
    UnknownParameter {
        parameter: String,
        template: String,
        index: usize,
    },

    /// A parameter was given without a value
    #[error("Required argument missing for option: '{parameter}'.")]
    MissingValue {
        parameter: String,
        template: String,
        index: usize,
    },

    /// A choice parameter received a value outside its allowed set
    #[error("'{value}' is not a valid value for '{parameter}'.")]
    InvalidChoiceValue {
        parameter: String,
        value: String,
        allowed: Vec<String>,
        index: usize,
    },
}

fn variant_filter(variant: &Option<String>) -> String {
    match variant {
        Some(v) => format!(", language='{}'", v),
        None => String::new(),
    }
}

fn for_template(template: &str) -> String {
    if template.is_empty() {
        String::new()
    } else {
        format!(" for template '{}'", template)
    }
}

fn candidate_names(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| c.identity.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResolveError {
    /// Index of the token this error blames
    pub fn index(&self) -> usize {
        match self {
            Self::SelectorNotFound { index, .. }
            | Self::AmbiguousSelector { index, .. }
            | Self::UnknownParameter { index, .. }
            | Self::MissingValue { index, .. }
            | Self::InvalidChoiceValue { index, .. } => *index,
        }
    }

    /// Whether the error was raised while picking the template, as opposed
    /// to validating its parameters
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::SelectorNotFound { .. } | Self::AmbiguousSelector { .. }
        )
    }

    fn label_message(&self) -> String {
        match self {
            Self::SelectorNotFound { variant: Some(v), .. } => {
                format!("no template in this group targets '{}'", v)
            }
            Self::SelectorNotFound { .. } => {
                "does not match any template short name or name".to_string()
            }
            Self::AmbiguousSelector { candidates, .. } => {
                format!("matches {} templates", candidates.len())
            }
            Self::UnknownParameter { template, .. } if template.is_empty() => {
                "options must follow a template name".to_string()
            }
            Self::UnknownParameter { template, .. } => {
                format!("not a parameter of {}", template)
            }
            Self::MissingValue { .. } => "expects a value".to_string(),
            Self::InvalidChoiceValue { allowed, .. } => {
                format!("expected one of: {}", allowed.join(", "))
            }
        }
    }

    /// Plain-text lines printed after the report
    fn hints(&self) -> Vec<String> {
        match self {
            Self::SelectorNotFound { suggestions, .. } if !suggestions.is_empty() => {
                let mut lines = vec!["Did you mean one of these templates?".to_string()];
                lines.extend(suggestions.iter().map(|s| format!("  {}", s)));
                lines
            }
            Self::AmbiguousSelector { candidates, .. } => {
                let mut lines = candidate_table(candidates);
                lines.push(String::new());
                lines.push(
                    "Uninstall the template packages containing the templates to keep only one \
                     template from the list, or specify the language with --language."
                        .to_string(),
                );
                lines
            }
            _ => Vec::new(),
        }
    }

    /// Render the error against the invocation using ariadne
    pub fn format(&self, line: &CommandLine, source_name: &str) -> String {
        let span = line.span(self.index());
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Error, source_name, span.start)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(Label::new((source_name, span)).with_message(self.label_message()))
            .finish()
            .write((source_name, Source::from(line.text())), &mut buf);

        let mut out = match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        };
        for hint in self.hints() {
            out.push_str(&hint);
            out.push('\n');
        }
        out
    }
}

fn candidate_table(candidates: &[Candidate]) -> Vec<String> {
    let header = ["Template Name", "Short Name", "Language", "Identity"];
    let rows: Vec<[&str; 4]> = candidates
        .iter()
        .map(|c| {
            [
                c.full_name.as_str(),
                c.short_names.as_str(),
                c.variant.as_deref().unwrap_or(""),
                c.identity.as_str(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(header)];
    lines.push(format_row(widths.map(|w| "-".repeat(w)).each_ref().map(String::as_str)));
    lines.extend(rows.into_iter().map(format_row));
    lines
}
