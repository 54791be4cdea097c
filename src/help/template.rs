//! Template-scoped help body

use crate::catalog::ParameterSpec;
use crate::resolver::Resolution;

use super::config::OutputConfig;

/// Render the help body for a resolved template.
///
/// The generic banner is never part of this output.
pub fn render_template_help(resolution: &Resolution<'_>, config: &OutputConfig) -> String {
    let template = resolution.template;
    let mut out = String::new();

    out.push_str(&format!("{}\n", template.display_name()));
    if let Some(author) = template.author() {
        out.push_str(&format!("Author: {}\n", author));
    }
    if let Some(description) = template.description() {
        out.push_str(&format!("Description: {}\n", description));
    }

    out.push_str("\nUsage:\n");
    out.push_str(&format!(
        "  {} {} [options] [template options]\n",
        config.command_name,
        template.primary_short_name()
    ));
    out.push_str("\nTemplate options:\n");

    if template.parameters().is_empty() {
        out.push_str("  (No Parameters)\n");
        return out;
    }

    let heads: Vec<String> = template
        .parameters()
        .iter()
        .map(|(name, spec)| option_head(name, spec))
        .collect();
    let width = heads.iter().map(|h| h.chars().count()).max().unwrap_or(0);
    let indent = " ".repeat(width + 4);

    for ((name, spec), head) in template.parameters().iter().zip(&heads) {
        match &spec.description {
            Some(description) => {
                out.push_str(&format!("  {:<width$}  {}\n", head, description, width = width))
            }
            None => out.push_str(&format!("  {}\n", head)),
        }
        out.push_str(&format!("{}Type: {}\n", indent, spec.kind.type_name()));

        let choices = spec.kind.choices();
        let choice_width = choices.iter().map(|c| c.value.chars().count()).max().unwrap_or(0);
        for choice in choices {
            match &choice.description {
                Some(description) => out.push_str(&format!(
                    "{}  {:<w$}  {}\n",
                    indent,
                    choice.value,
                    description,
                    w = choice_width
                )),
                None => out.push_str(&format!("{}  {}\n", indent, choice.value)),
            }
        }

        if let Some(default) = &spec.default_value {
            out.push_str(&format!("{}Default: {}\n", indent, default));
        }
        if let Some(value) = resolution.parameters.get(name) {
            out.push_str(&format!("{}Selected: {}\n", indent, value));
        }
    }

    out
}

/// Left column of a parameter row, e.g. `-f, --framework <choice>`
fn option_head(name: &str, spec: &ParameterSpec) -> String {
    let mut spellings: Vec<&str> = spec.aliases.iter().map(String::as_str).collect();
    spellings.push(name);
    let mut head = spellings.join(", ");
    if spec.requires_value() {
        head.push_str(&format!(" <{}>", spec.kind.type_name()));
    }
    head
}
