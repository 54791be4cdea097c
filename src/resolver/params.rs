//! Validation of the remaining tokens against a template's parameters

use crate::catalog::{ParameterKind, TemplateDescriptor};
use crate::error::ResolveError;

use super::tokens::ResolutionContext;

/// Parameters accepted for the resolved template, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedParameters {
    values: Vec<(String, String)>,
}

impl ValidatedParameters {
    /// Value supplied for a canonical parameter name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.values.push((name.to_string(), value.to_string())),
        }
    }
}

/// Validate every remaining token as a `name value` pair.
///
/// Stops at the first failure. Accepted pairs are consumed from the
/// context.
pub fn validate(
    template: &TemplateDescriptor,
    ctx: &mut ResolutionContext,
) -> Result<ValidatedParameters, ResolveError> {
    let mut accepted = ValidatedParameters::default();
    let mut cursor = ctx.cursor();

    while let Some(name_index) = cursor.next() {
        let option = ctx.token(name_index);
        let Some((name, spec)) = template.parameter(option) else {
            return Err(ResolveError::UnknownParameter {
                parameter: option.to_string(),
                template: template.display_name(),
                index: name_index,
            });
        };

        let Some(value_index) = cursor.next_value(ctx) else {
            return Err(ResolveError::MissingValue {
                parameter: option.to_string(),
                template: template.display_name(),
                index: name_index,
            });
        };
        let value = ctx.token(value_index);

        if let ParameterKind::Choice(choices) = &spec.kind {
            if !spec.kind.accepts(value) {
                return Err(ResolveError::InvalidChoiceValue {
                    parameter: option.to_string(),
                    value: value.to_string(),
                    allowed: choices.iter().map(|c| c.value.clone()).collect(),
                    index: value_index,
                });
            }
        }

        accepted.set(name, value);
        ctx.consume(name_index);
        ctx.consume(value_index);
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ParameterSpec;

    fn console() -> TemplateDescriptor {
        TemplateDescriptor::builder("Console App", "console")
            .variant("C#")
            .parameter(
                "--framework",
                ParameterSpec::choice(["net7.0", "net6.0"]).with_alias("-f"),
            )
            .parameter("--langVersion", ParameterSpec::text())
            .build()
            .unwrap()
    }

    fn run(tokens: &[&str]) -> (Result<ValidatedParameters, ResolveError>, ResolutionContext) {
        let mut ctx = ResolutionContext::new(tokens.iter().copied());
        ctx.consume(0);
        let result = validate(&console(), &mut ctx);
        (result, ctx)
    }

    #[test]
    fn test_choice_accepted() {
        let (result, ctx) = run(&["console", "--help", "--framework", "net7.0"]);
        let params = result.unwrap();
        assert_eq!(params.get("--framework"), Some("net7.0"));
        assert!(ctx.remaining().is_empty());
    }

    #[test]
    fn test_alias_records_canonical_name() {
        let (result, _) = run(&["console", "-f", "net6.0"]);
        assert_eq!(result.unwrap().get("--framework"), Some("net6.0"));
    }

    #[test]
    fn test_free_form_accepted() {
        let (result, _) = run(&["console", "--langVersion", "8.0"]);
        assert_eq!(result.unwrap().get("--langVersion"), Some("8.0"));
    }

    #[test]
    fn test_choice_without_value() {
        let (result, _) = run(&["console", "--help", "--framework"]);
        assert_eq!(
            result.unwrap_err(),
            ResolveError::MissingValue {
                parameter: "--framework".to_string(),
                template: "Console App (C#)".to_string(),
                index: 2,
            }
        );
    }

    #[test]
    fn test_free_form_without_value() {
        let (result, _) = run(&["console", "--langVersion", "-h"]);
        assert!(matches!(result, Err(ResolveError::MissingValue { index: 1, .. })));
    }

    #[test]
    fn test_option_is_not_a_value() {
        let (result, _) = run(&["console", "--framework", "--langVersion", "8.0"]);
        assert!(matches!(result, Err(ResolveError::MissingValue { index: 1, .. })));
    }

    #[test]
    fn test_unknown_parameter() {
        let (result, _) = run(&["console", "--help", "--do-not-exist"]);
        assert!(matches!(
            result,
            Err(ResolveError::UnknownParameter { ref parameter, index: 2, .. }) if parameter == "--do-not-exist"
        ));
    }

    #[test]
    fn test_stray_word_is_unknown_parameter() {
        let (result, _) = run(&["console", "extra"]);
        assert!(matches!(result, Err(ResolveError::UnknownParameter { .. })));
    }

    #[test]
    fn test_invalid_choice_value() {
        let (result, _) = run(&["console", "--framework", "net5.0"]);
        assert_eq!(
            result.unwrap_err(),
            ResolveError::InvalidChoiceValue {
                parameter: "--framework".to_string(),
                value: "net5.0".to_string(),
                allowed: vec!["net7.0".to_string(), "net6.0".to_string()],
                index: 2,
            }
        );
    }

    #[test]
    fn test_first_error_wins() {
        let (result, _) = run(&["console", "--do-not-exist", "--framework"]);
        assert!(matches!(result, Err(ResolveError::UnknownParameter { index: 1, .. })));
    }

    #[test]
    fn test_repeated_parameter_last_value_wins() {
        let (result, _) = run(&["console", "-f", "net6.0", "--framework", "net7.0"]);
        let params = result.unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("--framework"), Some("net7.0"));
    }

    #[test]
    fn test_no_parameters() {
        let (result, _) = run(&["console", "--help"]);
        assert!(result.unwrap().is_empty());
    }
}
