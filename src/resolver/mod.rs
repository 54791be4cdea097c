//! Template resolution pipeline
//!
//! Tokens flow through three stages, each of which may end the invocation
//! with a [`ResolveError`]:
//!
//! 1. [`matcher`]: the selector is matched against template identities
//! 2. [`variant`]: a matched group is narrowed to one template
//! 3. [`params`]: the remaining tokens are validated as template parameters

pub mod config;
pub mod matcher;
pub mod params;
pub mod tokens;
pub mod variant;

pub use config::ResolverConfig;
pub use matcher::{match_selector, MatchResult};
pub use params::ValidatedParameters;
pub use tokens::{classify, CommandLine, ResolutionContext, TokenCursor, TokenKind};

use tracing::debug;

use crate::catalog::{Catalog, TemplateDescriptor};
use crate::error::ResolveError;

/// A template picked for help along with its validated parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'c> {
    pub template: &'c TemplateDescriptor,
    pub parameters: ValidatedParameters,
}

/// Successful outcome of resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'c> {
    /// No selector was given
    Generic,
    /// Exactly one template was resolved
    Template(Resolution<'c>),
}

/// Run every stage over the context.
///
/// Variant-selection pairs are taken out first, wherever they appear. The
/// selector is then the first remaining token, which must be a plain word;
/// an option in that position names no template and is rejected.
pub fn resolve<'c>(
    ctx: &mut ResolutionContext,
    catalog: &'c Catalog,
    config: &ResolverConfig,
) -> Result<Outcome<'c>, ResolveError> {
    let selection = variant::find_variant_selection(ctx, config)?;

    let Some(selector_index) = ctx.selector() else {
        return match ctx.remaining().first() {
            Some(&index) => {
                debug!(token = ctx.token(index), "option given before any template");
                Err(ResolveError::UnknownParameter {
                    parameter: ctx.token(index).to_string(),
                    template: String::new(),
                    index,
                })
            }
            None => {
                debug!(help = ctx.help_requested(), "no selector, showing generic help");
                Ok(Outcome::Generic)
            }
        };
    };
    let selector = ctx.token(selector_index).to_string();
    ctx.consume(selector_index);

    let candidates = match match_selector(&selector, catalog, config) {
        MatchResult::NoMatch => {
            debug!(%selector, "selector matched no template");
            return Err(ResolveError::SelectorNotFound {
                suggestions: matcher::suggest(&selector, catalog, config.max_suggestions),
                selector,
                variant: None,
                index: selector_index,
            });
        }
        result => result.into_candidates(),
    };
    debug!(%selector, candidates = candidates.len(), "selector matched");

    let template = variant::disambiguate(&selector, selector_index, candidates, selection, catalog)?;
    debug!(identity = template.identity(), "template resolved");

    let parameters = params::validate(template, ctx)?;
    debug!(accepted = parameters.len(), "parameters validated");

    Ok(Outcome::Template(Resolution {
        template,
        parameters,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ParameterSpec;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            TemplateDescriptor::builder("Console App", "console")
                .variant("C#")
                .parameter("--framework", ParameterSpec::choice(["net7.0"]))
                .build()
                .unwrap(),
            TemplateDescriptor::builder("Basic", "basic")
                .variant("F#")
                .build()
                .unwrap(),
            TemplateDescriptor::builder("Basic", "basic")
                .variant("VB")
                .build()
                .unwrap(),
        ])
        .unwrap()
    }

    fn resolve_tokens<'c>(
        tokens: &[&str],
        catalog: &'c Catalog,
    ) -> (Result<Outcome<'c>, ResolveError>, ResolutionContext) {
        let mut ctx = ResolutionContext::new(tokens.iter().copied());
        let result = resolve(&mut ctx, catalog, &ResolverConfig::default());
        (result, ctx)
    }

    #[test]
    fn test_no_selector_is_generic() {
        let catalog = catalog();
        assert_eq!(resolve_tokens(&["-h"], &catalog).0, Ok(Outcome::Generic));
        assert_eq!(resolve_tokens(&[], &catalog).0, Ok(Outcome::Generic));
    }

    #[test]
    fn test_resolves_template_and_consumes_everything() {
        let catalog = catalog();
        let (result, ctx) = resolve_tokens(&["console", "--help", "--framework", "net7.0"], &catalog);
        match result {
            Ok(Outcome::Template(resolution)) => {
                assert_eq!(resolution.template.full_name(), "Console App");
                assert_eq!(resolution.parameters.get("--framework"), Some("net7.0"));
            }
            other => panic!("expected template, got {:?}", other),
        }
        assert!(ctx.remaining().is_empty());
        assert_eq!(ctx.consumed(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_partial_name_fails_with_suggestion() {
        let catalog = catalog();
        let (result, _) = resolve_tokens(&["cons", "-h"], &catalog);
        assert_eq!(
            result,
            Err(ResolveError::SelectorNotFound {
                selector: "cons".to_string(),
                variant: None,
                index: 0,
                suggestions: vec!["console".to_string()],
            })
        );
    }

    #[test]
    fn test_ambiguous_group_fails() {
        let catalog = catalog();
        let (result, _) = resolve_tokens(&["basic", "--help"], &catalog);
        assert!(matches!(result, Err(ResolveError::AmbiguousSelector { index: 0, .. })));
    }

    #[test]
    fn test_language_before_selector() {
        let catalog = catalog();
        let (result, ctx) = resolve_tokens(&["--language", "VB", "basic", "-h"], &catalog);
        assert!(matches!(result, Ok(Outcome::Template(r)) if r.template.variant_key() == Some("VB")));
        assert!(ctx.remaining().is_empty());
    }

    #[test]
    fn test_leading_option_is_unknown_parameter() {
        let catalog = catalog();
        let (result, _) = resolve_tokens(&["--do-not-exist", "-h"], &catalog);
        assert_eq!(
            result,
            Err(ResolveError::UnknownParameter {
                parameter: "--do-not-exist".to_string(),
                template: String::new(),
                index: 0,
            })
        );

        let (result, _) = resolve_tokens(&["--framework", "net7.0", "console"], &catalog);
        assert!(matches!(result, Err(ResolveError::UnknownParameter { index: 0, .. })));
    }

    #[test]
    fn test_language_alone_is_generic() {
        let catalog = catalog();
        assert_eq!(resolve_tokens(&["-h", "--language", "F#"], &catalog).0, Ok(Outcome::Generic));
    }

    #[test]
    fn test_language_option_is_not_a_template_parameter() {
        let catalog = catalog();
        let (result, _) = resolve_tokens(&["basic", "--help", "--language", "F#"], &catalog);
        assert!(matches!(result, Ok(Outcome::Template(r)) if r.template.variant_key() == Some("F#")));
    }
}
