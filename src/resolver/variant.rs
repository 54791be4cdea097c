//! Narrowing a matched group to one template by variant (language)

use tracing::debug;

use crate::catalog::{Catalog, TemplateDescriptor};
use crate::error::{Candidate, ResolveError};

use super::config::ResolverConfig;
use super::tokens::ResolutionContext;

/// A variant-selection value found among the remaining tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelection {
    pub value_index: usize,
    pub value: String,
}

/// Scan the remaining tokens for variant-selection options.
///
/// Runs before the selector is picked, so `--language F# console` and
/// `console --language F#` select the same template. When the option is
/// repeated the last occurrence wins. Every occurrence is consumed. An
/// option with no value token after it is a [`ResolveError::MissingValue`].
pub fn find_variant_selection(
    ctx: &mut ResolutionContext,
    config: &ResolverConfig,
) -> Result<Option<VariantSelection>, ResolveError> {
    let mut selection = None;
    let mut cursor = ctx.cursor();

    while let Some(index) = cursor.next() {
        if !config.is_variant_option(ctx.token(index)) {
            continue;
        }
        let Some(value_index) = cursor.next_value(ctx) else {
            return Err(ResolveError::MissingValue {
                parameter: ctx.token(index).to_string(),
                template: String::new(),
                index,
            });
        };
        ctx.consume(index);
        ctx.consume(value_index);
        selection = Some(VariantSelection {
            value_index,
            value: ctx.token(value_index).to_string(),
        });
    }

    if let Some(sel) = &selection {
        debug!(variant = %sel.value, "variant selection requested");
    }
    Ok(selection)
}

/// Reduce the matched templates to exactly one.
///
/// An explicit variant selection always filters, even a single match; a
/// value matching no candidate is reported as not found. Without one, a
/// group of more than one is ambiguous unless the catalog's preferred
/// variant singles one out.
pub fn disambiguate<'c>(
    selector: &str,
    selector_index: usize,
    candidates: Vec<&'c TemplateDescriptor>,
    selection: Option<VariantSelection>,
    catalog: &Catalog,
) -> Result<&'c TemplateDescriptor, ResolveError> {
    let ambiguous = |candidates: &[&TemplateDescriptor]| ResolveError::AmbiguousSelector {
        selector: selector.to_string(),
        index: selector_index,
        candidates: candidates.iter().map(|t| Candidate::from(*t)).collect(),
    };

    if let Some(selection) = selection {
        let narrowed: Vec<&TemplateDescriptor> = candidates
            .iter()
            .copied()
            .filter(|t| t.matches_variant(&selection.value))
            .collect();

        return match narrowed.as_slice() {
            [only] => Ok(*only),
            [] => Err(ResolveError::SelectorNotFound {
                selector: selector.to_string(),
                variant: Some(selection.value),
                index: selection.value_index,
                suggestions: Vec::new(),
            }),
            many => Err(ambiguous(many)),
        };
    }

    if let [only] = candidates.as_slice() {
        return Ok(*only);
    }

    if let Some(preferred) = catalog.preferred_variant() {
        let narrowed: Vec<&TemplateDescriptor> = candidates
            .iter()
            .copied()
            .filter(|t| t.matches_variant(preferred))
            .collect();
        if let [only] = narrowed.as_slice() {
            debug!(variant = preferred, "group narrowed by preferred variant");
            return Ok(*only);
        }
    }

    Err(ambiguous(candidates.as_slice()))
}
