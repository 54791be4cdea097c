//! Identity matching of a selector against the catalog

use crate::catalog::{Catalog, TemplateDescriptor};

use super::config::ResolverConfig;

/// Templates whose identity equals the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'c> {
    NoMatch,
    SingleMatch(&'c TemplateDescriptor),
    /// Several templates share the identity; they differ by variant
    GroupMatch(Vec<&'c TemplateDescriptor>),
}

impl<'c> MatchResult<'c> {
    /// All matched templates, in catalog order
    pub fn into_candidates(self) -> Vec<&'c TemplateDescriptor> {
        match self {
            MatchResult::NoMatch => Vec::new(),
            MatchResult::SingleMatch(template) => vec![template],
            MatchResult::GroupMatch(group) => group,
        }
    }
}

/// Match a selector token against every template in the catalog.
///
/// Only whole-token equality counts: a short name compared without regard to
/// case, or the full name compared exactly. Prefixes and substrings never
/// match.
pub fn match_selector<'c>(
    selector: &str,
    catalog: &'c Catalog,
    config: &ResolverConfig,
) -> MatchResult<'c> {
    let mut matched: Vec<&TemplateDescriptor> = catalog
        .templates()
        .iter()
        .filter(|t| {
            t.matches_short_name(selector)
                || (config.full_name_matching && t.matches_full_name(selector))
        })
        .collect();

    match matched.len() {
        0 => MatchResult::NoMatch,
        1 => MatchResult::SingleMatch(matched.remove(0)),
        _ => MatchResult::GroupMatch(matched),
    }
}

/// Short names that start with or contain the selector, for hints.
///
/// Prefix matches come first; duplicates across variants are collapsed.
pub fn suggest(selector: &str, catalog: &Catalog, limit: usize) -> Vec<String> {
    let needle = selector.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let names = catalog.templates().iter().flat_map(|t| t.short_names());
    let mut prefixed: Vec<&String> = Vec::new();
    let mut contained: Vec<&String> = Vec::new();
    for name in names {
        let lower = name.to_lowercase();
        if lower.starts_with(&needle) {
            prefixed.push(name);
        } else if lower.contains(&needle) {
            contained.push(name);
        }
    }

    let mut out: Vec<String> = Vec::new();
    let mut folded: Vec<String> = Vec::new();
    for name in prefixed.into_iter().chain(contained) {
        if out.len() == limit {
            break;
        }
        let lower = name.to_lowercase();
        if !folded.contains(&lower) {
            folded.push(lower);
            out.push(name.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let template = |name: &str, short: &str, variant: &str| {
            TemplateDescriptor::builder(name, short)
                .variant(variant)
                .build()
                .unwrap()
        };
        Catalog::new(vec![
            template("Console App", "console", "C#"),
            template("Class Library", "classlib", "C#"),
            template("Class Library", "classlib", "F#"),
            template("Razor Class Library", "razorclasslib", "C#"),
        ])
        .unwrap()
    }

    #[test]
    fn test_short_name_single_match() {
        let catalog = catalog();
        let result = match_selector("console", &catalog, &ResolverConfig::default());
        assert!(matches!(result, MatchResult::SingleMatch(t) if t.full_name() == "Console App"));
    }

    #[test]
    fn test_short_name_is_case_insensitive() {
        let catalog = catalog();
        let result = match_selector("Console", &catalog, &ResolverConfig::default());
        assert!(matches!(result, MatchResult::SingleMatch(_)));
    }

    #[test]
    fn test_prefix_does_not_match() {
        let catalog = catalog();
        assert_eq!(
            match_selector("class", &catalog, &ResolverConfig::default()),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_group_match() {
        let catalog = catalog();
        match match_selector("classlib", &catalog, &ResolverConfig::default()) {
            MatchResult::GroupMatch(group) => {
                let variants: Vec<_> = group.iter().map(|t| t.variant_key()).collect();
                assert_eq!(variants, vec![Some("C#"), Some("F#")]);
            }
            other => panic!("expected group match, got {:?}", other),
        }
    }

    #[test]
    fn test_full_name_match() {
        let catalog = catalog();
        let config = ResolverConfig::default();
        assert!(matches!(
            match_selector("Console App", &catalog, &config),
            MatchResult::SingleMatch(_)
        ));
        assert_eq!(
            match_selector("console app", &catalog, &config),
            MatchResult::NoMatch
        );
        assert_eq!(
            match_selector("Console Ap", &catalog, &config),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_full_name_matching_disabled() {
        let catalog = catalog();
        let config = ResolverConfig::default().with_full_name_matching(false);
        assert_eq!(
            match_selector("Console App", &catalog, &config),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_suggestions_prefer_prefix() {
        let catalog = catalog();
        assert_eq!(
            suggest("class", &catalog, 3),
            vec!["classlib".to_string(), "razorclasslib".to_string()]
        );
        assert_eq!(suggest("class", &catalog, 1), vec!["classlib".to_string()]);
        assert!(suggest("zzz", &catalog, 3).is_empty());
    }

    #[test]
    fn test_suggestions_fold_non_ascii_case() {
        let catalog = Catalog::new(vec![
            TemplateDescriptor::builder("Über App", "Über")
                .variant("C#")
                .build()
                .unwrap(),
            TemplateDescriptor::builder("Über App", "über")
                .variant("F#")
                .build()
                .unwrap(),
        ])
        .unwrap();
        assert_eq!(suggest("üb", &catalog, 3), vec!["Über".to_string()]);
    }
}
