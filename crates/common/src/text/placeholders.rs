//! Placeholder discovery in templates.
//!
//! Lists the names a template expects before it is handed to
//! [`format_named`](super::format_named), using either the default `{name}`
//! syntax or a caller-supplied regular expression.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{TextError, TextResult};

/// Default placeholder syntax: `{word}` where word is one or more word characters.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = r"\{(\w+)\}";

static DEFAULT_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_PLACEHOLDER_PATTERN)
        .expect("DEFAULT_PLACEHOLDER pattern is valid and well-formed")
});

/// Names of `{name}` placeholders in order of appearance.
///
/// Duplicates are kept; use [`unique_placeholders`] to drop them.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::text::placeholders;
///
/// assert_eq!(placeholders("{greeting}, {name}! {}"), vec!["greeting", "name"]);
/// # }
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholders_matching(template, &DEFAULT_PLACEHOLDER)
}

/// Placeholder names matched by a caller-supplied pattern.
///
/// The first capture group is taken as the name; a pattern without groups
/// yields the whole match.
///
/// # Errors
///
/// Returns [`TextError::InvalidPattern`] if `pattern` does not compile.
pub fn placeholders_with<'t>(template: &'t str, pattern: &str) -> TextResult<Vec<&'t str>> {
    let regex = Regex::new(pattern).map_err(|err| TextError::InvalidPattern {
        pattern: pattern.to_owned(),
        message: err.to_string(),
    })?;
    Ok(placeholders_matching(template, &regex))
}

/// Placeholder names matched by a precompiled pattern.
pub fn placeholders_matching<'t>(template: &'t str, pattern: &Regex) -> Vec<&'t str> {
    pattern
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str())
        .collect()
}

/// Like [`placeholders`], keeping only the first occurrence of each name.
pub fn unique_placeholders(template: &str) -> Vec<&str> {
    let mut seen = Vec::new();
    for name in placeholders(template) {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
