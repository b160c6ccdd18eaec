// src/domain/services/formatter.rs
use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SlugConfig;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize one raw attribute value into a slug fragment: transliterate to
/// ASCII, trim, apply the per-field length limit, collapse whitespace runs.
/// Blank input comes back as an empty fragment.
///
/// The limit cut happens before whitespace collapsing, so a field capped at
/// N characters never contributes more than N post-transliteration
/// characters to the base slug.
pub(crate) fn format_field(raw: &str, field: &str, config: &SlugConfig) -> String {
    let transliterated = deunicode(raw);
    let trimmed = transliterated.trim();
    let limited: String = match config.field_limit(field) {
        Some(max) => trimmed.chars().take(max).collect(),
        None => trimmed.to_owned(),
    };
    WHITESPACE_RUN.replace_all(&limited, " ").into_owned()
}
