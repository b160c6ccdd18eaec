// src/domain/services/builder.rs
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::config::SlugConfig;
use crate::domain::record::FieldAccessor;
use crate::domain::services::formatter;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Build the non-unique base slug: format every source field in configured
/// order, drop the fragments that came back empty, join the survivors with
/// a single space and parameterize the result. Zero surviving fragments
/// yield an empty base.
pub(crate) fn build_base(config: &SlugConfig, record: &dyn FieldAccessor) -> String {
    let fragments: Vec<String> = config
        .source_fields()
        .iter()
        .filter_map(|field| {
            record
                .get(field)
                .map(|raw| formatter::format_field(&raw, field, config))
        })
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        return String::new();
    }

    parameterize(&fragments.join(" "), config.separator())
}

/// Lowercase `text`, replace every run of non-alphanumeric characters with
/// `separator`, and strip separators from both ends. This transform is the
/// sole authority on which characters are legal in a slug.
pub(crate) fn parameterize(text: &str, separator: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = NON_ALPHANUMERIC_RUN.replace_all(&lowered, NoExpand(separator));

    let mut slug = replaced.as_ref();
    if !separator.is_empty() {
        while let Some(rest) = slug.strip_prefix(separator) {
            slug = rest;
        }
        while let Some(rest) = slug.strip_suffix(separator) {
            slug = rest;
        }
    }
    slug.to_owned()
}
