// src/config.rs
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{SlugError, SlugResult};

/// How a colliding base slug is turned into a unique candidate.
///
/// Unrecognised strategy names fall back to [`ConflictStrategy::Sequence`];
/// that is documented configuration behavior, not a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStrategy {
    /// Append an incrementing counter (`-2`, `-3`, ...).
    #[default]
    Sequence,
    /// Append a freshly drawn lowercase alphanumeric suffix per attempt.
    Random,
}

impl ConflictStrategy {
    fn from_name(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Self::Random,
            _ => Self::Sequence,
        }
    }
}

impl FromStr for ConflictStrategy {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(value))
    }
}

impl<'de> Deserialize<'de> for ConflictStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

fn default_target_field() -> String {
    "slug".into()
}

fn default_separator() -> String {
    "-".into()
}

fn default_random_suffix_length() -> usize {
    4
}

/// Process-wide defaults for slug generation.
///
/// Per-entity settings are merged over these exactly once, at entity-type
/// setup time, via [`SlugConfigBuilder::build_with`]; generation calls never
/// read shared mutable state. Deserializable so hosts can hydrate it from
/// their own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugDefaults {
    pub target_field: String,
    pub separator: String,
    pub conflict_strategy: ConflictStrategy,
    pub sequence_separator: String,
    pub random_suffix_length: usize,
    pub scope_fields: Vec<String>,
    pub field_limits: HashMap<String, usize>,
}

impl Default for SlugDefaults {
    fn default() -> Self {
        Self {
            target_field: default_target_field(),
            separator: default_separator(),
            conflict_strategy: ConflictStrategy::default(),
            sequence_separator: default_separator(),
            random_suffix_length: default_random_suffix_length(),
            scope_fields: Vec::new(),
            field_limits: HashMap::new(),
        }
    }
}

/// Effective, immutable configuration for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    target_field: String,
    source_fields: Vec<String>,
    separator: String,
    conflict_strategy: ConflictStrategy,
    sequence_separator: String,
    random_suffix_length: usize,
    scope_fields: Vec<String>,
    field_limits: HashMap<String, usize>,
}

impl SlugConfig {
    pub fn builder<I, S>(source_fields: I) -> SlugConfigBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SlugConfigBuilder {
            source_fields: source_fields.into_iter().map(Into::into).collect(),
            ..SlugConfigBuilder::default()
        }
    }

    /// Attribute the final slug is written to by the host.
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    /// Source attributes, in the order they contribute to the base slug.
    pub fn source_fields(&self) -> &[String] {
        &self.source_fields
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn conflict_strategy(&self) -> ConflictStrategy {
        self.conflict_strategy
    }

    pub fn sequence_separator(&self) -> &str {
        &self.sequence_separator
    }

    pub fn random_suffix_length(&self) -> usize {
        self.random_suffix_length
    }

    /// Attributes whose values partition the uniqueness space.
    pub fn scope_fields(&self) -> &[String] {
        &self.scope_fields
    }

    /// Maximum character count for one source field, if any was configured
    /// for it (entity-specific limits already merged over global ones).
    pub fn field_limit(&self, field: &str) -> Option<usize> {
        self.field_limits.get(field).copied()
    }
}

/// Per-entity settings awaiting a merge with [`SlugDefaults`].
#[derive(Debug, Clone, Default)]
pub struct SlugConfigBuilder {
    source_fields: Vec<String>,
    target_field: Option<String>,
    separator: Option<String>,
    conflict_strategy: Option<ConflictStrategy>,
    sequence_separator: Option<String>,
    random_suffix_length: Option<usize>,
    scope_fields: Option<Vec<String>>,
    field_limits: HashMap<String, usize>,
}

impl SlugConfigBuilder {
    pub fn with_target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_conflict_strategy(mut self, strategy: ConflictStrategy) -> Self {
        self.conflict_strategy = Some(strategy);
        self
    }

    pub fn with_sequence_separator(mut self, separator: impl Into<String>) -> Self {
        self.sequence_separator = Some(separator.into());
        self
    }

    pub fn with_random_suffix_length(mut self, length: usize) -> Self {
        self.random_suffix_length = Some(length);
        self
    }

    pub fn with_scope_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_field_limit(mut self, field: impl Into<String>, max: usize) -> Self {
        self.field_limits.insert(field.into(), max);
        self
    }

    /// Merge against the built-in defaults.
    pub fn build(self) -> SlugResult<SlugConfig> {
        self.build_with(&SlugDefaults::default())
    }

    /// Merge these per-entity settings over `defaults` into the effective
    /// configuration. Entity settings always win; field limits merge
    /// key-wise with entity entries overriding the global ones.
    pub fn build_with(self, defaults: &SlugDefaults) -> SlugResult<SlugConfig> {
        let mut field_limits = defaults.field_limits.clone();
        field_limits.extend(self.field_limits);

        let config = SlugConfig {
            target_field: self
                .target_field
                .unwrap_or_else(|| defaults.target_field.clone()),
            source_fields: self.source_fields,
            separator: self.separator.unwrap_or_else(|| defaults.separator.clone()),
            conflict_strategy: self.conflict_strategy.unwrap_or(defaults.conflict_strategy),
            sequence_separator: self
                .sequence_separator
                .unwrap_or_else(|| defaults.sequence_separator.clone()),
            random_suffix_length: self
                .random_suffix_length
                .unwrap_or(defaults.random_suffix_length),
            scope_fields: self
                .scope_fields
                .unwrap_or_else(|| defaults.scope_fields.clone()),
            field_limits,
        };

        if config.random_suffix_length == 0 {
            return Err(SlugError::validation(
                "random suffix length must be positive",
            ));
        }
        if let Some((field, _)) = config.field_limits.iter().find(|(_, max)| **max == 0) {
            return Err(SlugError::validation(format!(
                "field limit for {field} must be positive"
            )));
        }

        Ok(config)
    }
}
