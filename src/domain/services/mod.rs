// src/domain/services/mod.rs
mod builder;
mod formatter;
mod resolver;

use crate::config::SlugConfig;
use crate::domain::errors::SlugResult;
use crate::domain::oracle::ExistenceOracle;
use crate::domain::record::FieldAccessor;
use crate::domain::value_objects::ScopeValue;

/// Domain service responsible for producing unique slugs for one entity type.
///
/// Holds the entity's effective [`SlugConfig`]; the record accessor and the
/// existence oracle are supplied fresh for every generation attempt, so the
/// engine keeps no state between calls.
pub struct SlugEngine {
    config: SlugConfig,
}

impl SlugEngine {
    pub fn new(config: SlugConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    /// Produce the final slug for `record`.
    ///
    /// An explicitly set, non-blank target field always wins and is returned
    /// verbatim. An empty base slug (no usable source values) yields an
    /// empty string, not an error. Writing the result back to the record is
    /// the caller's job, as is retrying the whole generate-and-write
    /// sequence when the storage layer rejects the write as a duplicate.
    pub async fn generate(
        &self,
        record: &dyn FieldAccessor,
        oracle: &dyn ExistenceOracle,
    ) -> SlugResult<String> {
        if let Some(existing) = record.get(self.config.target_field()) {
            if !existing.trim().is_empty() {
                tracing::debug!(
                    target_field = %self.config.target_field(),
                    "slug already set, skipping generation"
                );
                return Ok(existing);
            }
        }

        let base = builder::build_base(&self.config, record);
        if base.is_empty() {
            return Ok(base);
        }

        let scope = self.scope_values(record);
        let exclude = record.identity();
        resolver::resolve(&base, &self.config, &scope, exclude.as_ref(), oracle).await
    }

    /// Stored slug when the target field is already set, otherwise the
    /// freshly built base slug. No uniqueness probing happens here.
    pub fn base_slug(&self, record: &dyn FieldAccessor) -> String {
        if let Some(existing) = record.get(self.config.target_field()) {
            if !existing.trim().is_empty() {
                return existing;
            }
        }
        builder::build_base(&self.config, record)
    }

    fn scope_values(&self, record: &dyn FieldAccessor) -> Vec<ScopeValue> {
        self.config
            .scope_fields()
            .iter()
            .map(|field| ScopeValue::new(field.clone(), record.get(field)))
            .collect()
    }
}
