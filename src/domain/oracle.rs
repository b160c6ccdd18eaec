// src/domain/oracle.rs
use async_trait::async_trait;

use crate::domain::errors::SlugResult;
use crate::domain::value_objects::{RecordIdentity, ScopeValue};

/// Storage-side collaborator answering whether a candidate slug is taken.
///
/// Implementations must be pure reads over current storage state. The probe
/// and the host's eventual write are not atomic, so the backing store still
/// needs a uniqueness constraint over (slug, scope) and the host retries
/// generation when that constraint rejects a write as a duplicate.
#[async_trait]
pub trait ExistenceOracle: Send + Sync {
    /// `true` when `candidate` already exists for the given scope values,
    /// ignoring the excluded record. A storage failure aborts generation;
    /// it is never interpreted as "no conflict".
    async fn exists(
        &self,
        candidate: &str,
        scope: &[ScopeValue],
        exclude: Option<&RecordIdentity>,
    ) -> SlugResult<bool>;
}
