// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use slugmint::{
    ExistenceOracle, FieldAccessor, RecordIdentity, ScopeValue, SlugError, SlugResult,
};

/// Record mock backed by a plain field map, with an optional persisted
/// identity.
pub struct TaskRecord {
    fields: HashMap<String, String>,
    identity: Option<RecordIdentity>,
}

impl TaskRecord {
    pub fn new(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            identity: None,
        }
    }

    pub fn persisted(mut self, identity: &str) -> Self {
        self.identity = Some(RecordIdentity::new(identity).unwrap());
        self
    }
}

impl FieldAccessor for TaskRecord {
    fn get(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn identity(&self) -> Option<RecordIdentity> {
        self.identity.clone()
    }
}

struct SlugRow {
    identity: Option<RecordIdentity>,
    slug: String,
    scope: HashMap<String, Option<String>>,
}

/// In-memory existence oracle standing in for the storage layer.
#[derive(Default)]
pub struct InMemoryOracle {
    rows: Mutex<Vec<SlugRow>>,
}

impl InMemoryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stored slug, as the host would after a successful write.
    pub fn insert(&self, slug: &str, scope: &[ScopeValue], identity: Option<&RecordIdentity>) {
        self.rows.lock().unwrap().push(SlugRow {
            identity: identity.cloned(),
            slug: slug.to_string(),
            scope: scope
                .iter()
                .map(|sv| (sv.field().to_string(), sv.value().map(String::from)))
                .collect(),
        });
    }
}

#[async_trait]
impl ExistenceOracle for InMemoryOracle {
    async fn exists(
        &self,
        candidate: &str,
        scope: &[ScopeValue],
        exclude: Option<&RecordIdentity>,
    ) -> SlugResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|row| {
            row.slug == candidate
                && scope
                    .iter()
                    .all(|sv| row.scope.get(sv.field()).map(|v| v.as_deref()) == Some(sv.value()))
                && match (exclude, &row.identity) {
                    (Some(excluded), Some(own)) => excluded != own,
                    _ => true,
                }
        }))
    }
}

/// Oracle whose backing store is unreachable.
pub struct UnreachableOracle;

#[async_trait]
impl ExistenceOracle for UnreachableOracle {
    async fn exists(
        &self,
        _candidate: &str,
        _scope: &[ScopeValue],
        _exclude: Option<&RecordIdentity>,
    ) -> SlugResult<bool> {
        Err(SlugError::storage("backing store unreachable"))
    }
}
