// src/domain/value_objects.rs
use crate::domain::errors::{SlugError, SlugResult};
use std::fmt;

/// Identity of the record being slugged, used to exclude the record from its
/// own uniqueness probes while it is updated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordIdentity(String);

impl RecordIdentity {
    pub fn new(value: impl Into<String>) -> SlugResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SlugError::validation("record identity cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordIdentity> for String {
    fn from(value: RecordIdentity) -> Self {
        value.0
    }
}

/// One scope field paired with the probed record's value for it. Records
/// whose scope values differ may carry the same slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeValue {
    field: String,
    value: Option<String>,
}

impl ScopeValue {
    pub fn new(field: impl Into<String>, value: Option<String>) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
