// src/domain/record.rs
use std::collections::HashMap;

use crate::domain::value_objects::RecordIdentity;

/// Read-only view of the record being slugged.
///
/// Hosts implement this over whatever attribute storage they have; the
/// engine never learns the record's shape. Writing the generated slug back
/// is the host's responsibility.
pub trait FieldAccessor: Send + Sync {
    /// Current value of the named attribute, or `None` when the record has
    /// no such attribute or it is unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Identity of the record when it already exists in storage, so an
    /// update does not conflict with its own row.
    fn identity(&self) -> Option<RecordIdentity> {
        None
    }
}

impl FieldAccessor for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}
