// src/lib.rs
//! Collision-free slug generation over host-supplied records and storage.
//!
//! [`SlugEngine`] derives a normalized, URL-safe slug from a record's
//! attribute values and resolves collisions by probing an [`ExistenceOracle`]
//! implemented by the storage layer. Configuration is merged once per entity
//! type from process-wide [`SlugDefaults`] and per-entity overrides; each
//! generation call then sees a consistent immutable snapshot.

pub mod config;
pub mod domain;

pub use config::{ConflictStrategy, SlugConfig, SlugConfigBuilder, SlugDefaults};
pub use domain::errors::{SlugError, SlugResult};
pub use domain::oracle::ExistenceOracle;
pub use domain::record::FieldAccessor;
pub use domain::services::SlugEngine;
pub use domain::value_objects::{RecordIdentity, ScopeValue};
