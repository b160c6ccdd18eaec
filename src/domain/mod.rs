pub mod errors;
pub mod oracle;
pub mod record;
pub mod services;
pub mod value_objects;

pub use errors::{SlugError, SlugResult};
pub use oracle::ExistenceOracle;
pub use record::FieldAccessor;
pub use services::SlugEngine;
pub use value_objects::{RecordIdentity, ScopeValue};
