// tests/support/mod.rs
// Mocks shared by multiple integration test binaries. Some symbols are
// unused in individual test crates, which causes dead_code warnings; allow
// those at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
