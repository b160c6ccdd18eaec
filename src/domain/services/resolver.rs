// src/domain/services/resolver.rs
use rand::Rng;

use crate::config::{ConflictStrategy, SlugConfig};
use crate::domain::errors::SlugResult;
use crate::domain::oracle::ExistenceOracle;
use crate::domain::value_objects::{RecordIdentity, ScopeValue};

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Turn a base slug into one the oracle reports as free.
///
/// The probe loop is unbounded; a caller that needs a deadline wraps the
/// returned future externally. Every probe carries the record's scope values
/// and its own identity so an update never conflicts with itself.
pub(crate) async fn resolve(
    base: &str,
    config: &SlugConfig,
    scope: &[ScopeValue],
    exclude: Option<&RecordIdentity>,
    oracle: &dyn ExistenceOracle,
) -> SlugResult<String> {
    if base.is_empty() {
        return Ok(String::new());
    }
    if !oracle.exists(base, scope, exclude).await? {
        return Ok(base.to_owned());
    }

    tracing::debug!(
        %base,
        strategy = ?config.conflict_strategy(),
        "base slug taken, resolving conflict"
    );

    match config.conflict_strategy() {
        ConflictStrategy::Sequence => {
            let mut counter: u64 = 2;
            loop {
                let candidate = format!("{base}{}{counter}", config.sequence_separator());
                if !oracle.exists(&candidate, scope, exclude).await? {
                    return Ok(candidate);
                }
                counter += 1;
            }
        }
        ConflictStrategy::Random => loop {
            let suffix = random_suffix(config.random_suffix_length());
            let candidate = format!("{base}{}{suffix}", config.sequence_separator());
            if !oracle.exists(&candidate, scope, exclude).await? {
                return Ok(candidate);
            }
        },
    }
}

fn random_suffix(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
