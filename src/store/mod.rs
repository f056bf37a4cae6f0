//! Record store - Abstract key-value storage for the idea board.
//!
//! The backend is a black box: `get`/`put`/`delete`/`list` over opaque byte
//! values, with no atomicity, transactions, or versioning guaranteed. Callers
//! must assume read-then-write is not atomic. Backends that do offer
//! conditional writes can opt in via [`RecordStore::compare_and_swap`]; the
//! default implementation reports [`CasOutcome::Unsupported`].

mod in_memory;

use std::fmt;

/// Abstract key-value storage.
pub trait RecordStore: Send + Sync {
    /// Get the value stored under `key`. Returns `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, overwriting any existing value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// List all keys starting with `prefix`.
    fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Conditionally store `value` under `key` if the current value equals
    /// `expected` (`None` = key must be absent). Backends without
    /// conditional writes report `Unsupported`.
    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&[u8]>,
        value: Vec<u8>,
    ) -> Result<CasOutcome, StoreError> {
        let _ = (key, expected, value);
        Ok(CasOutcome::Unsupported)
    }
}

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// The expected value matched and the new value was stored.
    Stored,
    /// The stored value differed from the expectation; nothing was written.
    Conflict,
    /// The backend has no conditional-write primitive.
    Unsupported,
}

/// Error type for record store operations.
///
/// Backend failures are surfaced, never swallowed: a failing read must not
/// masquerade as an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed (network error, storage fault, poisoned lock).
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "store backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryRecordStore;
