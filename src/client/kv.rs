//! ClientKv - the injected local key-value capability, and the liked
//! ledger built on it.

use std::cell::RefCell;
use std::collections::HashMap;

/// A local, per-visitor key-value capability (the localStorage stand-in).
pub trait ClientKv {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory ClientKv for tests and non-browser hosts.
#[derive(Default)]
pub struct MemoryClientKv {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryClientKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientKv for MemoryClientKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Key prefix for per-idea liked flags.
const LIKED_KEY_PREFIX: &str = "atlas-liked-";

/// Per-visitor "have I liked this idea" flags.
///
/// Purely local: this tracks which heart icons render filled, and is
/// entirely decoupled from the server's like counter.
pub struct LikedLedger<K> {
    kv: K,
}

impl<K: ClientKv> LikedLedger<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    fn key(id: &str) -> String {
        format!("{}{}", LIKED_KEY_PREFIX, id)
    }

    /// Has this visitor liked the idea?
    pub fn is_liked(&self, id: &str) -> bool {
        self.kv.get(&Self::key(id)).as_deref() == Some("true")
    }

    /// Record or clear the liked flag for an idea.
    pub fn set_liked(&self, id: &str, liked: bool) {
        let key = Self::key(id);
        if liked {
            self.kv.set(&key, "true");
        } else {
            self.kv.remove(&key);
        }
    }
}
