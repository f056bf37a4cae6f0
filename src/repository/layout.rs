//! Storage layouts - the pluggable port between the repository and the
//! record store.
//!
//! Two interchangeable layouts persist the same entity set:
//!
//! - [`PerRecordStorage`]: one record per idea under `idea:{id}`, enumerated
//!   by prefix scan.
//! - [`BlobStorage`]: a single `ideas` key holding a JSON array, fully
//!   rewritten on every mutation.
//!
//! Exactly one layout is active per deployment; mixing both against the same
//! backend is undefined.

use crate::idea::Idea;
use crate::store::{CasOutcome, RecordStore};

use super::IdeaError;

/// Key prefix for per-record idea entries.
pub const IDEA_KEY_PREFIX: &str = "idea:";

/// Key holding the full idea list in the single-blob layout.
pub const IDEAS_BLOB_KEY: &str = "ideas";

/// Result of a conditional [`IdeaStorage::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The new value was written.
    Stored,
    /// The stored value no longer matched `old`; nothing was written.
    Conflict,
}

/// Abstract idea persistence over a [`RecordStore`].
///
/// Implementations translate whole-idea operations into key-value traffic.
/// None of the multi-step operations are atomic unless the backend offers
/// conditional writes; interleavings between concurrent callers are
/// last-write-wins.
pub trait IdeaStorage: Send + Sync {
    /// True if the store holds no ideas at all (no prefixed keys / blob
    /// absent). Drives one-time seeding.
    fn is_empty(&self) -> Result<bool, IdeaError>;

    /// Load every stored idea, in no particular order.
    fn load_all(&self) -> Result<Vec<Idea>, IdeaError>;

    /// Load one idea by id.
    fn get(&self, id: &str) -> Result<Option<Idea>, IdeaError>;

    /// Insert or overwrite one idea.
    fn put(&self, idea: &Idea) -> Result<(), IdeaError>;

    /// Replace `old` with `new`, conditionally where the backend supports
    /// it. Backends without conditional writes perform a plain overwrite
    /// and report `Stored`.
    fn replace(&self, old: &Idea, new: &Idea) -> Result<ReplaceOutcome, IdeaError>;

    /// Remove one idea by id. Returns whether it existed.
    fn remove(&self, id: &str) -> Result<bool, IdeaError>;

    /// Write the seed set into the store.
    fn seed(&self, ideas: &[Idea]) -> Result<(), IdeaError>;
}

fn encode(idea: &Idea) -> Result<Vec<u8>, IdeaError> {
    serde_json::to_vec(idea).map_err(|e| IdeaError::Serde(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Idea, IdeaError> {
    serde_json::from_slice(bytes).map_err(|e| IdeaError::Serde(e.to_string()))
}

/// Layout (A): one record per idea under a prefixed key.
pub struct PerRecordStorage<S> {
    store: S,
}

impl<S: RecordStore> PerRecordStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(id: &str) -> String {
        format!("{}{}", IDEA_KEY_PREFIX, id)
    }
}

impl<S: RecordStore> IdeaStorage for PerRecordStorage<S> {
    fn is_empty(&self) -> Result<bool, IdeaError> {
        Ok(self.store.list(IDEA_KEY_PREFIX)?.is_empty())
    }

    fn load_all(&self) -> Result<Vec<Idea>, IdeaError> {
        let keys = self.store.list(IDEA_KEY_PREFIX)?;
        let mut ideas = Vec::with_capacity(keys.len());
        for key in keys {
            // A key can vanish between the scan and the read (concurrent
            // delete); skip it rather than failing the whole listing.
            if let Some(bytes) = self.store.get(&key)? {
                ideas.push(decode(&bytes)?);
            }
        }
        Ok(ideas)
    }

    fn get(&self, id: &str) -> Result<Option<Idea>, IdeaError> {
        match self.store.get(&Self::key(id))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&self, idea: &Idea) -> Result<(), IdeaError> {
        self.store.put(&Self::key(&idea.id), encode(idea)?)?;
        Ok(())
    }

    fn replace(&self, old: &Idea, new: &Idea) -> Result<ReplaceOutcome, IdeaError> {
        let expected = encode(old)?;
        let key = Self::key(&new.id);
        match self
            .store
            .compare_and_swap(&key, Some(&expected), encode(new)?)?
        {
            CasOutcome::Stored => Ok(ReplaceOutcome::Stored),
            CasOutcome::Conflict => Ok(ReplaceOutcome::Conflict),
            CasOutcome::Unsupported => {
                self.store.put(&key, encode(new)?)?;
                Ok(ReplaceOutcome::Stored)
            }
        }
    }

    fn remove(&self, id: &str) -> Result<bool, IdeaError> {
        let key = Self::key(id);
        // Existence check and delete are two steps; a concurrent delete in
        // between is indistinguishable from success.
        if self.store.get(&key)?.is_none() {
            return Ok(false);
        }
        self.store.delete(&key)?;
        Ok(true)
    }

    fn seed(&self, ideas: &[Idea]) -> Result<(), IdeaError> {
        for idea in ideas {
            self.put(idea)?;
        }
        Ok(())
    }
}

/// Layout (B): the whole list as one JSON array blob.
pub struct BlobStorage<S> {
    store: S,
}

impl<S: RecordStore> BlobStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the raw blob and its parsed form. Absent blob reads as an
    /// empty list with no raw bytes.
    fn read_blob(&self) -> Result<(Option<Vec<u8>>, Vec<Idea>), IdeaError> {
        match self.store.get(IDEAS_BLOB_KEY)? {
            Some(bytes) => {
                let ideas: Vec<Idea> = serde_json::from_slice(&bytes)
                    .map_err(|e| IdeaError::Serde(e.to_string()))?;
                Ok((Some(bytes), ideas))
            }
            None => Ok((None, Vec::new())),
        }
    }

    fn write_blob(&self, ideas: &[Idea]) -> Result<(), IdeaError> {
        let bytes = serde_json::to_vec(ideas).map_err(|e| IdeaError::Serde(e.to_string()))?;
        self.store.put(IDEAS_BLOB_KEY, bytes)?;
        Ok(())
    }
}

impl<S: RecordStore> IdeaStorage for BlobStorage<S> {
    fn is_empty(&self) -> Result<bool, IdeaError> {
        Ok(self.store.get(IDEAS_BLOB_KEY)?.is_none())
    }

    fn load_all(&self) -> Result<Vec<Idea>, IdeaError> {
        let (_, ideas) = self.read_blob()?;
        Ok(ideas)
    }

    fn get(&self, id: &str) -> Result<Option<Idea>, IdeaError> {
        let (_, ideas) = self.read_blob()?;
        Ok(ideas.into_iter().find(|idea| idea.id == id))
    }

    fn put(&self, idea: &Idea) -> Result<(), IdeaError> {
        let (_, mut ideas) = self.read_blob()?;
        match ideas.iter_mut().find(|existing| existing.id == idea.id) {
            Some(existing) => *existing = idea.clone(),
            None => ideas.insert(0, idea.clone()),
        }
        self.write_blob(&ideas)
    }

    fn replace(&self, old: &Idea, new: &Idea) -> Result<ReplaceOutcome, IdeaError> {
        let (raw, mut ideas) = self.read_blob()?;
        let Some(slot) = ideas.iter_mut().find(|idea| idea.id == new.id) else {
            return Ok(ReplaceOutcome::Conflict);
        };
        if *slot != *old {
            return Ok(ReplaceOutcome::Conflict);
        }
        *slot = new.clone();

        let bytes = serde_json::to_vec(&ideas).map_err(|e| IdeaError::Serde(e.to_string()))?;
        match self
            .store
            .compare_and_swap(IDEAS_BLOB_KEY, raw.as_deref(), bytes.clone())?
        {
            CasOutcome::Stored => Ok(ReplaceOutcome::Stored),
            CasOutcome::Conflict => Ok(ReplaceOutcome::Conflict),
            CasOutcome::Unsupported => {
                self.store.put(IDEAS_BLOB_KEY, bytes)?;
                Ok(ReplaceOutcome::Stored)
            }
        }
    }

    fn remove(&self, id: &str) -> Result<bool, IdeaError> {
        let (_, mut ideas) = self.read_blob()?;
        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);
        if ideas.len() == before {
            return Ok(false);
        }
        self.write_blob(&ideas)?;
        Ok(true)
    }

    fn seed(&self, ideas: &[Idea]) -> Result<(), IdeaError> {
        self.write_blob(ideas)
    }
}
