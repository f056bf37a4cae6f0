//! IdeaRepository - seeding, feed reads, create, like/unlike, delete.
//!
//! The repository presents one contract over two interchangeable storage
//! layouts (per-record keys or a single list blob), selected at
//! configuration time via [`Layout`].
//!
//! ## Consistency
//!
//! Every mutation is a read-modify-write against a backend with no
//! transactional isolation, so concurrent requests on the same id can lose
//! updates (two readers see `likes = 5`, both write `likes = 6`). That is
//! the accepted base contract for this domain. When the backend offers
//! conditional writes, `like` upgrades to a bounded compare-and-swap retry
//! loop; it falls back to last-write-wins otherwise.

mod layout;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::idea::{Idea, IdeaInput};
use crate::seed;
use crate::store::{RecordStore, StoreError};

pub use layout::{
    BlobStorage, IdeaStorage, PerRecordStorage, ReplaceOutcome, IDEAS_BLOB_KEY, IDEA_KEY_PREFIX,
};

/// How many stale reads `like` tolerates before falling back to a plain
/// overwrite.
const LIKE_CAS_RETRIES: usize = 3;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaError {
    /// No idea with this id exists.
    NotFound { id: String },
    /// The record store failed.
    Store(StoreError),
    /// Stored bytes could not be decoded, or an idea could not be encoded.
    Serde(String),
}

impl fmt::Display for IdeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaError::NotFound { id } => write!(f, "idea not found: {}", id),
            IdeaError::Store(e) => write!(f, "{}", e),
            IdeaError::Serde(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for IdeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdeaError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for IdeaError {
    fn from(err: StoreError) -> Self {
        IdeaError::Store(err)
    }
}

/// Like or unlike, as sent by the client. Defaults to like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    #[default]
    Like,
    Unlike,
}

/// Storage layout, chosen once per deployment.
///
/// Running both layouts against the same backend simultaneously is
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One record per idea under `idea:{id}`.
    PerRecord,
    /// The whole list under the single `ideas` key.
    SingleBlob,
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-record" | "per_record" => Ok(Layout::PerRecord),
            "blob" | "single-blob" | "single_blob" => Ok(Layout::SingleBlob),
            other => Err(format!(
                "unknown layout '{}' (expected 'per-record' or 'blob')",
                other
            )),
        }
    }
}

/// The idea board's core logic over a pluggable storage layout.
pub struct IdeaRepository {
    storage: Box<dyn IdeaStorage>,
    seed: Vec<Idea>,
}

impl IdeaRepository {
    /// Create a repository over `store` with the given layout and the
    /// default seed set.
    pub fn new<S: RecordStore + 'static>(store: S, layout: Layout) -> Self {
        let storage: Box<dyn IdeaStorage> = match layout {
            Layout::PerRecord => Box::new(PerRecordStorage::new(store)),
            Layout::SingleBlob => Box::new(BlobStorage::new(store)),
        };
        Self {
            storage,
            seed: seed::default_seed(),
        }
    }

    /// Shorthand for [`Layout::PerRecord`].
    pub fn per_record<S: RecordStore + 'static>(store: S) -> Self {
        Self::new(store, Layout::PerRecord)
    }

    /// Shorthand for [`Layout::SingleBlob`].
    pub fn single_blob<S: RecordStore + 'static>(store: S) -> Self {
        Self::new(store, Layout::SingleBlob)
    }

    /// Replace the seed set written to an empty store on first read.
    pub fn with_seed(mut self, seed: Vec<Idea>) -> Self {
        self.seed = seed;
        self
    }

    /// All ideas, newest first (stable under equal timestamps).
    ///
    /// An empty store is seeded first and the seed returned, so two
    /// consecutive calls observe the same id set. Two racing first reads
    /// both seed, which is harmless: the seed content is fixed.
    pub fn list_all(&self) -> Result<Vec<Idea>, IdeaError> {
        let mut ideas = if self.storage.is_empty()? {
            self.storage.seed(&self.seed)?;
            self.seed.clone()
        } else {
            self.storage.load_all()?
        };
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ideas)
    }

    /// Create an idea from client input: fresh random id, `created_at` =
    /// now, `likes` = 0.
    pub fn create(&self, input: IdeaInput) -> Result<Idea, IdeaError> {
        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            category: input.category,
            founder: input.founder,
            looking_for: input.looking_for,
            created_at: chrono::Utc::now(),
            likes: 0,
        };
        self.storage.put(&idea)?;
        Ok(idea)
    }

    /// Apply a like or unlike to an idea. Unlike clamps at zero.
    ///
    /// Retries a few times on conditional-write conflicts, then falls back
    /// to the base last-write-wins overwrite.
    pub fn like(&self, id: &str, action: LikeAction) -> Result<Idea, IdeaError> {
        for _ in 0..LIKE_CAS_RETRIES {
            let current = self.load(id)?;
            let updated = liked(&current, action);
            match self.storage.replace(&current, &updated)? {
                ReplaceOutcome::Stored => return Ok(updated),
                ReplaceOutcome::Conflict => continue,
            }
        }

        // Still conflicting after the retries; take the last-write-wins path.
        let current = self.load(id)?;
        let updated = liked(&current, action);
        self.storage.put(&updated)?;
        Ok(updated)
    }

    /// Hard-delete an idea. A second delete of the same id is `NotFound`,
    /// not a no-op: absence surfaces to the caller.
    pub fn delete(&self, id: &str) -> Result<(), IdeaError> {
        if self.storage.remove(id)? {
            Ok(())
        } else {
            Err(IdeaError::NotFound { id: id.to_string() })
        }
    }

    fn load(&self, id: &str) -> Result<Idea, IdeaError> {
        self.storage
            .get(id)?
            .ok_or_else(|| IdeaError::NotFound { id: id.to_string() })
    }
}

fn liked(idea: &Idea, action: LikeAction) -> Idea {
    let likes = match action {
        LikeAction::Like => idea.likes + 1,
        LikeAction::Unlike => idea.likes.saturating_sub(1),
    };
    Idea {
        likes,
        ..idea.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::{Category, Founder};
    use crate::store::InMemoryRecordStore;
    use chrono::{TimeZone, Utc};

    fn input(title: &str) -> IdeaInput {
        IdeaInput {
            title: title.into(),
            description: "A description".into(),
            category: Category::SaaS,
            looking_for: vec!["Co-Founder".into()],
            founder: Founder {
                name: "Ada Lovelace".into(),
                avatar: "AL".into(),
                tagline: "Analyst".into(),
                email: "ada@example.com".into(),
            },
        }
    }

    fn seed_idea(id: &str, hour: u32, likes: u32) -> Idea {
        Idea {
            id: id.into(),
            title: format!("Seed {}", id),
            description: "Seeded".into(),
            category: Category::Other,
            founder: Founder {
                name: "Grace Hopper".into(),
                avatar: "GH".into(),
                tagline: "Compilers".into(),
                email: "grace@example.com".into(),
            },
            looking_for: vec!["Advisor".into()],
            created_at: Utc.with_ymd_and_hms(2026, 2, 19, hour, 0, 0).unwrap(),
            likes,
        }
    }

    fn repos() -> Vec<IdeaRepository> {
        vec![
            IdeaRepository::per_record(InMemoryRecordStore::new()),
            IdeaRepository::single_blob(InMemoryRecordStore::new()),
        ]
    }

    #[test]
    fn create_then_list_contains_idea() {
        for repo in repos() {
            let created = repo.create(input("X")).unwrap();
            assert_eq!(created.likes, 0);
            assert!(!created.id.is_empty());

            let all = repo.list_all().unwrap();
            assert!(all.iter().any(|idea| idea.id == created.id));
        }
    }

    #[test]
    fn created_ids_are_unique() {
        for repo in repos() {
            let a = repo.create(input("A")).unwrap();
            let b = repo.create(input("B")).unwrap();
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn list_is_newest_first() {
        for repo in repos() {
            let repo = repo.with_seed(vec![
                seed_idea("older", 5, 0),
                seed_idea("newest", 12, 0),
                seed_idea("oldest", 1, 0),
            ]);
            let ids: Vec<String> = repo
                .list_all()
                .unwrap()
                .into_iter()
                .map(|idea| idea.id)
                .collect();
            assert_eq!(ids, ["newest", "older", "oldest"]);
        }
    }

    #[test]
    fn like_increments_by_one_each_time() {
        for repo in repos() {
            let created = repo.create(input("X")).unwrap();
            for n in 1..=4 {
                let updated = repo.like(&created.id, LikeAction::Like).unwrap();
                assert_eq!(updated.likes, n);
            }
        }
    }

    #[test]
    fn unlike_clamps_at_zero() {
        for repo in repos() {
            let repo = repo.with_seed(vec![seed_idea("a", 1, 3)]);
            repo.list_all().unwrap();

            for expected in [2, 1, 0] {
                let updated = repo.like("a", LikeAction::Unlike).unwrap();
                assert_eq!(updated.likes, expected);
            }
            // Fourth unlike stays at zero.
            let updated = repo.like("a", LikeAction::Unlike).unwrap();
            assert_eq!(updated.likes, 0);
        }
    }

    #[test]
    fn like_missing_id_is_not_found() {
        for repo in repos() {
            let created = repo.create(input("X")).unwrap();
            let err = repo.like("missing", LikeAction::Like).unwrap_err();
            assert!(matches!(err, IdeaError::NotFound { .. }));

            // Store state untouched.
            let all = repo.list_all().unwrap();
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].likes, created.likes);
        }
    }

    #[test]
    fn delete_removes_and_second_delete_is_not_found() {
        for repo in repos() {
            let created = repo.create(input("X")).unwrap();
            let other = repo.create(input("Y")).unwrap();

            repo.delete(&created.id).unwrap();
            let all = repo.list_all().unwrap();
            assert!(all.iter().all(|idea| idea.id != created.id));
            assert!(all.iter().any(|idea| idea.id == other.id));

            let err = repo.delete(&created.id).unwrap_err();
            assert!(matches!(err, IdeaError::NotFound { .. }));
        }
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        for repo in repos() {
            repo.create(input("X")).unwrap();
            let err = repo.delete("missing").unwrap_err();
            assert!(matches!(err, IdeaError::NotFound { .. }));
            assert_eq!(repo.list_all().unwrap().len(), 1);
        }
    }

    #[test]
    fn empty_store_seeds_exactly_once() {
        for repo in repos() {
            let repo = repo.with_seed(vec![seed_idea("s1", 2, 10), seed_idea("s2", 4, 20)]);

            let first: Vec<String> = repo
                .list_all()
                .unwrap()
                .into_iter()
                .map(|idea| idea.id)
                .collect();
            let second: Vec<String> = repo
                .list_all()
                .unwrap()
                .into_iter()
                .map(|idea| idea.id)
                .collect();
            assert_eq!(first, second);
            assert_eq!(first.len(), 2);
        }
    }

    #[test]
    fn empty_seed_does_not_reseed_after_create() {
        for repo in repos() {
            assert!(repo.list_all().unwrap().is_empty());
            let created = repo.create(input("X")).unwrap();
            let all = repo.list_all().unwrap();
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].id, created.id);
        }
    }

    #[test]
    fn seed_then_create_puts_new_idea_first() {
        for repo in repos() {
            let repo = repo.with_seed(vec![seed_idea("s1", 2, 10)]);

            let seeded = repo.list_all().unwrap();
            assert_eq!(seeded.len(), 1);

            let created = repo.create(input("X")).unwrap();
            assert_eq!(created.likes, 0);

            let all = repo.list_all().unwrap();
            assert_eq!(all.len(), 2);
            assert_eq!(all[0].id, created.id);
            assert_eq!(all[1].id, "s1");
        }
    }

    #[test]
    fn seeded_likes_survive_into_like_flow() {
        for repo in repos() {
            let repo = repo.with_seed(vec![seed_idea("a", 1, 41)]);
            repo.list_all().unwrap();

            let updated = repo.like("a", LikeAction::Like).unwrap();
            assert_eq!(updated.likes, 42);
        }
    }

    #[test]
    fn like_action_wire_format() {
        assert_eq!(serde_json::to_value(LikeAction::Like).unwrap(), "like");
        assert_eq!(serde_json::to_value(LikeAction::Unlike).unwrap(), "unlike");
        let parsed: LikeAction = serde_json::from_str("\"unlike\"").unwrap();
        assert_eq!(parsed, LikeAction::Unlike);
    }

    #[test]
    fn layout_parses_from_config_strings() {
        assert_eq!("per-record".parse::<Layout>().unwrap(), Layout::PerRecord);
        assert_eq!("blob".parse::<Layout>().unwrap(), Layout::SingleBlob);
        assert_eq!("single-blob".parse::<Layout>().unwrap(), Layout::SingleBlob);
        assert!("mongo".parse::<Layout>().is_err());
    }
}
