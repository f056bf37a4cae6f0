//! atlas-board - a key-value-backed startup idea board.
//!
//! Founders post ideas, browse and search a feed, like ideas, and reach out
//! via a mailto contact flow. The core is the [`IdeaRepository`], which
//! presents one contract over two interchangeable storage layouts (one
//! record per idea, or a single list blob) against any [`RecordStore`]
//! backend. There is no authentication and no transactional isolation:
//! multi-step writes are last-write-wins by design, optionally tightened by
//! a backend's conditional writes.

pub mod client;
#[cfg(feature = "http")]
pub mod http;
mod idea;
mod query;
mod repository;
mod seed;
mod store;

pub use idea::{initials, Category, Founder, Idea, IdeaInput, LOOKING_FOR_OPTIONS};
pub use query::{matches_search, sort_ideas, CategoryFilter, FeedQuery, SortBy};
pub use repository::{
    BlobStorage, IdeaError, IdeaRepository, IdeaStorage, Layout, LikeAction, PerRecordStorage,
    ReplaceOutcome, IDEAS_BLOB_KEY, IDEA_KEY_PREFIX,
};
pub use seed::default_seed;
pub use store::{CasOutcome, InMemoryRecordStore, RecordStore, StoreError};
