//! Seed content written to an empty store on first read.
//!
//! The board currently ships without launch content, so the default seed is
//! empty; `IdeaRepository::with_seed` injects a custom set (deployments with
//! curated launch ideas, tests). Seeding semantics do not depend on the set
//! being non-empty.

use crate::idea::Idea;

/// The default seed set.
pub fn default_seed() -> Vec<Idea> {
    Vec::new()
}
