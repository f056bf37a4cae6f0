//! Feed queries - pure, stateless filter/search/sort over a loaded feed.
//!
//! These run client-side against the ideas returned by the repository; the
//! server never sees them. All sorts are stable, so ties keep the incoming
//! (newest-first) order.

use serde::{Deserialize, Serialize};

use crate::idea::{Category, Idea};

/// Category filter: everything, or one exact category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, idea: &Idea) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => idea.category == *category,
        }
    }
}

/// Feed ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first, by `created_at`.
    #[default]
    Recent,
    /// Most liked first.
    Popular,
}

/// A complete feed query: category filter, free-text search, sort order.
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortBy,
}

impl FeedQuery {
    /// Apply filter, search, and sort, in that order.
    pub fn apply(&self, ideas: &[Idea]) -> Vec<Idea> {
        let mut result: Vec<Idea> = ideas
            .iter()
            .filter(|idea| self.category.matches(idea))
            .filter(|idea| matches_search(idea, &self.search))
            .cloned()
            .collect();
        sort_ideas(&mut result, self.sort);
        result
    }
}

/// Case-insensitive substring match over title, description, founder name,
/// and every looking-for entry. A blank query matches everything.
pub fn matches_search(idea: &Idea, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    idea.title.to_lowercase().contains(&q)
        || idea.description.to_lowercase().contains(&q)
        || idea.founder.name.to_lowercase().contains(&q)
        || idea
            .looking_for
            .iter()
            .any(|role| role.to_lowercase().contains(&q))
}

/// Sort in place; stable under equal keys.
pub fn sort_ideas(ideas: &mut [Idea], sort: SortBy) {
    match sort {
        SortBy::Recent => ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Popular => ideas.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
}
