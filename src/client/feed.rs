//! FeedState - optimistic like/delete over a loaded feed.
//!
//! Mirrors the server reconciliation loop: apply the change locally before
//! the request goes out, replace with the server's copy on success, revert
//! on failure. Overlapping like-then-unlike calls from the same client are
//! not ordered; the last response wins.

use crate::idea::Idea;
use crate::repository::LikeAction;

use super::kv::{ClientKv, LikedLedger};

/// Client-side feed with optimistic updates and a local liked ledger.
pub struct FeedState<K> {
    ideas: Vec<Idea>,
    liked: LikedLedger<K>,
}

impl<K: ClientKv> FeedState<K> {
    pub fn new(liked: LikedLedger<K>) -> Self {
        Self {
            ideas: Vec::new(),
            liked,
        }
    }

    /// Replace the feed, e.g. after the initial fetch.
    pub fn set_ideas(&mut self, ideas: Vec<Idea>) {
        self.ideas = ideas;
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Does the heart render filled for this idea?
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.is_liked(id)
    }

    /// Prepend a freshly created idea, as returned by the server.
    pub fn prepend(&mut self, idea: Idea) {
        self.ideas.insert(0, idea);
    }

    /// Optimistically toggle the like state of an idea and return the
    /// action to send to the server.
    pub fn toggle_like(&mut self, id: &str) -> LikeAction {
        let currently_liked = self.liked.is_liked(id);
        let action = if currently_liked {
            LikeAction::Unlike
        } else {
            LikeAction::Like
        };

        self.liked.set_liked(id, !currently_liked);
        self.apply_delta(id, action);
        action
    }

    /// Reconcile with the server's response to a like/unlike.
    pub fn confirm_like(&mut self, updated: Idea) {
        if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == updated.id) {
            *idea = updated;
        }
    }

    /// Revert a failed like/unlike: undo both the counter delta and the
    /// liked flag.
    pub fn revert_like(&mut self, id: &str, action: LikeAction) {
        let undo = match action {
            LikeAction::Like => LikeAction::Unlike,
            LikeAction::Unlike => LikeAction::Like,
        };
        self.apply_delta(id, undo);
        self.liked.set_liked(id, action == LikeAction::Unlike);
    }

    /// Optimistically remove an idea ahead of a delete request. Returns the
    /// removed idea so the caller can decide how to recover on failure.
    pub fn remove(&mut self, id: &str) -> Option<Idea> {
        let index = self.ideas.iter().position(|idea| idea.id == id)?;
        Some(self.ideas.remove(index))
    }

    /// Replace the feed after a failed delete's recovery refetch.
    pub fn restore(&mut self, ideas: Vec<Idea>) {
        self.ideas = ideas;
    }

    fn apply_delta(&mut self, id: &str, action: LikeAction) {
        if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
            idea.likes = match action {
                LikeAction::Like => idea.likes + 1,
                LikeAction::Unlike => idea.likes.saturating_sub(1),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryClientKv;
    use crate::idea::{Category, Founder};
    use chrono::{TimeZone, Utc};

    fn idea(id: &str, likes: u32) -> Idea {
        Idea {
            id: id.into(),
            title: "Idea".into(),
            description: "Description".into(),
            category: Category::Social,
            founder: Founder {
                name: "Ada Lovelace".into(),
                avatar: "AL".into(),
                tagline: "Analyst".into(),
                email: "ada@example.com".into(),
            },
            looking_for: vec!["Designer".into()],
            created_at: Utc.with_ymd_and_hms(2026, 2, 20, 8, 0, 0).unwrap(),
            likes,
        }
    }

    fn feed(ideas: Vec<Idea>) -> FeedState<MemoryClientKv> {
        let mut state = FeedState::new(LikedLedger::new(MemoryClientKv::new()));
        state.set_ideas(ideas);
        state
    }

    #[test]
    fn toggle_applies_optimistic_delta_and_flag() {
        let mut state = feed(vec![idea("a", 5)]);

        let action = state.toggle_like("a");
        assert_eq!(action, LikeAction::Like);
        assert_eq!(state.ideas()[0].likes, 6);
        assert!(state.is_liked("a"));

        let action = state.toggle_like("a");
        assert_eq!(action, LikeAction::Unlike);
        assert_eq!(state.ideas()[0].likes, 5);
        assert!(!state.is_liked("a"));
    }

    #[test]
    fn confirm_replaces_with_server_copy() {
        let mut state = feed(vec![idea("a", 5)]);
        state.toggle_like("a");

        // Server observed other likes in between.
        state.confirm_like(idea("a", 9));
        assert_eq!(state.ideas()[0].likes, 9);
    }

    #[test]
    fn revert_undoes_counter_and_flag() {
        let mut state = feed(vec![idea("a", 5)]);

        let action = state.toggle_like("a");
        state.revert_like("a", action);
        assert_eq!(state.ideas()[0].likes, 5);
        assert!(!state.is_liked("a"));
    }

    #[test]
    fn revert_of_failed_unlike_restores_liked_flag() {
        let mut state = feed(vec![idea("a", 5)]);
        state.toggle_like("a"); // like, confirmed locally

        let action = state.toggle_like("a"); // unlike attempt
        assert_eq!(action, LikeAction::Unlike);

        state.revert_like("a", action);
        assert_eq!(state.ideas()[0].likes, 6);
        assert!(state.is_liked("a"));
    }

    #[test]
    fn optimistic_delta_saturates_at_zero() {
        let mut state = feed(vec![idea("a", 0)]);
        state.liked.set_liked("a", true);

        state.toggle_like("a");
        assert_eq!(state.ideas()[0].likes, 0);
    }

    #[test]
    fn remove_and_restore() {
        let mut state = feed(vec![idea("a", 1), idea("b", 2)]);

        let removed = state.remove("a").unwrap();
        assert_eq!(removed.id, "a");
        assert_eq!(state.ideas().len(), 1);
        assert!(state.remove("a").is_none());

        state.restore(vec![idea("a", 1), idea("b", 2)]);
        assert_eq!(state.ideas().len(), 2);
    }

    #[test]
    fn prepend_puts_new_idea_first() {
        let mut state = feed(vec![idea("a", 1)]);
        state.prepend(idea("b", 0));
        assert_eq!(state.ideas()[0].id, "b");
    }

    #[test]
    fn toggle_on_unknown_id_still_returns_action() {
        let mut state = feed(vec![]);
        let action = state.toggle_like("ghost");
        assert_eq!(action, LikeAction::Like);
        assert!(state.is_liked("ghost"));
    }
}
