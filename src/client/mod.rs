//! Client-side collaborators: local liked-state, optimistic feed sync,
//! post-form validation, and the mailto contact flow.
//!
//! Nothing in this module is server-authoritative. The liked ledger is a
//! per-visitor capability (the browser's local storage, injected as
//! [`ClientKv`]); the feed state applies like/delete changes optimistically
//! and reverts them when the request fails. The client runs on a
//! single-threaded UI event loop, so none of these types need to be thread
//! safe.

mod contact;
mod feed;
mod form;
mod kv;

pub use contact::collaboration_mailto;
pub use feed::FeedState;
pub use form::{PostForm, ValidationError};
pub use kv::{ClientKv, LikedLedger, MemoryClientKv};
