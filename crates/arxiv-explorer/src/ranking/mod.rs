//! Local re-ranking: query relevance scoring and related-paper similarity.
//!
//! Both engines are pure functions over immutable inputs and never fail;
//! empty queries or candidate sets yield zero scores or empty output.

mod related;
mod relevance;

pub use related::related_papers;
pub use relevance::{rank_papers, relevance_score};
