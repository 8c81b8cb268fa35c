//! Data models for arXiv Explorer.

mod filters;
mod paper;

pub use filters::{SearchFilters, SortBy};
pub use paper::{Paper, RankedPaper, RelatedPaper};
