//! Structured search filters supplied alongside the free-text query.

use serde::{Deserialize, Serialize};

/// Catalog sort mode.
///
/// `Relevance` issues no sort directive to the catalog; relevance ordering
/// is produced locally by the scorer after the fetch, because the catalog
/// has no query-aware relevance sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Rank locally by query relevance.
    #[default]
    Relevance,
    /// Catalog order by last-update time, descending.
    LastUpdated,
    /// Catalog order by submission time, descending.
    Submitted,
}

/// Filter set for one search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Restrict to one category code (e.g. "cs.LG").
    #[serde(default)]
    pub category: Option<String>,

    /// Inclusive lower bound on submission year.
    #[serde(default)]
    pub year_from: Option<u16>,

    /// Inclusive upper bound on submission year.
    #[serde(default)]
    pub year_to: Option<u16>,

    /// Scope the free text to titles.
    #[serde(default)]
    pub title: bool,

    /// Scope the free text to abstracts.
    #[serde(default)]
    pub r#abstract: bool,

    /// Scope the free text to author names.
    #[serde(default)]
    pub author: bool,

    /// Scope the free text to journal references.
    #[serde(default)]
    pub journal_ref: bool,

    /// Requested ordering.
    #[serde(default)]
    pub sort_by: SortBy,
}

impl SearchFilters {
    /// True when any field scope is selected.
    #[must_use]
    pub fn has_field_scope(&self) -> bool {
        self.title || self.r#abstract || self.author || self.journal_ref
    }
}
