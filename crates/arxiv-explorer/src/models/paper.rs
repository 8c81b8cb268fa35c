//! Canonical paper record normalized from the arXiv Atom feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paper normalized from one catalog entry.
///
/// Immutable once normalized. `id` is the canonical abstract-page URL and
/// serves as the identity key; it is unique within one catalog response but
/// may repeat across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Canonical abstract-page URL (e.g. `http://arxiv.org/abs/2301.00001v1`).
    pub id: String,

    /// Paper title; "Untitled" when the source omitted one.
    pub title: String,

    /// Abstract text; empty when the source omitted one.
    pub summary: String,

    /// Author names in source order; `["Unknown Author"]` when the source
    /// supplied none.
    pub authors: Vec<String>,

    /// Submission timestamp; falls back to process time when missing.
    pub published: DateTime<Utc>,

    /// Last-update timestamp; falls back to process time when missing.
    pub updated: DateTime<Utc>,

    /// Category codes in source order, duplicates preserved.
    pub categories: Vec<String>,

    /// First category code, or "Uncategorized".
    pub primary_category: String,

    /// Journal reference; empty means not present.
    pub journal_ref: String,

    /// Author comments; empty means not present.
    pub comments: String,

    /// DOI link; empty means not present.
    pub doi: String,
}

impl Paper {
    /// Derive the PDF URL from the abstract-page URL.
    #[must_use]
    pub fn pdf_link(&self) -> String {
        self.id.replacen("/abs/", "/pdf/", 1)
    }

    /// Get the first author's name if any real author was listed.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Check whether the source supplied a DOI link.
    #[must_use]
    pub fn has_doi(&self) -> bool {
        !self.doi.is_empty()
    }

    /// Check whether the source supplied a journal reference.
    #[must_use]
    pub fn has_journal_ref(&self) -> bool {
        !self.journal_ref.is_empty()
    }
}

/// A paper annotated with its relevance to a search query.
///
/// Relevance is bounded to `[0, 100]` but only ranks papers within one
/// result set; it is not calibrated across queries.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPaper {
    /// The underlying paper.
    #[serde(flatten)]
    pub paper: Paper,

    /// Query-relevance score, 0-100.
    pub relevance: u8,
}

/// A paper annotated with its similarity to a reference paper.
///
/// Similarity is unbounded above: the category and author overlap boosts
/// are multiplicative, so scores past 100 are normal for close matches.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedPaper {
    /// The underlying paper.
    #[serde(flatten)]
    pub paper: Paper,

    /// Pairwise similarity score, unbounded non-negative.
    pub similarity: u32,
}
