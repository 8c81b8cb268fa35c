//! Query compilation: free text plus filters into arXiv's boolean query syntax.
//!
//! Compilation never fails; with nothing to say it falls back to the
//! wildcard `all:*` query, so the catalog never receives an empty
//! `search_query`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::api;
use crate::models::{SearchFilters, SortBy};

/// Free text keeps word characters, hyphens, and whitespace; the rest is
/// stripped before the clause is built.
static QUERY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// A compiled catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    /// Boolean query string in arXiv syntax; never empty.
    pub search_query: String,

    /// Zero-based result offset.
    pub start: usize,

    /// Page size.
    pub max_results: usize,

    /// Explicit catalog sort, if any.
    pub sort: Option<SortDirective>,
}

/// Catalog-native sort parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    /// `sortBy` query value.
    pub sort_by: &'static str,

    /// `sortOrder` query value.
    pub sort_order: &'static str,
}

impl CompiledQuery {
    /// Render the request as HTTP query pairs.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("start".to_string(), self.start.to_string()),
            ("max_results".to_string(), self.max_results.to_string()),
            ("search_query".to_string(), self.search_query.clone()),
        ];

        if let Some(sort) = self.sort {
            params.push(("sortBy".to_string(), sort.sort_by.to_string()));
            params.push(("sortOrder".to_string(), sort.sort_order.to_string()));
        }

        params
    }
}

/// Compile a free-text query and filter set into a catalog request for the
/// given zero-based page.
#[must_use]
pub fn compile(free_text: &str, filters: &SearchFilters, page: usize) -> CompiledQuery {
    let mut clauses: Vec<String> = Vec::new();

    let clean = QUERY_CHARS.replace_all(free_text, "");
    let clean = clean.trim();
    if !clean.is_empty() {
        let mut field_clauses: Vec<String> = Vec::new();
        if filters.title {
            field_clauses.push(format!("ti:\"{clean}\""));
        }
        if filters.r#abstract {
            field_clauses.push(format!("abs:\"{clean}\""));
        }
        if filters.author {
            field_clauses.push(format!("au:\"{clean}\""));
        }
        if filters.journal_ref {
            field_clauses.push(format!("jr:\"{clean}\""));
        }

        if field_clauses.is_empty() {
            clauses.push(format!("all:\"{clean}\""));
        } else {
            clauses.push(format!("({})", field_clauses.join(" OR ")));
        }
    }

    if let Some(category) = filters.category.as_deref().filter(|c| !c.is_empty()) {
        clauses.push(format!("cat:{category}"));
    }

    if filters.year_from.is_some() || filters.year_to.is_some() {
        let from = filters
            .year_from
            .map_or_else(|| api::EARLIEST_SUBMITTED.to_string(), |year| format!("{year:04}0101"));
        let to = filters
            .year_to
            .map_or_else(|| api::LATEST_SUBMITTED.to_string(), |year| format!("{year:04}1231"));
        clauses.push(format!("submittedDate:[{from} TO {to}]"));
    }

    let search_query =
        if clauses.is_empty() { "all:*".to_string() } else { clauses.join(" AND ") };

    CompiledQuery {
        search_query,
        start: page * api::PAGE_SIZE,
        max_results: api::PAGE_SIZE,
        sort: sort_directive(filters.sort_by),
    }
}

fn sort_directive(sort_by: SortBy) -> Option<SortDirective> {
    match sort_by {
        // Relevance ordering happens locally after the fetch.
        SortBy::Relevance => None,
        SortBy::LastUpdated => {
            Some(SortDirective { sort_by: "lastUpdatedDate", sort_order: "descending" })
        }
        SortBy::Submitted => {
            Some(SortDirective { sort_by: "submittedDate", sort_order: "descending" })
        }
    }
}
