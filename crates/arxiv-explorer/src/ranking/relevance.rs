//! Query-relevance scoring over normalized papers.

use std::collections::HashMap;

use crate::config::weights;
use crate::models::{Paper, RankedPaper};
use crate::text::tokenize;

/// Score a paper's relevance to a free-text query, on a 0-100 scale.
///
/// An empty or whitespace-only query scores 0. Accumulates weighted
/// matches per query token: exact matches scale with term frequency,
/// partial matches count once per overlapping paper token, and substring
/// hits in the raw title or any category code add fixed boosts.
///
/// The normalization denominator is a loose per-token upper bound (it
/// ignores the unbounded frequency and partial-hit multipliers), so scores
/// rank papers within one result set but are not comparable across
/// queries. Callers display the number as a percentage anyway; changing
/// the bound is a product decision, not a cleanup.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn relevance_score(query: &str, paper: &Paper) -> u8 {
    if query.trim().is_empty() {
        return 0;
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        // Nothing scoreable survived preprocessing (all stop words).
        return 0;
    }

    let paper_tokens = tokenize(&format!("{} {}", paper.title, paper.summary));

    let mut frequencies: HashMap<&str, f64> = HashMap::new();
    for token in &paper_tokens {
        *frequencies.entry(token.as_str()).or_insert(0.0) += 1.0;
    }

    let title = paper.title.to_lowercase();
    let categories: Vec<String> =
        paper.categories.iter().map(|c| c.to_lowercase()).collect();

    let mut score = 0.0;
    for query_token in &query_tokens {
        if let Some(frequency) = frequencies.get(query_token.as_str()) {
            score += weights::EXACT_MATCH * frequency;
        }

        // Independent of the exact pass: a verbatim token also counts here.
        for paper_token in &paper_tokens {
            if paper_token.contains(query_token.as_str())
                || query_token.contains(paper_token.as_str())
            {
                score += weights::PARTIAL_MATCH;
            }
        }

        if title.contains(query_token.as_str()) {
            score += weights::TITLE_BOOST;
        }

        if categories.iter().any(|category| category.contains(query_token.as_str())) {
            score += weights::CATEGORY_BOOST;
        }
    }

    let max_score = query_tokens.len() as f64
        * (weights::EXACT_MATCH
            + weights::TITLE_BOOST
            + weights::CATEGORY_BOOST
            + 2.0 * weights::PARTIAL_MATCH);

    let normalized = (score / max_score * 100.0).round();
    normalized.clamp(0.0, 100.0) as u8
}

/// Annotate papers with their relevance to `query` and sort descending.
///
/// The sort is stable, so ties keep the catalog's order; an empty query
/// leaves everything at score 0 in the original order.
#[must_use]
pub fn rank_papers(query: &str, papers: Vec<Paper>) -> Vec<RankedPaper> {
    let mut ranked: Vec<RankedPaper> = papers
        .into_iter()
        .map(|paper| RankedPaper { relevance: relevance_score(query, &paper), paper })
        .collect();

    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked
}
