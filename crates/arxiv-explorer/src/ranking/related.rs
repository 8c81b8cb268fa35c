//! Related-paper similarity over a locally held candidate set.

use std::collections::HashSet;

use crate::models::{Paper, RelatedPaper};
use crate::text::tokenize;

/// Rank `candidates` by content similarity to `reference`, most similar
/// first. The reference itself is excluded by id.
///
/// Similarity is Jaccard overlap between the two papers' token *sets*
/// (multiplicity collapses here, unlike relevance scoring), multiplied by
/// category- and author-overlap boosts. The boosts are multiplicative, so
/// the score is unbounded above.
#[must_use]
pub fn related_papers(reference: &Paper, candidates: &[Paper]) -> Vec<RelatedPaper> {
    let reference_tokens = token_set(reference);

    let mut related: Vec<RelatedPaper> = candidates
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| {
            let candidate_tokens = token_set(candidate);
            let similarity = jaccard(&reference_tokens, &candidate_tokens)
                * overlap_boost(&reference.categories, &candidate.categories)
                * overlap_boost(&reference.authors, &candidate.authors);

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let score = (similarity * 100.0).round() as u32;
            RelatedPaper { paper: candidate.clone(), similarity: score }
        })
        .collect();

    // Stable sort keeps candidate order for equal scores.
    related.sort_by(|a, b| b.similarity.cmp(&a.similarity));
    related
}

/// Token set over title, summary, and category codes.
fn token_set(paper: &Paper) -> HashSet<String> {
    let text = format!("{} {} {}", paper.title, paper.summary, paper.categories.join(" "));
    tokenize(&text).into_iter().collect()
}

#[allow(clippy::cast_precision_loss)]
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// `1 + shared / max(len, len)`; no boost when both sides are empty.
#[allow(clippy::cast_precision_loss)]
fn overlap_boost(a: &[String], b: &[String]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    let shared = a.iter().filter(|item| b.contains(item)).count();
    1.0 + shared as f64 / longest as f64
}
