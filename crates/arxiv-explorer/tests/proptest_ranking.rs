//! Property-based tests for tokenization, query compilation, and ranking.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use arxiv_explorer::models::{Paper, SearchFilters, SortBy};
use arxiv_explorer::{query, ranking, text};

fn paper_from_parts(
    id: String,
    title: String,
    summary: String,
    authors: Vec<String>,
    categories: Vec<String>,
) -> Paper {
    let primary_category =
        categories.first().cloned().unwrap_or_else(|| "Uncategorized".to_string());
    Paper {
        id: format!("http://arxiv.org/abs/{id}"),
        title,
        summary,
        authors,
        published: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        categories,
        primary_category,
        journal_ref: String::new(),
        comments: String::new(),
        doi: String::new(),
    }
}

/// Generate arbitrary Paper structs for testing.
fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[a-z0-9.]{4,12}",                                        // id tail
        "[A-Za-z0-9 -]{0,80}",                                    // title
        "[A-Za-z0-9 .,-]{0,300}",                                 // summary
        proptest::collection::vec("[A-Z][a-z]{2,10}", 0..4),      // authors
        proptest::collection::vec("[a-z]{2,5}\\.[A-Z]{2}", 0..4), // categories
    )
        .prop_map(|(id, title, summary, authors, categories)| {
            paper_from_parts(id, title, summary, authors, categories)
        })
}

proptest! {
    /// Relevance scores always land in [0, 100].
    #[test]
    fn relevance_score_is_bounded(query in ".{0,60}", paper in arb_paper()) {
        let score = ranking::relevance_score(&query, &paper);
        prop_assert!(score <= 100);
    }

    /// An empty or whitespace query scores zero against any paper.
    #[test]
    fn empty_query_scores_zero(paper in arb_paper(), spaces in "[ \t\n]{0,10}") {
        prop_assert_eq!(ranking::relevance_score(&spaces, &paper), 0);
    }

    /// Tokenization is deterministic and never panics on arbitrary input.
    #[test]
    fn tokenize_is_deterministic(input in ".{0,200}") {
        prop_assert_eq!(text::tokenize(&input), text::tokenize(&input));
    }

    /// Every kept token is either long enough, numeric, or hyphenated.
    #[test]
    fn tokens_meet_keep_criteria(input in ".{0,200}") {
        for token in text::tokenize(&input) {
            prop_assert!(
                token.len() > 2
                    || token.chars().any(|c| c.is_ascii_digit())
                    || token.contains('-'),
                "unexpected token {token:?}"
            );
        }
    }

    /// Ranked output is sorted non-increasing by relevance.
    #[test]
    fn rank_papers_sorted(query in ".{0,40}", papers in proptest::collection::vec(arb_paper(), 0..8)) {
        let ranked = ranking::rank_papers(&query, papers);
        prop_assert!(ranked.windows(2).all(|pair| pair[0].relevance >= pair[1].relevance));
    }

    /// The compiler never emits an empty search query.
    #[test]
    fn compiler_never_emits_empty_query(
        free_text in ".{0,60}",
        category in proptest::option::of("[a-z]{2}\\.[A-Z]{2}"),
        year_from in proptest::option::of(1991u16..2030),
        year_to in proptest::option::of(1991u16..2030),
    ) {
        let filters = SearchFilters {
            category,
            year_from,
            year_to,
            ..SearchFilters::default()
        };
        let compiled = query::compile(&free_text, &filters, 0);
        prop_assert!(!compiled.search_query.trim().is_empty());
    }

    /// Relevance mode never issues a catalog sort directive.
    #[test]
    fn relevance_mode_has_no_sort(free_text in ".{0,40}") {
        let filters = SearchFilters { sort_by: SortBy::Relevance, ..SearchFilters::default() };
        prop_assert!(query::compile(&free_text, &filters, 0).sort.is_none());
    }

    /// A paper is never related to itself.
    #[test]
    fn related_papers_excludes_reference(paper in arb_paper()) {
        let related = ranking::related_papers(&paper, std::slice::from_ref(&paper));
        prop_assert!(related.is_empty());
    }

    /// Related output is sorted non-increasing by similarity.
    #[test]
    fn related_papers_sorted(
        reference in arb_paper(),
        candidates in proptest::collection::vec(arb_paper(), 0..8),
    ) {
        let related = ranking::related_papers(&reference, &candidates);
        prop_assert!(related.windows(2).all(|pair| pair[0].similarity >= pair[1].similarity));
    }
}
