//! Text preprocessing shared by the relevance scorer and the similarity engine.
//!
//! Pure and deterministic: the same input always yields the same token
//! sequence. Duplicate tokens are preserved because downstream scoring
//! counts frequency.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Articles, prepositions, and the generic academic filler that appears in
/// nearly every abstract.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "we",
        "our", "using", "based", "show", "shows", "shown", "study", "studies", "method", "methods",
        "result", "results", "paper", "research", "propose", "proposed", "approach", "novel",
        "new", "demonstrate", "demonstrates", "demonstrated", "present", "presents", "presented",
        "analyze", "analyzes", "analyzed", "analysis", "experiment", "experiments", "experimental",
        "observe", "observes", "observed", "observation", "observations",
    ]
    .into_iter()
    .collect()
});

/// Everything that is not a word character or whitespace becomes a space.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Normalize text into a sequence of scoring tokens.
///
/// Hyphens between two letters are protected before the punctuation sweep,
/// so hyphenated scientific terms ("graph-based") survive as single tokens.
/// A token is kept when it is longer than two characters and not a stop
/// word, or unconditionally when it contains a digit or a hyphen.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let protected = protect_hyphens(text).to_lowercase();
    let cleaned = NON_WORD.replace_all(&protected, " ");

    cleaned
        .split_whitespace()
        .map(|term| term.replace('_', "-"))
        .filter(|term| keep_token(term))
        .collect()
}

/// Substitute intra-word hyphens with an underscore placeholder.
fn protect_hyphens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_letters = c == '-'
            && i > 0
            && chars[i - 1].is_ascii_alphabetic()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_alphabetic());
        out.push(if between_letters { '_' } else { c });
    }
    out
}

fn keep_token(term: &str) -> bool {
    (term.len() > 2 && !STOP_WORDS.contains(term))
        || term.chars().any(|c| c.is_ascii_digit())
        || term.contains('-')
}
