// crates/yatra-core/src/fuzzy.rs
//! # Fuzzy Question Matching
//!
//! Scores free text against known questions and resolves the best one to
//! its answer.
//!
//! All scores are integers in `0..=100`. Both sides are first folded with
//! [`fold_words`] (ASCII transliteration, lowercase, punctuation removed),
//! then [`similarity`] takes the best of three measures:
//!
//! - [`ratio`]: character-level indel similarity, `2·LCS / (|a| + |b|)`
//! - [`token_sort_ratio`]: `ratio` after sorting each side's words
//! - [`token_set_ratio`]: `ratio` over shared and leftover word sets
//!
//! Inside [`similarity`] the word-set score is scaled down when one text is
//! much longer than the other (`x0.9` from a length ratio of 1.5, `x0.6`
//! beyond 8), so a lone word such as `"is"` no longer matches every
//! question containing it.
//!
//! ```rust
//! use yatra_core::fuzzy::similarity;
//!
//! assert_eq!(similarity("Taj Mahal history", "taj mahal HISTORY?"), 100);
//! assert_eq!(similarity("history Mahal Taj", "Taj Mahal history"), 100);
//! assert_eq!(similarity("abc", "xyz"), 0);
//! ```

use crate::model::{QaPair, QaTable};
use crate::text::fold_words;
use std::collections::{BTreeSet, HashSet};

/// Scores must be strictly greater than this to count as an answer.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Character-level similarity of two strings after folding.
pub fn ratio(a: &str, b: &str) -> u8 {
    ratio_folded(&fold_words(a), &fold_words(b))
}

/// [`ratio`] of both strings with their words sorted alphabetically.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    token_sort_folded(&fold_words(a), &fold_words(b))
}

/// Word-set similarity: the shared words compared against each side's
/// shared + leftover words.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set_folded(&fold_words(a), &fold_words(b))
}

/// Best of [`ratio`], [`token_sort_ratio`] and the length-scaled
/// [`token_set_ratio`].
///
/// Identical texts (ignoring case and punctuation) score 100, and so does
/// any reordering of the same words.
pub fn similarity(a: &str, b: &str) -> u8 {
    score_folded(&fold_words(a), &fold_words(b))
}

/// The highest-scoring choice for `query`, with its score.
///
/// Duplicate choices are scored once. Ties keep the choice seen first.
/// Returns `None` only when `choices` is empty.
pub fn best_match<'a, I>(query: &str, choices: I) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let q = fold_words(query);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut best: Option<(&'a str, u8)> = None;

    for choice in choices {
        if !seen.insert(choice) {
            continue;
        }
        let score = score_folded(&q, &fold_words(choice));
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((choice, score)),
        }
    }
    best
}

/// A resolved answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub score: u8,
}

/// Outcome of [`QaResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// The query was empty or whitespace only.
    NoQuery,
    /// There are no known questions to compare against.
    NoCandidates,
    /// The closest question did not clear the threshold.
    BelowThreshold { best_question: &'a str, score: u8 },
    Answered(Answer<'a>),
}

impl<'a> MatchOutcome<'a> {
    pub fn answer(&self) -> Option<&Answer<'a>> {
        match self {
            MatchOutcome::Answered(a) => Some(a),
            _ => None,
        }
    }
}

/// Resolves free-text questions against a question/answer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaResolver {
    threshold: u8,
}

impl Default for QaResolver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl QaResolver {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Finds the closest known question to `query` and returns its answer
    /// when the score is strictly above the threshold.
    ///
    /// When several pairs share the winning question text, the first pair
    /// in table order supplies the answer.
    pub fn resolve<'a>(&self, query: &str, pairs: &'a [QaPair]) -> MatchOutcome<'a> {
        if query.trim().is_empty() {
            return MatchOutcome::NoQuery;
        }

        let Some((question, score)) = best_match(query, pairs.iter().map(|p| p.question.as_str()))
        else {
            return MatchOutcome::NoCandidates;
        };

        tracing::debug!(query, question, score, "best fuzzy match");

        if score <= self.threshold {
            return MatchOutcome::BelowThreshold {
                best_question: question,
                score,
            };
        }

        match pairs.iter().find(|p| p.question == question) {
            Some(pair) => MatchOutcome::Answered(Answer {
                question: &pair.question,
                answer: &pair.answer,
                score,
            }),
            // `question` was taken from `pairs`, so a pair always exists.
            None => MatchOutcome::NoCandidates,
        }
    }
}

impl QaTable {
    /// [`QaResolver::resolve`] with the default threshold.
    pub fn ask(&self, query: &str) -> MatchOutcome<'_> {
        QaResolver::default().resolve(query, self.pairs())
    }
}

// -----------------------------------------------------------------------------
// SCORING ON FOLDED INPUT
// -----------------------------------------------------------------------------

fn score_folded(a: &str, b: &str) -> u8 {
    let set = f64::from(token_set_folded(a, b)) * length_scale(a, b);
    ratio_folded(a, b)
        .max(token_sort_folded(a, b))
        .max(set.round() as u8)
}

/// Penalty for comparing texts of very different length.
fn length_scale(a: &str, b: &str) -> f64 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    let (short, long) = (la.min(lb), la.max(lb));
    if short == 0 {
        return 1.0;
    }
    match long as f64 / short as f64 {
        r if r < 1.5 => 1.0,
        r if r <= 8.0 => 0.9,
        _ => 0.6,
    }
}

fn ratio_folded(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let common = lcs_len(&a, &b);
    ((200 * common) as f64 / total as f64).round() as u8
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn sorted_words(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

fn token_sort_folded(a: &str, b: &str) -> u8 {
    ratio_folded(&sorted_words(a), &sorted_words(b))
}

fn token_set_folded(a: &str, b: &str) -> u8 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();

    let sect = ta.intersection(&tb).copied().collect::<Vec<_>>().join(" ");
    let join = |rest: Vec<&str>| -> String {
        let rest = rest.join(" ");
        match (sect.is_empty(), rest.is_empty()) {
            (true, _) => rest,
            (_, true) => sect.clone(),
            _ => format!("{sect} {rest}"),
        }
    };
    let with_a = join(ta.difference(&tb).copied().collect());
    let with_b = join(tb.difference(&ta).copied().collect());

    ratio_folded(&sect, &with_a)
        .max(ratio_folded(&sect, &with_b))
        .max(ratio_folded(&with_a, &with_b))
}
