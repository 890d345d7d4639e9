//! The per-token context record handed to syntax rules.

use std::collections::HashMap;

/// A segment of code, used to determine the type of a given token when passed
/// to a [`SyntaxRule`](crate::SyntaxRule) implementation.
///
/// Segments are produced in strict left-to-right input order. Each one wraps
/// a single candidate token together with everything a lexical rule may look
/// at: the raw input prefix, a one-token window (previous/next), the tokens
/// seen so far on the current line and overall, and per-token occurrence
/// counts.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    /// The code that prefixes this segment, that is, all input up to where
    /// the segment's current token begins.
    pub prefix: &'a str,
    /// The collection of tokens that the segment includes.
    pub tokens: Tokens,
    /// Any whitespace that immediately follows the segment's current token.
    pub trailing_whitespace: Option<String>,
    /// Whether the current token is a run of delimiter characters rather
    /// than token-body characters.
    pub is_delimiter_run: bool,
    /// Whether the current token is the last one before a newline.
    pub is_last_on_line: bool,
}

/// The token window and accumulated history exposed to rules.
///
/// The history fields (`all`, `counts`, `on_same_line`) are snapshots taken
/// when the segment started: they exclude the current token, and
/// `counts[current]` reports occurrences strictly before this segment.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    /// All tokens that have been found so far, excluding the current one.
    pub all: Vec<String>,
    /// The number of times a given token has been found up until this point.
    pub counts: HashMap<String, usize>,
    /// The tokens previously found on the same line as the current one.
    pub on_same_line: Vec<String>,
    /// The token that was previously found (it may be on an earlier line).
    pub previous: Option<String>,
    /// The current token, which is being evaluated.
    pub current: String,
    /// The upcoming token that will follow the current one, known through
    /// one-token lookahead.
    pub next: Option<String>,
}

impl Tokens {
    /// The number of times a given token has been found up until this point.
    /// Convenience API over the `counts` map.
    pub fn count_of(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether an equal number of occurrences have been found of two tokens.
    /// For example, this can be used to check whether a token is encapsulated
    /// by parentheses.
    pub fn contains_balanced_occurrences(&self, token_a: &str, token_b: &str) -> bool {
        self.count_of(token_a) == self.count_of(token_b)
    }

    /// Whether the combined occurrences of the first list of tokens outnumber
    /// those of the second list. For example, this can be used to check
    /// whether a token is inside a comment block.
    pub fn contains_more_occurrences(&self, more: &[&str], than: &[&str]) -> bool {
        let more_count: usize = more.iter().map(|token| self.count_of(token)).sum();
        let than_count: usize = than.iter().map(|token| self.count_of(token)).sum();
        more_count > than_count
    }

    /// Whether the previous token equals any of the given candidates.
    /// Returns `false` when there is no previous token.
    pub fn previous_is_any(&self, candidates: &[&str]) -> bool {
        self.previous
            .as_deref()
            .is_some_and(|previous| candidates.contains(&previous))
    }

    /// Whether the next token equals any of the given candidates.
    /// Returns `false` when there is no next token.
    pub fn next_is_any(&self, candidates: &[&str]) -> bool {
        self.next
            .as_deref()
            .is_some_and(|next| candidates.contains(&next))
    }
}
