//! Character-to-segment tokenization.
//!
//! The tokenizer scans the input one character at a time and grows a single
//! candidate token, attaching any following whitespace to it as trailing
//! whitespace. Token-body characters accumulate as long as the run continues;
//! delimiter characters accumulate only while the grammar's merge predicate
//! allows the pair, which is how multi-character operators and comment
//! markers (`//`, `->`, `?.`) become single tokens.
//!
//! Each finished segment carries an immutable snapshot of the running
//! history (all tokens, per-token counts, tokens on the current line) taken
//! when the segment started, so rules can re-derive everything from the
//! segment alone. A two-slot buffer delays each segment by one step so that
//! its `next` token is known before it is yielded.

use std::collections::HashMap;
use std::str::CharIndices;

use crate::grammar::Grammar;
use crate::tokenizing::{Segment, Tokens};

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentKind {
    Token,
    Delimiter,
    Whitespace,
    Newline,
}

/// Iterate the segments of `code`, as tokenized under `grammar`.
pub(crate) fn segments<'a>(code: &'a str, grammar: &'a dyn Grammar) -> Segments<'a> {
    Segments {
        raw: RawSegments::new(code, grammar),
        lookahead: None,
    }
}

/// Segment iterator with one segment of lookahead, so that every yielded
/// segment knows the token that follows it. The final segment of the input
/// has `next = None`.
pub(crate) struct Segments<'a> {
    raw: RawSegments<'a>,
    lookahead: Option<Segment<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let mut segment = match self.lookahead.take() {
            Some(segment) => segment,
            None => self.raw.next_segment()?,
        };

        self.lookahead = self.raw.next_segment();
        segment.tokens.next = self
            .lookahead
            .as_ref()
            .map(|lookahead| lookahead.tokens.current.clone());

        Some(segment)
    }
}

/// Produces segments in input order, without lookahead, while maintaining
/// the running token history.
struct RawSegments<'a> {
    code: &'a str,
    grammar: &'a dyn Grammar,
    chars: CharIndices<'a>,
    token_counts: HashMap<String, usize>,
    all_tokens: Vec<String>,
    line_tokens: Vec<String>,
    previous_token: Option<String>,
    building: Option<Segment<'a>>,
}

impl<'a> RawSegments<'a> {
    fn new(code: &'a str, grammar: &'a dyn Grammar) -> Self {
        RawSegments {
            code,
            grammar,
            chars: code.char_indices(),
            token_counts: HashMap::new(),
            all_tokens: Vec::new(),
            line_tokens: Vec::new(),
            previous_token: None,
            building: None,
        }
    }

    fn next_segment(&mut self) -> Option<Segment<'a>> {
        loop {
            let Some((index, character)) = self.chars.next() else {
                // End of input flushes whatever was being built.
                return self.building.take();
            };

            match self.classify(character) {
                kind @ (ComponentKind::Token | ComponentKind::Delimiter) => {
                    let is_delimiter = kind == ComponentKind::Delimiter;

                    let Some(mut building) = self.building.take() else {
                        self.building = Some(self.start_segment(
                            index,
                            character.to_string(),
                            is_delimiter,
                        ));
                        continue;
                    };

                    if self.splits_current_token(&building, character, is_delimiter) {
                        return Some(self.finish(building, index, character, is_delimiter));
                    }

                    building.tokens.current.push(character);
                    self.building = Some(building);
                }
                kind @ (ComponentKind::Whitespace | ComponentKind::Newline) => {
                    let is_newline = kind == ComponentKind::Newline;

                    if let Some(building) = self.building.as_mut() {
                        match building.trailing_whitespace.as_mut() {
                            Some(whitespace) => whitespace.push(character),
                            None => {
                                building.trailing_whitespace = Some(character.to_string());
                            }
                        }

                        if is_newline {
                            building.is_last_on_line = true;
                        }
                    } else {
                        // Whitespace before any token opens a segment with an
                        // empty current token; the highlighter forwards its
                        // whitespace without classifying it.
                        let mut segment = self.start_segment(index, String::new(), false);
                        segment.trailing_whitespace = Some(character.to_string());
                        segment.is_last_on_line = is_newline;
                        self.building = Some(segment);
                    }
                }
            }
        }
    }

    fn classify(&self, character: char) -> ComponentKind {
        if is_newline(character) {
            ComponentKind::Newline
        } else if character.is_whitespace() {
            ComponentKind::Whitespace
        } else if self.grammar.is_delimiter(character) {
            ComponentKind::Delimiter
        } else {
            ComponentKind::Token
        }
    }

    /// Whether the incoming character belongs to a new token rather than the
    /// one currently being built.
    fn splits_current_token(
        &self,
        building: &Segment<'a>,
        character: char,
        is_delimiter: bool,
    ) -> bool {
        // Trailing whitespace always ends a token, as does switching between
        // delimiter and token-body runs. An empty current token only occurs
        // for leading whitespace, which always has trailing whitespace set.
        if building.trailing_whitespace.is_some() {
            return true;
        }

        if is_delimiter != building.is_delimiter_run {
            return true;
        }

        if is_delimiter {
            let Some(previous) = building.tokens.current.chars().last() else {
                return true;
            };

            if !self.grammar.is_delimiter_mergeable(previous, character) {
                return true;
            }
        }

        false
    }

    /// Record the finished segment into the running history and open a new
    /// segment starting with `character`.
    fn finish(
        &mut self,
        finished: Segment<'a>,
        index: usize,
        character: char,
        is_delimiter: bool,
    ) -> Segment<'a> {
        self.record(&finished);
        self.building = Some(self.start_segment(index, character.to_string(), is_delimiter));
        finished
    }

    /// Snapshot the running history into a fresh segment. The snapshot
    /// excludes the new segment's own token, which has not been recorded yet.
    fn start_segment(&self, index: usize, current: String, is_delimiter: bool) -> Segment<'a> {
        Segment {
            prefix: &self.code[..index],
            tokens: Tokens {
                all: self.all_tokens.clone(),
                counts: self.token_counts.clone(),
                on_same_line: self.line_tokens.clone(),
                previous: self.previous_token.clone(),
                current,
                next: None,
            },
            trailing_whitespace: None,
            is_delimiter_run: is_delimiter,
            is_last_on_line: false,
        }
    }

    fn record(&mut self, segment: &Segment<'a>) {
        let token = &segment.tokens.current;

        if !token.is_empty() {
            *self.token_counts.entry(token.clone()).or_insert(0) += 1;
            self.all_tokens.push(token.clone());
        }

        if segment.is_last_on_line {
            self.line_tokens.clear();
        } else if !token.is_empty() {
            self.line_tokens.push(token.clone());
        }

        self.previous_token = if token.is_empty() {
            None
        } else {
            Some(token.clone())
        };
    }
}

/// Whether the character terminates a line. Matches the usual newline set:
/// LF, CR, vertical tab, form feed, NEL and the Unicode line/paragraph
/// separators.
fn is_newline(character: char) -> bool {
    matches!(
        character,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}
