//! The main highlighting entry point.

use crate::grammar::{Grammar, SwiftGrammar};
use crate::output::{OutputBuilder, OutputFormat};
use crate::tokenizing::{tokenizer, Segment, TokenType};

/// Highlights code into any output format, using any language grammar.
///
/// The highlighter drives the tokenizer, classifies every segment against
/// the grammar's rules (first match in declaration order wins), merges
/// adjacent tokens that resolve to the same type, and feeds the resulting
/// event stream into a fresh builder obtained from the output format.
///
/// One highlighter may be reused for any number of `highlight` calls; every
/// call starts from fresh tokenizer state. Since grammars and rules are
/// immutable, a highlighter can also be shared across threads.
pub struct SyntaxHighlighter<F: OutputFormat> {
    format: F,
    grammar: Box<dyn Grammar>,
}

impl<F: OutputFormat> SyntaxHighlighter<F> {
    /// Create a highlighter producing the given output format, using the
    /// Swift grammar.
    pub fn new(format: F) -> Self {
        Self::with_grammar(format, SwiftGrammar::new())
    }

    /// Create a highlighter producing the given output format, using a
    /// custom language grammar.
    pub fn with_grammar(format: F, grammar: impl Grammar + 'static) -> Self {
        Self::with_boxed_grammar(format, Box::new(grammar))
    }

    /// Create a highlighter from an already-boxed grammar, for callers that
    /// pick the grammar at runtime.
    pub fn with_boxed_grammar(format: F, grammar: Box<dyn Grammar>) -> Self {
        SyntaxHighlighter { format, grammar }
    }

    /// Highlight the given code, returning output as specified by the
    /// highlighter's format.
    pub fn highlight(&self, code: &str) -> <F::Builder as OutputBuilder>::Output {
        let mut builder = self.format.make_builder();
        let mut pending: Option<(String, Option<TokenType>)> = None;

        for segment in tokenizer::segments(code, self.grammar.as_ref()) {
            // Leading whitespace arrives as a segment with an empty token;
            // forward the whitespace and move on.
            if segment.tokens.current.is_empty() {
                if let Some(whitespace) = &segment.trailing_whitespace {
                    builder.add_whitespace(whitespace);
                }
                continue;
            }

            let token_type = self.classify(&segment);

            // Merge directly adjacent tokens of the same resolved type into
            // one event; a type change flushes the accumulated text first.
            let state = match pending.take() {
                None => (segment.tokens.current.clone(), token_type),
                Some((mut text, pending_type)) => {
                    if pending_type == token_type {
                        text.push_str(&segment.tokens.current);
                        (text, pending_type)
                    } else {
                        emit(&mut builder, &text, &pending_type);
                        (segment.tokens.current.clone(), token_type)
                    }
                }
            };

            // Trailing whitespace always forces a flush: tokens separated by
            // whitespace are never merged into one event, even when their
            // types agree.
            match &segment.trailing_whitespace {
                Some(whitespace) => {
                    emit(&mut builder, &state.0, &state.1);
                    builder.add_whitespace(whitespace);
                }
                None => pending = Some(state),
            }
        }

        if let Some((text, token_type)) = pending {
            emit(&mut builder, &text, &token_type);
        }

        builder.build()
    }

    fn classify(&self, segment: &Segment) -> Option<TokenType> {
        self.grammar
            .syntax_rules()
            .iter()
            .find(|rule| rule.matches(segment))
            .map(|rule| rule.token_type())
    }
}

fn emit<B: OutputBuilder>(builder: &mut B, text: &str, token_type: &Option<TokenType>) {
    match token_type {
        Some(token_type) => builder.add_token(text, token_type),
        None => builder.add_plain_text(text),
    }
}
