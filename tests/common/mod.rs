//! Shared helpers for the highlighter integration tests.
//!
//! Tests assert on the raw event stream produced by the highlighter, using
//! the event-collecting output format. The helpers below keep the expected
//! event lists compact.

#![allow(dead_code)]

use glint::output::EventOutputFormat;
use glint::{HighlightEvent, JavaScriptGrammar, SwiftGrammar, SyntaxHighlighter, TokenType};

/// Highlight `code` with the Swift grammar, returning the raw events.
pub fn swift_events(code: &str) -> Vec<HighlightEvent> {
    SyntaxHighlighter::with_grammar(EventOutputFormat, SwiftGrammar::new()).highlight(code)
}

/// Highlight `code` with the JavaScript grammar, returning the raw events.
pub fn javascript_events(code: &str) -> Vec<HighlightEvent> {
    SyntaxHighlighter::with_grammar(EventOutputFormat, JavaScriptGrammar::new()).highlight(code)
}

pub fn token(text: &str, token_type: TokenType) -> HighlightEvent {
    HighlightEvent::Token {
        text: text.to_string(),
        token_type,
    }
}

pub fn plain(text: &str) -> HighlightEvent {
    HighlightEvent::PlainText {
        text: text.to_string(),
    }
}

pub fn whitespace(text: &str) -> HighlightEvent {
    HighlightEvent::Whitespace {
        text: text.to_string(),
    }
}
