//! Highlighting events as plain data.
//!
//! The event format is the most direct view of what the highlighter
//! produced: one [`HighlightEvent`] per emitted token, plain-text run or
//! whitespace run. It backs the CLI's JSON output and is the format of
//! choice for asserting on highlighter behavior in tests.

use serde::Serialize;

use crate::output::{OutputBuilder, OutputFormat};
use crate::tokenizing::TokenType;

/// A single highlighting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HighlightEvent {
    /// A classified token.
    Token {
        text: String,
        #[serde(rename = "type")]
        token_type: TokenType,
    },
    /// Unclassified text.
    PlainText { text: String },
    /// A run of whitespace.
    Whitespace { text: String },
}

impl HighlightEvent {
    /// The raw text carried by this event.
    pub fn text(&self) -> &str {
        match self {
            HighlightEvent::Token { text, .. } => text,
            HighlightEvent::PlainText { text } => text,
            HighlightEvent::Whitespace { text } => text,
        }
    }
}

/// Output format that collects the raw event stream.
pub struct EventOutputFormat;

impl OutputFormat for EventOutputFormat {
    type Builder = EventBuilder;

    fn make_builder(&self) -> EventBuilder {
        EventBuilder { events: Vec::new() }
    }
}

/// Builder collecting events into a `Vec<HighlightEvent>`.
pub struct EventBuilder {
    events: Vec<HighlightEvent>,
}

impl OutputBuilder for EventBuilder {
    type Output = Vec<HighlightEvent>;

    fn add_token(&mut self, token: &str, token_type: &TokenType) {
        self.events.push(HighlightEvent::Token {
            text: token.to_string(),
            token_type: token_type.clone(),
        });
    }

    fn add_plain_text(&mut self, text: &str) {
        self.events.push(HighlightEvent::PlainText {
            text: text.to_string(),
        });
    }

    fn add_whitespace(&mut self, whitespace: &str) {
        self.events.push(HighlightEvent::Whitespace {
            text: whitespace.to_string(),
        });
    }

    fn build(self) -> Vec<HighlightEvent> {
        self.events
    }
}
