//! Token dump output format.

use crate::output::{OutputBuilder, OutputFormat};
use crate::tokenizing::TokenType;

/// Debug-oriented output format that prints one line per event, such as
/// `Keyword token: if` or `Plain text: (`. Whitespace is omitted. Useful for
/// inspecting how a grammar tokenizes and classifies a piece of code.
pub struct TokenDumpOutputFormat;

impl OutputFormat for TokenDumpOutputFormat {
    type Builder = TokenDumpBuilder;

    fn make_builder(&self) -> TokenDumpBuilder {
        TokenDumpBuilder { lines: Vec::new() }
    }
}

/// Builder collecting token dump lines.
pub struct TokenDumpBuilder {
    lines: Vec<String>,
}

impl OutputBuilder for TokenDumpBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: &TokenType) {
        self.lines
            .push(format!("{} token: {}", capitalized(token_type.name()), token));
    }

    fn add_plain_text(&mut self, text: &str) {
        self.lines.push(format!("Plain text: {text}"));
    }

    fn add_whitespace(&mut self, _whitespace: &str) {
        // Whitespace carries no classification; leave it out of the dump.
    }

    fn build(self) -> String {
        self.lines.join("\n")
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
