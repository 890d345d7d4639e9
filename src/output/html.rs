//! HTML output format.

use crate::output::{OutputBuilder, OutputFormat};
use crate::support::escape_html_entities;
use crate::tokenizing::TokenType;

/// Output format generating an HTML string with a semantic representation of
/// the highlighted code. Each token is wrapped in a `span` element with a
/// CSS class matching the token's type name, so the actual colors live in an
/// accompanying stylesheet. Optionally, a `class_prefix` can be set to
/// prefix each CSS class with a given string.
///
/// Consecutive tokens of the same type separated only by whitespace are
/// rendered inside a single `span`, which keeps the generated markup
/// compact (`<span class="keyword">public struct</span>` rather than two
/// adjacent spans).
#[derive(Debug, Clone, Default)]
pub struct HtmlOutputFormat {
    pub class_prefix: String,
}

impl HtmlOutputFormat {
    /// Create a format without any CSS class prefix.
    pub fn new() -> Self {
        HtmlOutputFormat::default()
    }

    /// Create a format prefixing every generated CSS class with `prefix`.
    pub fn with_class_prefix(prefix: impl Into<String>) -> Self {
        HtmlOutputFormat {
            class_prefix: prefix.into(),
        }
    }
}

impl OutputFormat for HtmlOutputFormat {
    type Builder = HtmlBuilder;

    fn make_builder(&self) -> HtmlBuilder {
        HtmlBuilder {
            class_prefix: self.class_prefix.clone(),
            html: String::new(),
            pending_token: None,
            pending_whitespace: None,
        }
    }
}

/// Builder accumulating highlighted HTML.
pub struct HtmlBuilder {
    class_prefix: String,
    html: String,
    pending_token: Option<(String, TokenType)>,
    pending_whitespace: Option<String>,
}

impl HtmlBuilder {
    fn append_pending(&mut self) {
        if let Some((text, token_type)) = self.pending_token.take() {
            self.html.push_str(&format!(
                "<span class=\"{}{}\">{}</span>",
                self.class_prefix,
                token_type.name(),
                escape_html_entities(&text)
            ));
        }

        if let Some(whitespace) = self.pending_whitespace.take() {
            self.html.push_str(&whitespace);
        }
    }
}

impl OutputBuilder for HtmlBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: &TokenType) {
        if let Some((text, pending_type)) = self.pending_token.as_mut() {
            if pending_type == token_type {
                // Same type with only whitespace in between: widen the
                // current span instead of opening a new one.
                if let Some(whitespace) = self.pending_whitespace.take() {
                    text.push_str(&whitespace);
                }
                text.push_str(token);
                return;
            }
        }

        self.append_pending();
        self.pending_token = Some((token.to_string(), token_type.clone()));
    }

    fn add_plain_text(&mut self, text: &str) {
        self.append_pending();
        self.html.push_str(&escape_html_entities(text));
    }

    fn add_whitespace(&mut self, whitespace: &str) {
        if self.pending_token.is_some() {
            match self.pending_whitespace.as_mut() {
                Some(pending) => pending.push_str(whitespace),
                None => self.pending_whitespace = Some(whitespace.to_string()),
            }
        } else {
            self.html.push_str(whitespace);
        }
    }

    fn build(mut self) -> String {
        self.append_pending();
        self.html
    }
}
