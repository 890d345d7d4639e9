//! The output interface consumed by external renderers.

use crate::tokenizing::TokenType;

/// A factory for output builders, defining an output format for a
/// [`SyntaxHighlighter`](crate::SyntaxHighlighter).
///
/// Implementations of this trait are cheap descriptions of *how* to render
/// (CSS class prefix, theme, ...); the actual accumulation happens in the
/// builder they create.
pub trait OutputFormat {
    /// The type of builder that this output format uses. The builder's
    /// `Output` type determines the output type of the format.
    type Builder: OutputBuilder;

    /// Make a new builder instance. This is called once per highlighting
    /// session and is expected to return a blank builder.
    fn make_builder(&self) -> Self::Builder;
}

/// Accumulates highlighting events into a final output value.
///
/// Events arrive in input order, and concatenating their text reconstructs
/// the highlighted input exactly. Token and plain-text events never contain
/// whitespace; all whitespace arrives through `add_whitespace`.
pub trait OutputBuilder {
    /// The type of output that this builder produces.
    type Output;

    /// Add a token with a given type to the output.
    fn add_token(&mut self, token: &str, token_type: &TokenType);

    /// Add some plain, unclassified text to the output.
    fn add_plain_text(&mut self, text: &str);

    /// Add some whitespace to the output.
    fn add_whitespace(&mut self, whitespace: &str);

    /// Build the final output based on the builder's accumulated state.
    fn build(self) -> Self::Output;
}
