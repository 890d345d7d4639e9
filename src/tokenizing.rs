//! Tokenization of source code into classified segments.
//!
//! This module contains the data model shared by the whole engine:
//! - [`TokenType`]: the semantic categories tokens are classified into
//! - [`Segment`] and [`Tokens`]: the per-token context handed to syntax rules
//! - the tokenizer itself, which turns raw text into a segment stream
//!
//! The tokenizer is internal; it is driven by
//! [`SyntaxHighlighter`](crate::SyntaxHighlighter), which is the public entry
//! point for highlighting.

mod segment;
mod token_type;
pub(crate) mod tokenizer;

pub use segment::{Segment, Tokens};
pub use token_type::TokenType;
