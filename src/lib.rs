//! # glint
//!
//! A lexer-driven syntax highlighter. Source code is segmented by a
//! grammar-aware tokenizer, each segment is classified by an ordered list of
//! syntax rules, and the classified stream is handed to a pluggable output
//! format (HTML, terminal escape codes, token dumps, or anything custom).
//!
//! No syntax tree is ever built: classification is purely lexical, driven by
//! the current token, a one-token window around it, and running counts of
//! everything seen so far. That keeps the engine total over all inputs — any
//! string highlights to *something*, and the emitted output always
//! reconstructs the input text exactly.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use glint::{HtmlOutputFormat, SyntaxHighlighter};
//!
//! let highlighter = SyntaxHighlighter::new(HtmlOutputFormat::new());
//! let html = highlighter.highlight("let value = 42");
//! ```
//!
//! Grammars for Swift and JavaScript ship with the crate; custom languages
//! plug in through the [`Grammar`] and [`SyntaxRule`] traits.

pub mod grammar;
pub mod output;
pub mod support;
pub mod syntax;
pub mod theming;
pub mod tokenizing;

pub use grammar::{Grammar, JavaScriptGrammar, SwiftGrammar};
pub use output::{
    HighlightEvent, HtmlOutputFormat, MarkdownDecorator, OutputBuilder, OutputFormat,
    TerminalOutputFormat, TokenDumpOutputFormat,
};
pub use syntax::{SyntaxHighlighter, SyntaxRule};
pub use theming::{Color, Theme, ThemeError};
pub use tokenizing::{Segment, TokenType, Tokens};
