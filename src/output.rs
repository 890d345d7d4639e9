//! Output formats for highlighted code.
//!
//! Formats implement [`OutputFormat`], handing the highlighter a fresh
//! [`OutputBuilder`] per call. Builders receive three kinds of events —
//! classified tokens, plain text and whitespace — in input order, and turn
//! them into whatever output type they define.

mod builder;
mod events;
mod html;
mod markdown;
mod terminal;
mod token_dump;

pub use builder::{OutputBuilder, OutputFormat};
pub use events::{EventOutputFormat, HighlightEvent};
pub use html::HtmlOutputFormat;
pub use markdown::MarkdownDecorator;
pub use terminal::TerminalOutputFormat;
pub use token_dump::TokenDumpOutputFormat;
