//! Rule evaluation and highlighting orchestration.

mod highlighter;
mod rule;

pub use highlighter::SyntaxHighlighter;
pub use rule::SyntaxRule;
