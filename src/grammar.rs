//! Language grammars.
//!
//! A grammar supplies everything language-specific: which characters act as
//! token delimiters, which adjacent delimiter characters fuse into a single
//! token, and the ordered rule list used to classify tokens. The engine has
//! no built-in language behavior of its own.

mod javascript;
mod swift;

pub use javascript::JavaScriptGrammar;
pub use swift::SwiftGrammar;

use crate::syntax::SyntaxRule;

/// The grammar of a language to use for syntax highlighting.
///
/// See [`SwiftGrammar`] for a complete implementation.
pub trait Grammar: Send + Sync {
    /// Whether `character` is a delimiter that separates tokens within the
    /// language, such as a punctuation character. Characters the language
    /// treats as part of identifiers (for example `_`) must not be
    /// delimiters, and string or quote markers are usually excluded too so
    /// that they stay attached to adjacent content for rule matching.
    fn is_delimiter(&self, character: char) -> bool;

    /// The rules that define the syntax of the language. When highlighting,
    /// the rules are evaluated in order and the first rule that matches a
    /// given code segment determines that segment's token type.
    ///
    /// Ordering is the grammar author's contract: a rule that must shadow
    /// another one (comments before keywords, strings before numbers) has to
    /// appear earlier in the list. The engine performs no conflict
    /// detection.
    fn syntax_rules(&self) -> &[Box<dyn SyntaxRule>];

    /// Whether two delimiter characters, encountered in that order, may
    /// belong to the same token. Grammars override this to fuse
    /// multi-character operators and comment markers while keeping unrelated
    /// adjacent punctuation apart. The default merges everything.
    fn is_delimiter_mergeable(&self, first: char, second: char) -> bool {
        let _ = (first, second);
        true
    }
}
