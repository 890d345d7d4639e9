//! The classification rule interface.

use crate::tokenizing::{Segment, TokenType};

/// A syntax rule belonging to a language [`Grammar`](crate::Grammar).
///
/// Each rule is associated with a certain [`TokenType`] and, when evaluated,
/// is asked whether it matches a given segment of code. If it does, the
/// rule's token type is assigned to the segment's current token.
///
/// Rules must be pure: they may not carry mutable state, and they cannot
/// assume they are called exactly once per input position — everything has
/// to be derived from the segment itself. That is what allows a single
/// highlighter to be shared freely across threads.
pub trait SyntaxRule: Send + Sync {
    /// The token type that this syntax rule represents.
    fn token_type(&self) -> TokenType;

    /// Whether the rule matches the given segment. On a match, the rule's
    /// token type is applied to the segment's current token.
    fn matches(&self, segment: &Segment) -> bool;
}
