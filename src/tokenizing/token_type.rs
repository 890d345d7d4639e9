//! Token classification categories.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic category assigned to a run of highlighted code.
///
/// The closed set of categories matches what code-oriented color themes
/// typically distinguish. Grammars that need something beyond it can attach
/// an arbitrary label through [`TokenType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A keyword, such as `if`, `class` or `let`, or an attribute such as
    /// `@available`
    Keyword,
    /// A token that is part of a string literal
    String,
    /// A reference to a type
    Type,
    /// A call to a function or method
    Call,
    /// A number, either integer or floating point
    Number,
    /// A comment, either single or multi-line
    Comment,
    /// A property being accessed, such as `object.property`
    Property,
    /// A symbol being accessed through dot notation, such as `.myCase`
    DotAccess,
    /// A preprocessing symbol, such as `#if`
    Preprocessing,
    /// A custom token type, carrying an arbitrary name
    Custom(String),
}

impl TokenType {
    /// The stable string name of this token type, as used for CSS classes,
    /// token dumps and theme files. Custom types use their payload verbatim.
    pub fn name(&self) -> &str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Type => "type",
            TokenType::Call => "call",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Property => "property",
            TokenType::DotAccess => "dotAccess",
            TokenType::Preprocessing => "preprocessing",
            TokenType::Custom(name) => name,
        }
    }

    /// Resolve a string name back into a token type. Names that don't match
    /// a standard category become [`TokenType::Custom`].
    pub fn from_name(name: &str) -> TokenType {
        match name {
            "keyword" => TokenType::Keyword,
            "string" => TokenType::String,
            "type" => TokenType::Type,
            "call" => TokenType::Call,
            "number" => TokenType::Number,
            "comment" => TokenType::Comment,
            "property" => TokenType::Property,
            "dotAccess" => TokenType::DotAccess,
            "preprocessing" => TokenType::Preprocessing,
            other => TokenType::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TokenType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TokenType::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converting_to_string() {
        assert_eq!(TokenType::Comment.name(), "comment");
        assert_eq!(TokenType::DotAccess.name(), "dotAccess");
        assert_eq!(TokenType::Custom("MyCustomType".into()).name(), "MyCustomType");
    }

    #[test]
    fn test_name_round_trip() {
        let types = [
            TokenType::Keyword,
            TokenType::String,
            TokenType::Type,
            TokenType::Call,
            TokenType::Number,
            TokenType::Comment,
            TokenType::Property,
            TokenType::DotAccess,
            TokenType::Preprocessing,
            TokenType::Custom("label".into()),
        ];

        for token_type in types {
            assert_eq!(TokenType::from_name(token_type.name()), token_type);
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&TokenType::DotAccess).expect("serialize");
        assert_eq!(json, "\"dotAccess\"");

        let parsed: TokenType = serde_json::from_str("\"banana\"").expect("deserialize");
        assert_eq!(parsed, TokenType::Custom("banana".into()));
    }
}
