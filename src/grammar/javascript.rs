//! Grammar for the JavaScript language.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::grammar::Grammar;
use crate::support::{contains_any_of, is_any_of, is_capitalized, is_number, occurrences_of,
    starts_with_letter};
use crate::syntax::SyntaxRule;
use crate::tokenizing::{Segment, TokenType};

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
        "instanceof", "let", "new", "of", "return", "static", "super", "switch", "this", "throw",
        "try", "typeof", "var", "void", "while", "with", "yield", "async", "await", "true",
        "false", "null", "undefined",
    ]
    .into_iter()
    .collect()
});

const DECLARATION_KEYWORDS: [&str; 6] = [
    "class",
    "enum",
    "function",
    "typealias",
    "require",
    "import",
];

/// String markers tracked by the literal scan: double quotes, single quotes
/// and template literal backticks.
const STRING_DELIMITERS: [&str; 3] = ["\"", "'", "`"];

/// Grammar for the JavaScript language. Use this implementation when
/// highlighting JavaScript code.
pub struct JavaScriptGrammar {
    rules: Vec<Box<dyn SyntaxRule>>,
}

impl JavaScriptGrammar {
    pub fn new() -> Self {
        JavaScriptGrammar {
            rules: vec![
                Box::new(CommentRule),
                Box::new(SingleLineStringRule),
                Box::new(TemplateStringRule),
                Box::new(NumberRule),
                Box::new(TypeRule),
                Box::new(CallRule::new()),
                Box::new(PropertyRule),
                Box::new(DotAccessRule),
                Box::new(KeywordRule),
            ],
        }
    }
}

impl Default for JavaScriptGrammar {
    fn default() -> Self {
        JavaScriptGrammar::new()
    }
}

impl Grammar for JavaScriptGrammar {
    fn is_delimiter(&self, character: char) -> bool {
        // `_` belongs to identifiers, quotes stay attached to string content,
        // and `;` is kept out so statement terminators don't fuse with
        // other punctuation.
        !character.is_alphanumeric() && !matches!(character, '_' | '"' | '\'' | ';')
    }

    fn syntax_rules(&self) -> &[Box<dyn SyntaxRule>] {
        &self.rules
    }
}

struct CommentRule;

impl SyntaxRule for CommentRule {
    fn token_type(&self) -> TokenType {
        TokenType::Comment
    }

    fn matches(&self, segment: &Segment) -> bool {
        if segment.tokens.current.starts_with("//") {
            return true;
        }

        if contains_any_of(&segment.tokens.on_same_line, &["//", "///"]) {
            return true;
        }

        if is_any_of(&segment.tokens.current, &["/*", "/**", "*/"]) {
            return true;
        }

        segment
            .tokens
            .contains_more_occurrences(&["/*", "/**"], &["*/"])
    }
}

struct TemplateStringRule;

impl SyntaxRule for TemplateStringRule {
    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment) -> bool {
        if segment.tokens.count_of("`") % 2 == 0 {
            return false;
        }

        !is_within_template_interpolation(segment)
    }
}

struct SingleLineStringRule;

impl SyntaxRule for SingleLineStringRule {
    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment) -> bool {
        if !is_within_string_literal(segment) {
            return false;
        }

        !is_within_template_interpolation(segment)
    }
}

struct NumberRule;

impl SyntaxRule for NumberRule {
    fn token_type(&self) -> TokenType {
        TokenType::Number
    }

    fn matches(&self, segment: &Segment) -> bool {
        let current = segment.tokens.current.as_str();

        // Hex and binary literals keep their prefix attached
        if current.starts_with("0x") || current.starts_with("0b") {
            return true;
        }

        if is_number(current) {
            return true;
        }

        // Double and floating point values contain a "." between two digit
        // runs
        if current != "." {
            return false;
        }

        let (Some(previous), Some(next)) = (&segment.tokens.previous, &segment.tokens.next) else {
            return false;
        };

        is_number(previous) && is_number(next)
    }
}

struct TypeRule;

impl SyntaxRule for TypeRule {
    fn token_type(&self) -> TokenType {
        TokenType::Type
    }

    fn matches(&self, segment: &Segment) -> bool {
        // Types are not highlighted at their declaration site
        if let Some(previous) = &segment.tokens.previous {
            if DECLARATION_KEYWORDS.contains(&previous.as_str()) {
                return false;
            }
        }

        if !is_capitalized(&segment.tokens.current) {
            return false;
        }

        !prefixed_by_dot_access(segment)
    }
}

struct CallRule {
    keywords_to_avoid: HashSet<&'static str>,
}

const CONTROL_FLOW_TOKENS: [&str; 4] = ["if", "&&", "||", "for"];

impl CallRule {
    fn new() -> Self {
        let mut keywords_to_avoid: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
        keywords_to_avoid.remove("return");
        keywords_to_avoid.remove("throw");
        keywords_to_avoid.remove("if");
        keywords_to_avoid.remove("new");
        keywords_to_avoid.remove("await");
        keywords_to_avoid.remove("true");
        keywords_to_avoid.remove("false");
        keywords_to_avoid.remove("null");
        keywords_to_avoid.remove("undefined");
        CallRule { keywords_to_avoid }
    }
}

impl SyntaxRule for CallRule {
    fn token_type(&self) -> TokenType {
        TokenType::Call
    }

    fn matches(&self, segment: &Segment) -> bool {
        let current = segment.tokens.current.as_str();

        if !starts_with_letter(current) {
            return false;
        }

        if let Some(previous) = &segment.tokens.previous {
            if self.keywords_to_avoid.contains(previous.as_str()) {
                return false;
            }

            if prefixed_by_dot_access(segment) {
                return false;
            }
        }

        // Functions passed trailing callbacks still count as calls, but a
        // bare identifier before a block doesn't
        if segment.trailing_whitespace.is_some() {
            if !segment.tokens.next_is_any(&["{", "{}"]) {
                return false;
            }

            if KEYWORDS.contains(current) {
                return false;
            }

            return !contains_any_of(&segment.tokens.on_same_line, &CONTROL_FLOW_TOKENS);
        }

        segment
            .tokens
            .next_is_any(&["(", "()", "())", "(.", "({", "().", "();"])
    }
}

struct PropertyRule;

impl SyntaxRule for PropertyRule {
    fn token_type(&self) -> TokenType {
        TokenType::Property
    }

    fn matches(&self, segment: &Segment) -> bool {
        if segment.tokens.on_same_line.is_empty() {
            return false;
        }

        if !segment.tokens.previous_is_any(&[".", "().", ")."]) {
            return false;
        }

        if segment.tokens.current == "this" {
            return false;
        }

        if prefixed_by_dot_access(segment) {
            return false;
        }

        segment.tokens.on_same_line.first().map(String::as_str) != Some("import")
    }
}

struct DotAccessRule;

impl SyntaxRule for DotAccessRule {
    fn token_type(&self) -> TokenType {
        TokenType::DotAccess
    }

    fn matches(&self, segment: &Segment) -> bool {
        if !segment.tokens.previous_is_any(&["."]) {
            return false;
        }

        if segment.tokens.on_same_line.is_empty() {
            return false;
        }

        if segment.tokens.current == "this" {
            return false;
        }

        segment.tokens.on_same_line.first().map(String::as_str) != Some("import")
    }
}

struct KeywordRule;

impl SyntaxRule for KeywordRule {
    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &Segment) -> bool {
        let current = segment.tokens.current.as_str();

        if segment.tokens.next.as_deref() == Some(":") {
            // Only the default label of a switch keeps its highlight before
            // a colon; object keys don't
            if current != "default" {
                return false;
            }
        }

        if let Some(previous) = &segment.tokens.previous {
            // Don't highlight most keywords when used as an object key or
            // argument name
            if !is_any_of(current, &["this", "let", "var", "true", "false", "null"])
                && is_any_of(previous, &["(", ","])
            {
                return false;
            }
        }

        KEYWORDS.contains(current)
    }
}

fn is_within_string_literal(segment: &Segment) -> bool {
    let current = segment.tokens.current.as_str();

    if STRING_DELIMITERS
        .iter()
        .any(|delimiter| current.starts_with(delimiter))
    {
        return true;
    }

    if STRING_DELIMITERS
        .iter()
        .any(|delimiter| current.ends_with(delimiter))
    {
        return true;
    }

    let mut start_count = 0;
    let mut end_count = 0;
    let mut previous: Option<&str> = None;

    for token in &segment.tokens.on_same_line {
        // A backslash escapes whatever marker follows it
        if previous == Some("\\") {
            previous = Some(token.as_str());
            continue;
        }

        if STRING_DELIMITERS.contains(&token.as_str()) {
            if start_count == end_count {
                start_count += 1;
            } else {
                end_count += 1;
            }
        } else {
            if STRING_DELIMITERS
                .iter()
                .any(|delimiter| token.starts_with(delimiter))
            {
                start_count += 1;
            }

            if STRING_DELIMITERS
                .iter()
                .any(|delimiter| token.ends_with(delimiter))
            {
                end_count += 1;
            }
        }

        previous = Some(token.as_str());
    }

    start_count != end_count
}

fn is_within_template_interpolation(segment: &Segment) -> bool {
    let delimiter = "${";

    if segment.tokens.current == delimiter
        || segment.tokens.previous.as_deref() == Some(delimiter)
    {
        return true;
    }

    let components: Vec<&[String]> = segment
        .tokens
        .on_same_line
        .split(|token| token == delimiter)
        .filter(|component| !component.is_empty())
        .collect();

    if components.len() < 2 {
        return false;
    }

    let Some(suffix) = components.last() else {
        return false;
    };

    // The interpolation is still open as long as its braces are
    let mut brace_count: i64 = 1;

    for token in suffix.iter() {
        brace_count += occurrences_of(token, '{') as i64;
        brace_count -= occurrences_of(token, '}') as i64;

        if brace_count <= 0 {
            return false;
        }
    }

    true
}

fn prefixed_by_dot_access(segment: &Segment) -> bool {
    segment.tokens.previous.as_deref() == Some("(.") || segment.prefix.ends_with(" .")
}
