//! Grammar for the Swift language.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::grammar::Grammar;
use crate::support::{
    contains_any_of, is_any_of, is_capitalized, is_number, occurrences_of, starts_with_letter,
};
use crate::syntax::SyntaxRule;
use crate::tokenizing::{Segment, TokenType};

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "final", "class", "struct", "enum", "protocol", "extension", "let", "var", "func",
        "typealias", "init", "deinit", "guard", "if", "else", "return", "get", "throw", "throws",
        "rethrows", "for", "in", "open", "weak", "unowned", "public", "internal", "private",
        "fileprivate", "import", "mutating", "nonmutating", "associatedtype", "case", "switch",
        "static", "do", "try", "catch", "as", "is", "super", "self", "set", "true", "false",
        "nil", "override", "where", "_", "default", "break", "#selector", "required", "willSet",
        "didSet", "lazy", "subscript", "defer", "inout", "continue", "fallthrough", "repeat",
        "while", "convenience", "dynamic", "indirect", "prefix", "postfix", "infix", "some",
        "async", "await", "actor", "#available", "#file", "#function", "#line",
    ]
    .into_iter()
    .collect()
});

/// Keywords that introduce a named declaration; the name that follows them
/// is not highlighted as a type.
const DECLARATION_KEYWORDS: [&str; 11] = [
    "class",
    "struct",
    "enum",
    "func",
    "protocol",
    "typealias",
    "import",
    "associatedtype",
    "subscript",
    "init",
    "actor",
];

const ACCESS_MODIFIERS: [&str; 5] = ["public", "internal", "private", "fileprivate", "open"];

/// Grammar for the Swift language. Use this implementation when highlighting
/// Swift code. This is the default grammar.
pub struct SwiftGrammar {
    rules: Vec<Box<dyn SyntaxRule>>,
}

impl SwiftGrammar {
    pub fn new() -> Self {
        SwiftGrammar {
            rules: vec![
                Box::new(PreprocessingRule),
                Box::new(CommentRule),
                Box::new(RawStringRule),
                Box::new(MultiLineStringRule),
                Box::new(SingleLineStringRule),
                Box::new(AttributeRule),
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

impl Default for SwiftGrammar {
    fn default() -> Self {
        SwiftGrammar::new()
    }
}

impl Grammar for SwiftGrammar {
    fn is_delimiter(&self, character: char) -> bool {
        // `_` belongs to identifiers, quotes stay attached to string content,
        // and `#`, `@` and `$` prefix compiler directives, attributes and
        // projected values respectively.
        !character.is_alphanumeric() && !matches!(character, '_' | '"' | '#' | '@' | '$')
    }

    fn syntax_rules(&self) -> &[Box<dyn SyntaxRule>] {
        &self.rules
    }
}

struct PreprocessingRule;

impl SyntaxRule for PreprocessingRule {
    fn token_type(&self) -> TokenType {
        TokenType::Preprocessing
    }

    fn matches(&self, segment: &Segment) -> bool {
        const TOKENS: [&str; 4] = ["#if", "#endif", "#elseif", "#else"];

        if is_any_of(&segment.tokens.current, &TOKENS) {
            return true;
        }

        contains_any_of(&segment.tokens.on_same_line, &TOKENS)
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

struct RawStringRule;

impl SyntaxRule for RawStringRule {
    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment) -> bool {
        let current = segment.tokens.current.as_str();

        if current.starts_with("#\"") || current.ends_with("\"#") {
            return true;
        }

        // Raw strings don't interpolate, so everything between an unmatched
        // opening marker and its closing marker is string content.
        let opens = segment
            .tokens
            .on_same_line
            .iter()
            .filter(|token| token.starts_with("#\""))
            .count();
        let closes = segment
            .tokens
            .on_same_line
            .iter()
            .filter(|token| token.ends_with("\"#"))
            .count();

        opens > closes
    }
}

struct MultiLineStringRule;

impl SyntaxRule for MultiLineStringRule {
    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment) -> bool {
        if segment.tokens.count_of("\"\"\"") % 2 == 0 {
            return false;
        }

        !is_within_string_interpolation(segment)
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

        !is_within_string_interpolation(segment)
    }
}

struct AttributeRule;

impl SyntaxRule for AttributeRule {
    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &Segment) -> bool {
        if segment.tokens.current.starts_with('@') {
            return true;
        }

        // Nested attribute types, such as @Persisted.InMemory
        if segment.tokens.previous.as_deref() == Some(".") {
            let line = &segment.tokens.on_same_line;
            if line.len() >= 2 && line[line.len() - 2].starts_with('@') {
                return true;
            }
        }

        false
    }
}

struct NumberRule;

impl SyntaxRule for NumberRule {
    fn token_type(&self) -> TokenType {
        TokenType::Number
    }

    fn matches(&self, segment: &Segment) -> bool {
        // Integers can be separated using "_", so handle that
        if is_number(&segment.tokens.current.replace('_', "")) {
            return true;
        }

        // Double and floating point values contain a "." between two digit
        // runs
        if segment.tokens.current != "." {
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
        let current = segment.tokens.current.as_str();

        // Types are not highlighted at their declaration site
        if let Some(previous) = &segment.tokens.previous {
            if DECLARATION_KEYWORDS.contains(&previous.as_str()) {
                return false;
            }
        }

        if !is_capitalized(current) {
            return false;
        }

        if prefixed_by_dot_access(segment) {
            return false;
        }

        // The XCTAssert family of functions is a bit of an edge case, since
        // they start with capital letters
        if current.starts_with("XCTAssert") {
            return false;
        }

        // In a generic declaration, only constraints are highlighted. Since
        // the declaration might be on another line, walk backwards through
        // all tokens until there's enough information to decide whether the
        // enclosing angle bracket declares parameters or applies a type.
        if segment.tokens.previous_is_any(&["<", ","]) {
            // A bracket directly following a declared name opens parameters,
            // even when that name is spelled like a keyword (func await<T>)
            if segment.tokens.previous.as_deref() == Some("<") {
                if let [.., declaration, _name, bracket] = segment.tokens.all.as_slice() {
                    if bracket.as_str() == "<"
                        && DECLARATION_KEYWORDS.contains(&declaration.as_str())
                    {
                        return false;
                    }
                }
            }

            let mut inside_open_bracket = false;

            for token in segment.tokens.all.iter().rev() {
                // A closed generic or an attribute means the bracket belongs
                // to a type in use
                if token.starts_with('>') || token.starts_with('@') {
                    break;
                }

                if token == "<" {
                    inside_open_bracket = true;
                    continue;
                }

                if DECLARATION_KEYWORDS.contains(&token.as_str()) {
                    return !inside_open_bracket;
                }

                if KEYWORDS.contains(token.as_str()) {
                    break;
                }

                if is_any_of(token, &["=", "=="]) || token.starts_with('(') {
                    break;
                }
            }
        }

        true
    }
}

struct CallRule {
    keywords_to_avoid: HashSet<&'static str>,
}

const CONTROL_FLOW_TOKENS: [&str; 5] = ["if", "&&", "||", "for", "switch"];

impl CallRule {
    fn new() -> Self {
        let mut keywords_to_avoid: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
        keywords_to_avoid.remove("return");
        keywords_to_avoid.remove("try");
        keywords_to_avoid.remove("throw");
        keywords_to_avoid.remove("if");
        keywords_to_avoid.remove("await");
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

        // Subscripting is the only keyword that looks like a function call,
        // and explicit initializer calls are highlighted as keywords instead
        if is_any_of(current, &["subscript", "init"]) {
            return false;
        }

        if let Some(previous) = &segment.tokens.previous {
            if self.keywords_to_avoid.contains(previous.as_str()) {
                return false;
            }

            // Enum cases with associated values are patterns, not calls,
            // when they appear within a switch case
            if prefixed_by_dot_access(segment)
                && segment.tokens.on_same_line.iter().any(|token| token == "case")
            {
                return false;
            }
        }

        // Handle trailing closure syntax
        if segment.trailing_whitespace.is_some() {
            if !segment.tokens.next_is_any(&["{", "{}"]) {
                return false;
            }

            // A keyword-named method is still a call when accessed through
            // dot syntax, like `publisher.catch`
            if KEYWORDS.contains(current) && segment.tokens.previous.as_deref() != Some(".") {
                return false;
            }

            return !contains_any_of(&segment.tokens.on_same_line, &CONTROL_FLOW_TOKENS);
        }

        segment
            .tokens
            .next_is_any(&["(", "()", "())", "(.", "({", "()."])
    }
}

struct PropertyRule;

impl SyntaxRule for PropertyRule {
    fn token_type(&self) -> TokenType {
        TokenType::Property
    }

    fn matches(&self, segment: &Segment) -> bool {
        let current = segment.tokens.current.as_str();

        // Projected property wrapper values, like $value. Closure argument
        // shorthands ($0, $1, ...) stay plain.
        if let Some(rest) = current.strip_prefix('$') {
            return !is_number(rest);
        }

        if segment.tokens.on_same_line.is_empty() {
            return false;
        }

        let Some(previous) = &segment.tokens.previous else {
            return false;
        };

        if !previous.ends_with('.') {
            return false;
        }

        // `.self` and `.init` stay keywords even behind a dot
        if is_any_of(current, &["self", "init"]) {
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
        if !segment.tokens.previous_is_any(&[".", "(.", "[."]) {
            return false;
        }

        if segment.tokens.on_same_line.is_empty() {
            return false;
        }

        // `.self` and `.init` are keywords even behind a dot
        if is_any_of(&segment.tokens.current, &["self", "init"]) {
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

        // Setter access levels, like private(set), highlight as one group
        if is_access_control_group(segment) {
            return true;
        }

        // `actor` doubles as a common variable name; it only declares
        // something when followed by a capitalized name
        if current == "actor"
            && !segment
                .tokens
                .next
                .as_deref()
                .is_some_and(is_capitalized)
        {
            return false;
        }

        if segment.tokens.next.as_deref() == Some(":") {
            // Directly before a colon, only switch defaults and nil patterns
            // keep their keyword highlight; anything else is a label
            if !is_any_of(current, &["default", "nil"]) {
                return false;
            }
        }

        if let Some(previous) = &segment.tokens.previous {
            // Don't highlight most keywords when used as a parameter label
            // or as the name of a declared symbol
            if !is_any_of(
                current,
                &["_", "self", "let", "var", "true", "false", "nil", "try", "inout", "is"],
            ) && is_any_of(
                previous,
                &["(", ",", ">(", "`", "func", "case", "let", "var"],
            ) {
                return false;
            }
        }

        KEYWORDS.contains(current)
    }
}

/// Whether the segment forms part of a setter access group, such as the
/// `(`, `set` and `)` tokens of `private(set)`.
fn is_access_control_group(segment: &Segment) -> bool {
    let tokens = &segment.tokens;

    match tokens.current.as_str() {
        "(" => {
            tokens
                .previous
                .as_deref()
                .is_some_and(|previous| ACCESS_MODIFIERS.contains(&previous))
                && tokens.next.as_deref() == Some("set")
        }
        "set" => {
            tokens.previous.as_deref() == Some("(")
                && ACCESS_MODIFIERS
                    .iter()
                    .any(|modifier| segment.prefix.ends_with(&format!("{modifier}(")))
        }
        ")" => ACCESS_MODIFIERS
            .iter()
            .any(|modifier| segment.prefix.ends_with(&format!("{modifier}(set"))),
        _ => false,
    }
}

fn is_within_string_literal(segment: &Segment) -> bool {
    let delimiter = "\"";

    if segment.tokens.current.starts_with(delimiter) {
        return true;
    }

    if segment.tokens.current.ends_with(delimiter) {
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

        if token == delimiter {
            if start_count == end_count {
                start_count += 1;
            } else {
                end_count += 1;
            }
        } else {
            if token.starts_with(delimiter) {
                start_count += 1;
            }

            if token.ends_with(delimiter) {
                end_count += 1;
            }
        }

        previous = Some(token.as_str());
    }

    start_count != end_count
}

fn is_within_string_interpolation(segment: &Segment) -> bool {
    let delimiter = "\\(";

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

    // The interpolation is still open as long as its parentheses are
    let mut parenthesis_count: i64 = 1;

    for token in suffix.iter() {
        parenthesis_count += occurrences_of(token, '(') as i64;
        parenthesis_count -= occurrences_of(token, ')') as i64;

        if parenthesis_count <= 0 {
            return false;
        }
    }

    true
}

fn prefixed_by_dot_access(segment: &Segment) -> bool {
    segment.tokens.previous_is_any(&["(.", "[."]) || segment.prefix.ends_with(" .")
}
