//! Small string and sequence predicates shared by the grammars and output
//! formats.
//!
//! Syntax rules compare tokens against candidate lists constantly, so these
//! helpers keep the rule bodies readable. They operate on plain `&str` and
//! slices rather than anything grammar-specific.

/// Whether `token` equals any of the given candidates.
pub fn is_any_of(token: &str, candidates: &[&str]) -> bool {
    candidates.contains(&token)
}

/// Whether any element of `tokens` equals any of the given candidates.
pub fn contains_any_of(tokens: &[String], candidates: &[&str]) -> bool {
    tokens.iter().any(|token| candidates.contains(&token.as_str()))
}

/// The number of times `target` occurs in `text`.
pub fn occurrences_of(text: &str, target: char) -> usize {
    text.chars().filter(|&character| character == target).count()
}

/// Whether the token parses as a plain integer.
///
/// Grammars handle floating point values at the token level (the `.` is a
/// delimiter, so `1.13` arrives as three tokens), which is why this only
/// needs to recognize digit runs.
pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.parse::<i64>().is_ok()
}

/// Whether the token starts with an uppercase letter, ignoring any leading
/// underscores (`_MyType` counts as capitalized).
pub fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .find(|&character| character != '_')
        .is_some_and(char::is_uppercase)
}

/// Whether the token starts with a letter, ignoring any leading underscores
/// (`_myFunction` counts as starting with a letter).
pub fn starts_with_letter(token: &str) -> bool {
    token
        .chars()
        .find(|&character| character != '_')
        .is_some_and(char::is_alphabetic)
}

/// Escape `&`, `<` and `>` so that `text` can be embedded in HTML.
pub fn escape_html_entities(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(character),
        }
    }

    escaped
}
