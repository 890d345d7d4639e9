//! Enum dot-syntax and optional-chaining tests for the Swift grammar.

mod common;

use common::{plain, swift_events, token, whitespace};
use glint::TokenType::{Call, DotAccess, Keyword, Property, Type};

#[test]
fn test_enum_dot_syntax_in_assignment() {
    let events = swift_events("let value: Enum = .aCase");

    assert_eq!(
        events,
        [
            token("let", Keyword),
            whitespace(" "),
            plain("value:"),
            whitespace(" "),
            token("Enum", Type),
            whitespace(" "),
            plain("="),
            whitespace(" "),
            plain("."),
            token("aCase", DotAccess),
        ]
    );
}

#[test]
fn test_enum_dot_syntax_as_argument() {
    let events = swift_events("call(.aCase)");

    assert_eq!(
        events,
        [
            token("call", Call),
            plain("(."),
            token("aCase", DotAccess),
            plain(")"),
        ]
    );
}

#[test]
fn test_enum_dot_syntax_with_associated_value_treated_as_call() {
    let events = swift_events("call(.error(error))");

    assert_eq!(
        events,
        [
            token("call", Call),
            plain("(."),
            token("error", Call),
            plain("(error))"),
        ]
    );
}

#[test]
fn test_using_enum_in_subscript() {
    let events = swift_events("dictionary[.key]");

    assert_eq!(
        events,
        [
            plain("dictionary[."),
            token("key", DotAccess),
            plain("]"),
        ]
    );
}

#[test]
fn test_assigning_property_with_optional_chaining() {
    let events = swift_events("object?.property = true");

    assert_eq!(
        events,
        [
            plain("object?."),
            token("property", Property),
            whitespace(" "),
            plain("="),
            whitespace(" "),
            token("true", Keyword),
        ]
    );
}

#[test]
fn test_reading_property_with_optional_chaining() {
    let events = swift_events("call(object?.property)");

    assert_eq!(
        events,
        [
            token("call", Call),
            plain("(object?."),
            token("property", Property),
            plain(")"),
        ]
    );
}

#[test]
fn test_calling_method_with_optional_chaining() {
    let events = swift_events("object?.call()");

    assert_eq!(
        events,
        [
            plain("object?."),
            token("call", Call),
            plain("()"),
        ]
    );
}
