#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn rule_order_is_priority_order() {
    let order: Vec<_> = RULES.iter().map(|rule| rule.category.name()).collect();
    assert_eq!(
        order,
        [
            "NUMBER",
            "ASSIGN",
            "END",
            "IDENTIFIER",
            "PLUS",
            "MINUS",
            "TIMES",
            "DIVIDE",
            "LPAREN",
            "RPAREN",
            "SKIP",
            "MISMATCH",
        ]
    );
}

#[test]
fn mismatch_is_the_last_rule() {
    let (last, rest) = RULES.split_last().unwrap();
    assert_eq!(last.category, TokenCategory::Mismatch);
    assert!(rest.iter().all(|rule| rule.category != TokenCategory::Mismatch));
}

#[test]
fn rule_patterns_match_category_patterns() {
    for rule in &RULES {
        assert_eq!(rule.pattern, rule.category.pattern());
        assert!(!rule.pattern.is_empty());
    }
}

#[test]
fn only_skip_and_mismatch_are_hidden() {
    let hidden: Vec<_> = RULES
        .iter()
        .filter(|rule| !rule.category.is_emitted())
        .map(|rule| rule.category)
        .collect();
    assert_eq!(hidden, [TokenCategory::Skip, TokenCategory::Mismatch]);
}

#[test]
fn display_uses_external_name() {
    assert_eq!(TokenCategory::LParen.to_string(), "LPAREN");
    assert_eq!(TokenCategory::Identifier.to_string(), "IDENTIFIER");
}

/// Every rule except the catch-all has a logos variant that accepts a
/// sample lexeme as one whole token.
#[test]
fn raw_tokens_agree_with_rule_table() {
    let samples = [
        ("0123456789", TokenCategory::Number),
        ("=", TokenCategory::Assign),
        (";", TokenCategory::End),
        ("AbcXyz", TokenCategory::Identifier),
        ("+", TokenCategory::Plus),
        ("-", TokenCategory::Minus),
        ("*", TokenCategory::Times),
        ("/", TokenCategory::Divide),
        ("(", TokenCategory::LParen),
        (")", TokenCategory::RParen),
        (" \t\n ", TokenCategory::Skip),
    ];

    for (sample, expected) in samples {
        let mut lexer = RawToken::lexer(sample);
        let raw = lexer.next().unwrap().unwrap();
        assert_eq!(TokenCategory::from(raw), expected, "sample {sample:?}");
        assert_eq!(lexer.span(), 0..sample.len(), "sample {sample:?}");
        assert!(lexer.next().is_none());
    }
}

#[test]
fn raw_tokens_reject_catch_all_characters() {
    for sample in ["#", "_", "\r", "é", "."] {
        let mut lexer = RawToken::lexer(sample);
        assert_eq!(lexer.next(), Some(Err(())), "sample {sample:?}");
    }
}
