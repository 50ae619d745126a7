//! Token Rule Table
//!
//! The grammar is a fixed, priority-ordered list of (category, pattern)
//! rules. [`RULES`] describes it; [`RawToken`] is the logos-derived matcher
//! compiled from the same patterns, one variant per rule in the same order.
//!
//! `Mismatch` has no `RawToken` variant: the catch-all `.` is whatever logos
//! rejects, so it can never outrank a real rule.

use std::fmt;

use logos::Logos;

/// Category tag of a token rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    Number,
    Assign,
    End,
    Identifier,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,
    /// Whitespace. Consumed, never emitted.
    Skip,
    /// Catch-all for unrecognized characters. Surfaces only as an error.
    Mismatch,
}

impl TokenCategory {
    /// External name, as printed in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Number => "NUMBER",
            TokenCategory::Assign => "ASSIGN",
            TokenCategory::End => "END",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Plus => "PLUS",
            TokenCategory::Minus => "MINUS",
            TokenCategory::Times => "TIMES",
            TokenCategory::Divide => "DIVIDE",
            TokenCategory::LParen => "LPAREN",
            TokenCategory::RParen => "RPAREN",
            TokenCategory::Skip => "SKIP",
            TokenCategory::Mismatch => "MISMATCH",
        }
    }

    /// Pattern text of this category's rule.
    pub const fn pattern(self) -> &'static str {
        match self {
            TokenCategory::Number => r"[0-9]+",
            TokenCategory::Assign => "=",
            TokenCategory::End => ";",
            TokenCategory::Identifier => "[A-Za-z]+",
            TokenCategory::Plus => r"\+",
            TokenCategory::Minus => "-",
            TokenCategory::Times => r"\*",
            TokenCategory::Divide => "/",
            TokenCategory::LParen => r"\(",
            TokenCategory::RParen => r"\)",
            TokenCategory::Skip => r"[ \t\n]+",
            TokenCategory::Mismatch => ".",
        }
    }

    /// Whether tokens of this category reach the caller.
    pub const fn is_emitted(self) -> bool {
        !matches!(self, TokenCategory::Skip | TokenCategory::Mismatch)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One entry of the rule table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TokenRule {
    pub category: TokenCategory,
    pub pattern: &'static str,
}

impl TokenRule {
    const fn of(category: TokenCategory) -> Self {
        TokenRule {
            category,
            pattern: category.pattern(),
        }
    }
}

/// The grammar, highest priority first. `Mismatch` must stay last.
pub static RULES: [TokenRule; 12] = [
    TokenRule::of(TokenCategory::Number),
    TokenRule::of(TokenCategory::Assign),
    TokenRule::of(TokenCategory::End),
    TokenRule::of(TokenCategory::Identifier),
    TokenRule::of(TokenCategory::Plus),
    TokenRule::of(TokenCategory::Minus),
    TokenRule::of(TokenCategory::Times),
    TokenRule::of(TokenCategory::Divide),
    TokenRule::of(TokenCategory::LParen),
    TokenRule::of(TokenCategory::RParen),
    TokenRule::of(TokenCategory::Skip),
    TokenRule::of(TokenCategory::Mismatch),
];

/// Raw token from logos.
///
/// Keep the attributes in sync with [`TokenCategory::pattern`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+")]
    Number,
    #[token("=")]
    Assign,
    #[token(";")]
    End,
    #[regex(r"[A-Za-z]+")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"[ \t\n]+")]
    Skip,
}

impl From<RawToken> for TokenCategory {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number => TokenCategory::Number,
            RawToken::Assign => TokenCategory::Assign,
            RawToken::End => TokenCategory::End,
            RawToken::Identifier => TokenCategory::Identifier,
            RawToken::Plus => TokenCategory::Plus,
            RawToken::Minus => TokenCategory::Minus,
            RawToken::Times => TokenCategory::Times,
            RawToken::Divide => TokenCategory::Divide,
            RawToken::LParen => TokenCategory::LParen,
            RawToken::RParen => TokenCategory::RParen,
            RawToken::Skip => TokenCategory::Skip,
        }
    }
}

#[cfg(test)]
mod tests;
