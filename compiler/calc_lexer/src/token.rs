//! Emitted tokens and their source positions.

use std::fmt;
use std::ops::Range;

use crate::TokenCategory;

/// 1-based line and column of a token's first character.
///
/// Both saturate at `u32::MAX`; inputs past 4 GiB report clamped values.
/// [`Token::offset`] stays exact.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A classified, positioned slice of the input.
///
/// `category` is never [`TokenCategory::Skip`] or [`TokenCategory::Mismatch`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub category: TokenCategory,
    /// The matched text, borrowed from the input.
    pub lexeme: &'src str,
    pub position: Position,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl<'src> Token<'src> {
    pub(crate) fn new(
        category: TokenCategory,
        lexeme: &'src str,
        position: Position,
        offset: usize,
    ) -> Self {
        debug_assert!(category.is_emitted(), "{category} tokens are never emitted");
        debug_assert!(!lexeme.is_empty(), "empty lexeme at offset {offset}");
        Token {
            category,
            lexeme,
            position,
            offset,
        }
    }

    /// Byte range of the lexeme in the input.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.lexeme.len()
    }

    /// The `(category, lexeme)` pair used for interop and printing.
    pub fn pair(&self) -> (&'static str, &'src str) {
        (self.category.name(), self.lexeme)
    }
}

/// Renders as `(CATEGORY, "lexeme")`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.category, self.lexeme)
    }
}
