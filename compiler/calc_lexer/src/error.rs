//! Lexical error raised on the first unrecognized character.

use std::ops::Range;

use crate::Position;

/// A character matched none of the token rules.
///
/// Fatal to the scan that produced it. Tokens yielded before it stay valid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("unexpected character {character:?} at line {line}, column {column}")]
pub struct LexicalError {
    /// The offending character.
    pub character: char,
    pub line: u32,
    pub column: u32,
    /// Byte offset of the offending character.
    pub offset: usize,
}

impl LexicalError {
    pub(crate) fn new(character: char, position: Position, offset: usize) -> Self {
        LexicalError {
            character,
            line: position.line,
            column: position.column,
            offset,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Byte range of the offending character.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.character.len_utf8()
    }
}
