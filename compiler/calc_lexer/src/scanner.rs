//! The scan loop.
//!
//! [`Scanner`] pulls raw matches from the logos DFA, tracks line numbers
//! across skipped whitespace, and turns each match into a token, a skip,
//! or the terminal error.
//!
//! Columns are byte distances from the line start. Every byte before a
//! successful match is ASCII (anything else is a mismatch and ends the
//! scan), so they are also character distances.

use std::fmt;
use std::iter::FusedIterator;

use logos::Logos;
use tracing::{debug, trace};

use crate::rules::RawToken;
use crate::{LexicalError, LineTracking, Position, ScanOptions, Token, TokenCategory};

/// Where the scanner stands in the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct ScanCursor {
    /// Byte offset of the next unconsumed character.
    offset: usize,
    line: u32,
    /// Byte offset of the first character of `line`.
    line_start: usize,
}

impl ScanCursor {
    const fn start() -> Self {
        ScanCursor {
            offset: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Saturates the column at `u32::MAX`.
    fn position_of(&self, offset: usize) -> Position {
        let column = offset - self.line_start + 1;
        Position::new(self.line, u32::try_from(column).unwrap_or(u32::MAX))
    }

    fn advance_to(&mut self, end: usize) {
        self.offset = end;
    }

    /// Advance over whitespace starting at `start`, moving to a new line for
    /// each `\n` in it.
    fn advance_over(&mut self, start: usize, whitespace: &str) {
        let bytes = whitespace.as_bytes();
        if let Some(last) = memchr::memrchr(b'\n', bytes) {
            let newlines = memchr::memchr_iter(b'\n', bytes).count();
            let newlines = u32::try_from(newlines).unwrap_or(u32::MAX);
            self.line = self.line.saturating_add(newlines);
            self.line_start = start + last + 1;
        }
        self.offset = start + bytes.len();
    }
}

/// Outcome of one match.
enum Step<'src> {
    Token(Token<'src>),
    Skipped,
    Error(LexicalError),
    End,
}

/// Lazy token stream over one input buffer.
///
/// Yields `Ok(token)` in input order. The first unrecognized character is
/// yielded as `Err` and ends the stream.
pub struct Scanner<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    cursor: ScanCursor,
    options: ScanOptions,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'src str, options: ScanOptions) -> Self {
        Scanner {
            source,
            raw: RawToken::lexer(source),
            cursor: ScanCursor::start(),
            options,
            finished: false,
        }
    }

    /// Byte offset of the next unconsumed character.
    ///
    /// For callers that stop pulling early and want to report or resume
    /// from where the scan left off. After an error this is the end of the
    /// last token or whitespace run before the mismatch.
    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    /// Line and column of [`Scanner::offset`], for the same diagnostics.
    pub fn position(&self) -> Position {
        self.cursor.position_of(self.cursor.offset)
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    fn step(&mut self) -> Step<'src> {
        if self.finished {
            return Step::End;
        }
        let Some(result) = self.raw.next() else {
            self.finished = true;
            return Step::End;
        };

        let span = self.raw.span();
        // Computed before this match can move the cursor to a new line.
        let position = self.cursor.position_of(span.start);

        match result {
            Ok(RawToken::Skip) => {
                match self.options.line_tracking {
                    LineTracking::Accurate => {
                        self.cursor.advance_over(span.start, self.raw.slice());
                    }
                    LineTracking::Reference => self.cursor.advance_to(span.end),
                }
                Step::Skipped
            }
            Ok(raw) => {
                self.cursor.advance_to(span.end);
                let category = TokenCategory::from(raw);
                Step::Token(Token::new(category, self.raw.slice(), position, span.start))
            }
            Err(()) => {
                self.finished = true;
                // logos may stop mid-character on non-ASCII input; report the
                // whole character starting at the mismatch.
                let character = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Step::Error(LexicalError::new(character, position, span.start))
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Step::Token(token) => {
                    trace!(
                        category = %token.category,
                        lexeme = token.lexeme,
                        line = token.position.line,
                        column = token.position.column,
                        "token"
                    );
                    return Some(Ok(token));
                }
                Step::Skipped => {}
                Step::Error(err) => {
                    debug!(offset = err.offset, "{err}");
                    return Some(Err(err));
                }
                Step::End => return None,
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("len", &self.source.len())
            .field("cursor", &self.cursor)
            .field("options", &self.options)
            .field("finished", &self.finished)
            .finish()
    }
}
