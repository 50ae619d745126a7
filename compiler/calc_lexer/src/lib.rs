//! Lexer for the calc assignment language.
//!
//! Turns a source buffer into a lazy sequence of classified [`Token`]s.
//! Scanning stops at the first character no rule recognizes.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Scanner (logos DFA over RULES) ──► Result<Token, LexicalError>*
//! ```
//!
//! The grammar is the twelve-entry [`RULES`] table. Whitespace is consumed
//! but never emitted; anything else unrecognized ends the scan with a
//! [`LexicalError`].
//!
//! # Example
//!
//! ```
//! use calc_lexer::{scan, TokenCategory};
//!
//! let kinds: Vec<_> = scan("x = 10;")
//!     .map(|t| t.map(|t| t.category))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenCategory::Identifier,
//!         TokenCategory::Assign,
//!         TokenCategory::Number,
//!         TokenCategory::End,
//!     ]
//! );
//! ```

mod error;
mod options;
mod rules;
mod scanner;
mod token;

pub use error::LexicalError;
pub use options::{LineTracking, ScanOptions};
pub use rules::{TokenCategory, TokenRule, RULES};
pub use scanner::Scanner;
pub use token::{Position, Token};

/// Lazily scan `source` with default options.
///
/// Tokens are produced as the iterator is pulled. A mismatch is yielded
/// once as `Err` after every token that precedes it; the iterator is
/// exhausted afterwards.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Lazily scan `source` under explicit options.
pub fn scan_with(source: &str, options: ScanOptions) -> Scanner<'_> {
    Scanner::with_options(source, options)
}

/// Scan all of `source` eagerly.
///
/// On a mismatch only the error is returned; tokens scanned before it are
/// dropped. Iterate [`scan`] directly to observe that prefix.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_all(source: &str) -> Result<Vec<Token<'_>>, LexicalError> {
    let tokens = scan(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}
