//! Token and rule-table printing.

use std::io::Write;

use calc_lexer::{scan_with, ScanOptions, RULES};

use crate::error::CliError;

/// Program lexed when no input is given.
pub const SAMPLE_PROGRAM: &str = "\nx = 10;\ny = x + 5;\n";

/// Write one line per token as it is scanned.
///
/// Tokens before a mismatch are written before the error is returned.
pub fn write_tokens<W: Write>(
    out: &mut W,
    name: &str,
    text: &str,
    options: ScanOptions,
    positions: bool,
) -> Result<usize, CliError> {
    let mut count = 0;
    for item in scan_with(text, options) {
        let token = item.map_err(|error| CliError::Lexical {
            name: name.to_owned(),
            text: text.to_owned(),
            error,
        })?;
        if positions {
            writeln!(out, "{} {token}", token.position)?;
        } else {
            writeln!(out, "{token}")?;
        }
        count += 1;
    }
    Ok(count)
}

/// Write the rule table, highest priority first.
pub fn write_rules<W: Write>(out: &mut W) -> Result<(), CliError> {
    for (priority, rule) in RULES.iter().enumerate() {
        let note = if rule.category.is_emitted() {
            ""
        } else {
            "  (not emitted)"
        };
        writeln!(
            out,
            "{:>2}  {:<10}  {}{note}",
            priority + 1,
            rule.category,
            rule.pattern
        )?;
    }
    Ok(())
}
