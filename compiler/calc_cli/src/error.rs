//! CLI error type and its rendering.

use std::io;
use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use calc_lexer::LexicalError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write tokens: {0}")]
    Write(#[from] io::Error),

    /// The scan hit a character no rule accepts.
    #[error("{name}: {error}")]
    Lexical {
        name: String,
        text: String,
        error: LexicalError,
    },
}

impl CliError {
    /// Write the error to stderr. Lexical errors get a labelled source
    /// snippet; the rest are one line.
    pub fn emit(&self) {
        if let CliError::Lexical { name, text, error } = self {
            if report_lexical(name, text, error).is_ok() {
                return;
            }
        }
        eprintln!("error: {self}");
        if matches!(self, CliError::Usage(_)) {
            eprintln!();
            eprintln!("{}", crate::args::USAGE);
        }
    }
}

fn report_lexical(name: &str, text: &str, error: &LexicalError) -> io::Result<()> {
    // Every byte before the error is ASCII, so byte offsets are char offsets.
    Report::build(ReportKind::Error, name, error.offset)
        .with_message(error.to_string())
        .with_label(
            Label::new((name, error.span()))
                .with_message("no token rule matches this character")
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name, Source::from(text)))
}
