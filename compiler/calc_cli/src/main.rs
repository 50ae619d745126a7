//! calc-lex: print the tokens of a calc program.

mod args;
mod dump;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Once;

use args::{Command, Input, LexArgs};
use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=calc_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.emit();
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args::parse_args(args)? {
        Command::Help => writeln!(out, "{}", args::USAGE)?,
        Command::Rules => dump::write_rules(&mut out)?,
        Command::Lex(lex) => lex_input(&mut out, &lex)?,
    }
    out.flush()?;
    Ok(())
}

fn lex_input<W: Write>(out: &mut W, lex: &LexArgs) -> Result<(), CliError> {
    let (name, text) = read_input(&lex.input)?;
    tracing::debug!(input = %name, len = text.len(), "lexing");

    let count = dump::write_tokens(out, &name, &text, lex.options, lex.positions)?;
    tracing::debug!(count, "done");
    Ok(())
}

fn read_input(input: &Input) -> Result<(String, String), CliError> {
    match input {
        Input::Sample => Ok(("<sample>".to_owned(), dump::SAMPLE_PROGRAM.to_owned())),
        Input::Stdin => {
            let text = io::read_to_string(io::stdin()).map_err(CliError::Stdin)?;
            Ok(("<stdin>".to_owned(), text))
        }
        Input::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok((path.display().to_string(), text))
        }
    }
}
