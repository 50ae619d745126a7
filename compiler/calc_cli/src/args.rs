//! Command-line argument parsing.
//!
//! Hand-rolled over `std::env::args`; the surface is a path and a few flags.

use std::path::PathBuf;

use calc_lexer::{LineTracking, ScanOptions};

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: calc-lex [options] [FILE]

Print the tokens of FILE, or of standard input when FILE is `-`.
Without FILE, lexes a built-in sample program.

Options:
  -p, --positions      Prefix each token with line:column
  --reference-lines    Never advance the line counter (reference output)
  --rules              Print the token rules in priority order
  -h, --help           Show this help";

/// Where the source text comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Sample,
    Stdin,
    File(PathBuf),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexArgs {
    pub input: Input,
    pub positions: bool,
    pub options: ScanOptions,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lex(LexArgs),
    Rules,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut positions = false;
    let mut options = ScanOptions::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--rules" => return Ok(Command::Rules),
            "-p" | "--positions" => positions = true,
            "--reference-lines" => {
                options = options.with_line_tracking(LineTracking::Reference);
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::Usage(format!("unknown option `{flag}`")));
            }
            path => {
                if input.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument `{path}`")));
                }
                input = Some(if path == "-" {
                    Input::Stdin
                } else {
                    Input::File(PathBuf::from(path))
                });
            }
        }
    }

    Ok(Command::Lex(LexArgs {
        input: input.unwrap_or(Input::Sample),
        positions,
        options,
    }))
}
