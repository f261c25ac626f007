//! Skillrank - skill-driven course recommendations
//!
//! Ranks a course corpus against a set of skills with a pheromone-reinforced
//! sampler and records feedback on the results.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use skillrank_core::error::{ExitCode as SkillrankExitCode, SkillrankError};
use skillrank_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv = ArgvHints::scan(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before it is parsed. If the
            // user asked for JSON, emit a structured error envelope.
            if argv.format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    // `recommend` with no skills is the same failure as a blank query
                    clap::error::ErrorKind::MissingRequiredArgument if argv.recommend => {
                        SkillrankError::EmptyQuery
                    }
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        SkillrankError::UsageError(err.to_string())
                    }
                    _ => SkillrankError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(SkillrankExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
                if matches!(e, SkillrankError::EmptyQuery) {
                    eprintln!("hint: pass one or more skills, e.g. `skillrank recommend python,sql`");
                }
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// What can be learned from raw argv before clap has accepted it
#[derive(Debug, Default, PartialEq)]
struct ArgvHints {
    format_json: bool,
    recommend: bool,
}

impl ArgvHints {
    fn scan(args: impl IntoIterator<Item = String>) -> Self {
        let mut hints = ArgvHints::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--format" {
                if args.next().is_some_and(|v| v == "json") {
                    hints.format_json = true;
                }
            } else if arg == "--format=json" {
                hints.format_json = true;
            } else if arg == "recommend" {
                hints.recommend = true;
            }
        }
        hints
    }
}
