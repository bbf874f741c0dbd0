//! filekit - command-line utility for file, line and directory chores and
//! flat zip packaging.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for failed operations. `1` is reserved for a `false` answer.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let result = match &cli.command {
        cli::Commands::Zip(args) => {
            commands::zip::execute(args, &*formatter, cli.quiet || cli.json)
        }
        cli::Commands::Text(args) => commands::text::execute(args, &*formatter),
        cli::Commands::Lines(args) => commands::lines::execute(args, &*formatter),
        cli::Commands::Dir(args) => commands::dir::execute(args, &*formatter),
        cli::Commands::File(args) => commands::file::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            formatter.format_error(cli.command.operation(), &err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Installs a stderr `tracing` subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
