//! Subcommand implementations.

pub mod completion;
pub mod dir;
pub mod file;
pub mod lines;
pub mod text;
pub mod zip;

use std::process::ExitCode;

/// Maps a yes/no answer to the process exit code: 0 for yes, 1 for no.
pub fn answer_code(answer: bool) -> ExitCode {
    if answer {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
