//! File command implementation.

use super::answer_code;
use crate::cli::FileAction;
use crate::cli::FileArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use filekit_core::files;
use std::process::ExitCode;

pub fn execute(args: &FileArgs, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    match &args.action {
        FileAction::Touch { file } => {
            let touched = add_context(files::touch(file))?;
            formatter.format_done(
                "file.touch",
                &touched,
                &format!("Touched {}", touched.display()),
            )?;
        }
        FileAction::Delete { file } => {
            if !files::delete_file(file) {
                bail!(
                    "Could not delete '{}'\n\
                     HINT: The path may not exist, be a non-empty directory, or be read-only.",
                    file.display()
                );
            }
            formatter.format_done("file.delete", file, &format!("Deleted {}", file.display()))?;
        }
        FileAction::Info { file } => {
            let info = add_context(files::metadata(file))?;
            formatter.format_file_info(&info)?;
        }
        FileAction::Exists { file } => {
            let exists = files::exists(file);
            formatter.format_answer("file.exists", file, exists)?;
            return Ok(answer_code(exists));
        }
        FileAction::IsEmpty { file } => {
            let empty = files::is_empty(file);
            formatter.format_answer("file.is-empty", file, empty)?;
            return Ok(answer_code(empty));
        }
    }

    Ok(ExitCode::SUCCESS)
}
