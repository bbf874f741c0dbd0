//! Text command implementation.

use super::answer_code;
use crate::cli::TextAction;
use crate::cli::TextArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use filekit_core::text;
use std::process::ExitCode;

pub fn execute(args: &TextArgs, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    match &args.action {
        TextAction::Read { file } => {
            let content = add_context(text::read_string(file))?;
            formatter.format_text("text.read", file, &content)?;
        }
        TextAction::Write { file, text: value } => {
            add_context(text::write_string(file, value))?;
            formatter.format_done(
                "text.write",
                file,
                &format!("Wrote {} bytes to {}", value.len(), file.display()),
            )?;
        }
        TextAction::Append { file, text: value } => {
            let content = add_context(text::add_string(file, value))?;
            formatter.format_text("text.append", file, &content)?;
        }
        TextAction::Remove { file, text: value } => {
            let content = add_context(text::remove_string(file, value))?;
            formatter.format_text("text.remove", file, &content)?;
        }
        TextAction::Contains { file, text: value } => {
            let found = add_context(text::contains_string(file, value))?;
            formatter.format_answer("text.contains", file, found)?;
            return Ok(answer_code(found));
        }
    }

    Ok(ExitCode::SUCCESS)
}
