//! Lines command implementation.

use super::answer_code;
use crate::cli::LinesAction;
use crate::cli::LinesArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use filekit_core::lines;
use std::process::ExitCode;

pub fn execute(args: &LinesArgs, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    match &args.action {
        LinesAction::Read { file } => {
            let current = add_context(lines::read_lines(file))?;
            formatter.format_lines("lines.read", file, &current)?;
        }
        LinesAction::Write { file, lines: new } => {
            add_context(lines::write_lines(file, new))?;
            formatter.format_lines("lines.write", file, new)?;
        }
        LinesAction::Add { file, lines: extra } => {
            let current = match extra.as_slice() {
                [single] => add_context(lines::add_line(file, single))?,
                _ => add_context(lines::add_lines(file, extra))?,
            };
            formatter.format_lines("lines.add", file, &current)?;
        }
        LinesAction::Remove {
            file,
            lines: remove,
            all,
        } => {
            let current = if *all {
                add_context(lines::remove_lines(file, remove))?
            } else {
                let mut current = Vec::new();
                for line in remove {
                    current = add_context(lines::remove_line(file, line))?;
                }
                current
            };
            formatter.format_lines("lines.remove", file, &current)?;
        }
        LinesAction::Contains {
            file,
            lines: wanted,
        } => {
            let found = match wanted.as_slice() {
                [single] => add_context(lines::contains_line(file, single))?,
                _ => add_context(lines::contains_lines(file, wanted))?,
            };
            formatter.format_answer("lines.contains", file, found)?;
            return Ok(answer_code(found));
        }
    }

    Ok(ExitCode::SUCCESS)
}
