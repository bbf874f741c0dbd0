//! Dir command implementation.

use crate::cli::DirAction;
use crate::cli::DirArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use filekit_core::dirs;
use std::process::ExitCode;

pub fn execute(args: &DirArgs, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    match &args.action {
        DirAction::Create { dir } => {
            let created = add_context(dirs::create_directory(dir))?;
            formatter.format_done(
                "dir.create",
                &created,
                &format!("Created {}", created.display()),
            )?;
        }
        DirAction::Clear { dir } => {
            let cleared = add_context(dirs::clear_directory(dir))?;
            formatter.format_done(
                "dir.clear",
                &cleared,
                &format!("Cleared {}", cleared.display()),
            )?;
        }
        DirAction::Delete { dir } => {
            let deleted = add_context(dirs::delete_directory(dir))?;
            formatter.format_done(
                "dir.delete",
                &deleted,
                &format!("Deleted {}", deleted.display()),
            )?;
        }
        DirAction::List { dir } => {
            let names = add_context(dirs::list_file_names(dir))?;
            formatter.format_names("dir.list", dir, &names)?;
        }
        DirAction::Copy { from, to } => {
            add_context(dirs::copy_directory(from, to))?;
            formatter.format_done(
                "dir.copy",
                to,
                &format!("Copied {} into {}", from.display(), to.display()),
            )?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
