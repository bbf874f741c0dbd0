//! Zip command implementation.

use crate::cli::ZipArgs;
use crate::error::add_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use filekit_core::NoopProgress;
use filekit_core::PackConfig;
use filekit_core::pack_directory_with;
use std::process::ExitCode;

pub fn execute(args: &ZipArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<ExitCode> {
    let mut config = PackConfig::default()
        .with_follow_symlinks(args.follow_symlinks)
        .with_preserve_permissions(!args.no_permissions);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    // Progress bar only on an interactive terminal with human output
    let report = if !quiet && CliProgress::should_show() {
        let mut progress = CliProgress::new("Packing");
        add_context(pack_directory_with(
            &args.source,
            &args.output,
            &config,
            &mut progress,
        ))?
    } else {
        add_context(pack_directory_with(
            &args.source,
            &args.output,
            &config,
            &mut NoopProgress,
        ))?
    };

    formatter.format_pack_result(&args.output, &report)?;

    Ok(ExitCode::SUCCESS)
}
