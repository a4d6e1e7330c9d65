//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use std::io;
use tarsink_core::ExtractOptions;
use tarsink_core::TraversalPolicy;
use tarsink_core::extract_file;
use tarsink_core::extract_with_options;
use tracing::debug;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let options = options_from_args(args);
    debug!(?options, output_dir = %output_dir.display(), "starting extraction");

    let report = if args.reads_stdin() {
        let stdin = io::stdin().lock();
        add_archive_context(
            extract_with_options(stdin, &output_dir, &options),
            &args.archive,
        )?
    } else {
        add_archive_context(
            extract_file(&args.archive, &output_dir, &options),
            &args.archive,
        )?
    };

    formatter.format_extraction_result(&output_dir, &report)?;

    Ok(())
}

fn options_from_args(args: &ExtractArgs) -> ExtractOptions {
    let traversal = if args.clamp_traversal {
        TraversalPolicy::Clamp
    } else {
        TraversalPolicy::Reject
    };

    ExtractOptions::default()
        .with_traversal(traversal)
        .with_preserve_permissions(!args.no_preserve_permissions)
        .with_preserve_mtime(!args.no_preserve_mtime)
}
