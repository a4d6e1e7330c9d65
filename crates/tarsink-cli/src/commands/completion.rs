//! Shell completion generation command.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::io::Write;

/// Writes completions for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    generate(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tarsink", out);
}
