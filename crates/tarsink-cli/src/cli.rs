//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tarsink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a tar or tar.gz archive
    Extract(ExtractArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file, or `-` to read from stdin
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Drop `..` segments that would leave the output directory instead of
    /// aborting
    #[arg(long)]
    pub clamp_traversal: bool,

    /// Do not restore permission bits from the archive
    #[arg(long)]
    pub no_preserve_permissions: bool,

    /// Do not restore modification times from the archive
    #[arg(long)]
    pub no_preserve_mtime: bool,
}

impl ExtractArgs {
    /// Returns `true` if the archive is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.archive == Path::new("-")
    }
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
