//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io;
use std::io::Write;
use std::path::Path;
use tarsink_core::ExtractionReport;
use tarsink_core::MetadataStats;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct MetadataOutput {
    attempted: usize,
    applied: usize,
    failed: usize,
}

impl From<MetadataStats> for MetadataOutput {
    fn from(stats: MetadataStats) -> Self {
        Self {
            attempted: stats.attempted,
            applied: stats.applied,
            failed: stats.failed,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtractionOutput {
    output_dir: String,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    entries_skipped: usize,
    create_retries: usize,
    permissions: MetadataOutput,
    mtimes: MetadataOutput,
    duration_ms: u128,
}

impl ExtractionOutput {
    fn new(output_dir: &Path, report: &ExtractionReport) -> Self {
        Self {
            output_dir: output_dir.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            entries_skipped: report.entries_skipped,
            create_retries: report.create_retries,
            permissions: report.permissions.into(),
            mtimes: report.mtimes.into(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, output_dir: &Path, report: &ExtractionReport) -> Result<()> {
        let output = JsonOutput::success("extract", ExtractionOutput::new(output_dir, report));
        Self::output(&output)
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
