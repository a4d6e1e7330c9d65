//! Streaming tar and tar.gz extraction.
//!
//! `tarsink-core` reads an archive from any [`std::io::Read`] source, detects
//! whether it is plain tar or gzip-compressed tar from its first two bytes,
//! and materializes every entry under a destination directory in a single
//! forward pass. Entry paths are resolved lexically and cannot escape the
//! destination unless explicitly clamped.
//!
//! # Examples
//!
//! ```no_run
//! use tarsink_core::ExtractOptions;
//! use tarsink_core::extract_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_file("archive.tar.gz", "/output/dir", &ExtractOptions::default())?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```
//!
//! Reading from any stream:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stdin = std::io::stdin().lock();
//! let report = tarsink_core::extract(stdin, "/output/dir")?;
//! println!("{} bytes written", report.bytes_written);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod io;
pub mod report;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract;
pub use api::extract_file;
pub use api::extract_with_options;
pub use config::ExtractOptions;
pub use config::TraversalPolicy;
pub use error::ExtractionError;
pub use error::Result;
pub use extraction::Extractor;
pub use formats::ArchiveType;
pub use report::ExtractionReport;
pub use report::MetadataStats;
pub use report::RestoreOutcome;

// Re-export types module for easier access
pub use types::ArchiveEntry;
pub use types::EntryKind;
pub use types::EntryPath;
