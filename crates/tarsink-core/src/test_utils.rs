//! Test utilities for building in-memory archives.
//!
//! This module provides reusable helpers for creating tar and tar.gz test
//! streams, reducing code duplication across unit, integration and property
//! tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Write;

use flate2::Compression;
use flate2::Crc;
use flate2::write::GzEncoder;

/// Default modification time used by the builder (2023-11-14T22:13:20Z).
pub const DEFAULT_MTIME: u64 = 1_700_000_000;

/// Creates an in-memory tar archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are created with mode 0o644.
///
/// # Examples
///
/// ```
/// use tarsink_core::test_utils::create_test_tar;
///
/// let tar_data = create_test_tar(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_tar(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(TarTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Compresses bytes as a single gzip member.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Sets the FHCRC flag on a single-member gzip stream and inserts a header
/// CRC16 after the fixed header.
///
/// `tamper` receives the correct CRC16 and returns the value to store, so
/// callers can produce either a valid or a corrupt header checksum.
#[must_use]
pub fn with_header_crc(member: &[u8], tamper: impl FnOnce(u16) -> u16) -> Vec<u8> {
    const FHCRC: u8 = 0x02;
    assert_eq!(member[3], 0, "member must not carry optional header fields");

    let mut header = member[..10].to_vec();
    header[3] |= FHCRC;
    let mut crc = Crc::new();
    crc.update(&header);
    let stored = tamper(u16::try_from(crc.sum() & 0xFFFF).unwrap());

    let mut out = header;
    out.extend_from_slice(&stored.to_le_bytes());
    out.extend_from_slice(&member[10..]);
    out
}

/// Builder for creating tar test archives with various entry types.
///
/// Paths go through `tar`'s own validation, except for
/// [`TarTestBuilder::add_raw_file`], which writes the name bytes verbatim so
/// hostile names such as `../x` or `/etc/passwd` can be produced.
///
/// # Examples
///
/// ```
/// use tarsink_core::test_utils::TarTestBuilder;
///
/// let tar_data = TarTestBuilder::new()
///     .add_directory("logs/")
///     .add_file("logs/app.log", b"hello")
///     .add_raw_file("../escape.txt", b"nope")
///     .build();
///
/// let tar_gz = TarTestBuilder::new().add_file("a.txt", b"a").build_gz();
/// assert_eq!(&tar_gz[..2], &[0x1f, 0x8b]);
/// ```
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    /// Creates a new tar test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    fn header(entry_type: tar::EntryType, size: u64, mode: u32, mtime: u64) -> tar::Header {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(entry_type);
        header.set_size(size);
        header.set_mode(mode);
        header.set_mtime(mtime);
        header
    }

    /// Adds a regular file with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_full(path, data, 0o644, DEFAULT_MTIME)
    }

    /// Adds a regular file with custom mode.
    #[must_use]
    pub fn add_file_with_mode(self, path: &str, data: &[u8], mode: u32) -> Self {
        self.add_file_full(path, data, mode, DEFAULT_MTIME)
    }

    /// Adds a regular file with custom modification time.
    #[must_use]
    pub fn add_file_with_mtime(self, path: &str, data: &[u8], mtime: u64) -> Self {
        self.add_file_full(path, data, 0o644, mtime)
    }

    /// Adds a regular file with custom mode and modification time.
    #[must_use]
    pub fn add_file_full(mut self, path: &str, data: &[u8], mode: u32, mtime: u64) -> Self {
        let mut header = Self::header(tar::EntryType::Regular, data.len() as u64, mode, mtime);
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a directory with mode 0o755.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = Self::header(tar::EntryType::Directory, 0, 0o755, DEFAULT_MTIME);
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a symlink.
    #[must_use]
    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = Self::header(tar::EntryType::Symlink, 0, 0o777, DEFAULT_MTIME);
        header.set_link_name(target).unwrap();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a regular file whose name bytes are written verbatim.
    ///
    /// The name must fit the 100-byte header field.
    #[must_use]
    pub fn add_raw_file(self, name: &str, data: &[u8]) -> Self {
        self.add_raw(name, tar::EntryType::Regular, data)
    }

    /// Adds a directory whose name bytes are written verbatim.
    #[must_use]
    pub fn add_raw_directory(self, name: &str) -> Self {
        self.add_raw(name, tar::EntryType::Directory, &[])
    }

    fn add_raw(mut self, name: &str, entry_type: tar::EntryType, data: &[u8]) -> Self {
        let mode = if entry_type.is_dir() { 0o755 } else { 0o644 };
        let mut header = Self::header(entry_type, data.len() as u64, mode, DEFAULT_MTIME);
        let field = &mut header.as_old_mut().name;
        assert!(name.len() <= field.len(), "raw name too long: {name}");
        field.fill(0);
        field[..name.len()].copy_from_slice(name.as_bytes());
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Builds and returns the tar archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Builds the archive and wraps it in gzip.
    #[must_use]
    pub fn build_gz(self) -> Vec<u8> {
        gzip(&self.build())
    }
}

impl Default for TarTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
