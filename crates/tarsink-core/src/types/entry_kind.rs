//! Archive entry kind enumeration.

/// Kind of an entry in a tar stream, as far as extraction cares.
///
/// Only directories get special treatment. Everything that is not a
/// directory is materialized through the regular-file path, including
/// symlinks, hardlinks and device nodes.
///
/// # Examples
///
/// ```
/// use tarsink_core::types::EntryKind;
///
/// let kind = EntryKind::from_tar(tar::EntryType::Directory, "logs/");
/// assert!(kind.is_directory());
///
/// // Legacy archives mark directories with a trailing slash only
/// let kind = EntryKind::from_tar(tar::EntryType::Regular, "logs/");
/// assert!(kind.is_directory());
///
/// let kind = EntryKind::from_tar(tar::EntryType::Symlink, "current");
/// assert_eq!(kind, EntryKind::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,

    /// Any other tar entry type. Materialized like a regular file.
    Other,
}

impl EntryKind {
    /// Classifies a tar header type together with its stored path.
    ///
    /// A regular-file header whose path ends in `/` is a directory, which is
    /// how pre-POSIX tar writers recorded directories.
    #[must_use]
    pub fn from_tar(entry_type: tar::EntryType, raw_path: &str) -> Self {
        match entry_type {
            tar::EntryType::Directory => Self::Directory,
            tar::EntryType::Regular | tar::EntryType::Continuous
                if raw_path.ends_with('/') =>
            {
                Self::Directory
            }
            tar::EntryType::Regular | tar::EntryType::Continuous => Self::File,
            _ => Self::Other,
        }
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_header() {
        let kind = EntryKind::from_tar(tar::EntryType::Directory, "a/b");
        assert!(kind.is_directory());
    }

    #[test]
    fn test_regular_file() {
        let kind = EntryKind::from_tar(tar::EntryType::Regular, "a/b.txt");
        assert_eq!(kind, EntryKind::File);
        assert!(!kind.is_directory());
    }

    #[test]
    fn test_legacy_trailing_slash_directory() {
        let kind = EntryKind::from_tar(tar::EntryType::Regular, "a/b/");
        assert_eq!(kind, EntryKind::Directory);
    }

    #[test]
    fn test_other_kinds_are_not_directories() {
        for entry_type in [
            tar::EntryType::Symlink,
            tar::EntryType::Link,
            tar::EntryType::Char,
            tar::EntryType::Block,
            tar::EntryType::Fifo,
        ] {
            let kind = EntryKind::from_tar(entry_type, "node");
            assert_eq!(kind, EntryKind::Other);
            assert!(!kind.is_directory());
        }
    }
}
