//! Resolved entry path type for archive extraction.

use crate::ExtractionError;
use crate::Result;
use crate::TraversalPolicy;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// An archive entry path resolved relative to the destination root.
///
/// `EntryPath` can only be constructed through [`EntryPath::resolve`], which
/// guarantees the path:
/// - is relative
/// - contains only normal components (no `.`, `..`, root or prefix)
/// - therefore stays inside the destination when joined onto it
///
/// An empty `EntryPath` denotes the destination root itself.
///
/// # Examples
///
/// ```
/// use tarsink_core::TraversalPolicy;
/// use tarsink_core::types::EntryPath;
///
/// let path = EntryPath::resolve("./logs//app.log", TraversalPolicy::Reject)?;
/// assert_eq!(path.as_str(), "logs/app.log");
///
/// let path = EntryPath::resolve("/x/../y", TraversalPolicy::Reject)?;
/// assert_eq!(path.as_str(), "y");
///
/// assert!(EntryPath::resolve("../etc/passwd", TraversalPolicy::Reject).is_err());
///
/// let path = EntryPath::resolve("../etc/passwd", TraversalPolicy::Clamp)?;
/// assert_eq!(path.as_str(), "etc/passwd");
/// # Ok::<(), tarsink_core::ExtractionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(String);

impl EntryPath {
    /// Resolves a stored archive path.
    ///
    /// # Resolution Steps
    ///
    /// 1. Treat the stored path as absolute from the archive root by
    ///    prefixing it with `/`
    /// 2. Canonicalize `\` to `/` and collapse `//` to `/`
    /// 3. Strip one leading `.`
    /// 4. Walk the segments: empty and `.` segments are dropped, `..` pops
    ///    the previous segment
    /// 5. A `..` with nothing left to pop is handled by `policy`
    /// 6. A segment the host platform reads as a root or prefix (`C:` on
    ///    Windows) is handled by `policy` as well; `Clamp` drops it
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::PathTraversal` when the path climbs above the
    /// root or carries a platform prefix, and `policy` is
    /// `TraversalPolicy::Reject`.
    pub fn resolve(raw: &str, policy: TraversalPolicy) -> Result<Self> {
        let normalized = normalize(raw);

        let mut segments: Vec<&str> = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() && policy == TraversalPolicy::Reject {
                        return Err(ExtractionError::PathTraversal {
                            path: PathBuf::from(raw),
                        });
                    }
                }
                normal if is_plain_segment(normal) => segments.push(normal),
                _ => {
                    if policy == TraversalPolicy::Reject {
                        return Err(ExtractionError::PathTraversal {
                            path: PathBuf::from(raw),
                        });
                    }
                }
            }
        }

        Ok(Self(segments.join("/")))
    }

    /// Returns the resolved path as a slash-separated string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the resolved path as a relative `Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Returns `true` if the path denotes the destination root itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins this path onto a destination root.
    #[must_use]
    pub fn join_onto(&self, root: &Path) -> PathBuf {
        if self.is_root() {
            root.to_path_buf()
        } else {
            root.join(self.as_path())
        }
    }
}

/// Returns `true` if `segment` is a single normal component on this platform.
fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Applies the textual normalization of a stored path.
///
/// `//` is collapsed in a single non-overlapping pass, so `///` becomes `//`.
/// Segment resolution later drops the remaining empty segment.
fn normalize(raw: &str) -> String {
    let rooted = format!("/{raw}").replace('\\', "/").replace("//", "/");
    match rooted.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None => rooted,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reject(raw: &str) -> Result<EntryPath> {
        EntryPath::resolve(raw, TraversalPolicy::Reject)
    }

    fn clamp(raw: &str) -> EntryPath {
        EntryPath::resolve(raw, TraversalPolicy::Clamp).unwrap()
    }

    #[test]
    fn test_normalize_prefixes_root() {
        assert_eq!(normalize("a/b"), "/a/b");
        assert_eq!(normalize("/a/b"), "/a/b");
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize("a\\b\\c.txt"), "/a/b/c.txt");
    }

    #[test]
    fn test_normalize_collapses_doubled_slashes_once() {
        assert_eq!(normalize("a//b"), "/a/b");
        assert_eq!(normalize("a///b"), "/a//b");
    }

    #[test]
    fn test_simple_relative_path() {
        assert_eq!(reject("logs/app.log").unwrap().as_str(), "logs/app.log");
    }

    #[test]
    fn test_current_dir_segments_dropped() {
        assert_eq!(reject("./logs/./app.log").unwrap().as_str(), "logs/app.log");
        assert_eq!(reject("a/./b/").unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_directory_trailing_slash() {
        assert_eq!(reject("logs/").unwrap().as_str(), "logs");
    }

    #[test]
    fn test_root_entries() {
        assert!(reject("./").unwrap().is_root());
        assert!(reject("/").unwrap().is_root());
        assert!(reject("").unwrap().is_root());
    }

    #[test]
    fn test_absolute_path_is_rooted_in_archive() {
        assert_eq!(reject("/etc/passwd").unwrap().as_str(), "etc/passwd");
    }

    #[test]
    fn test_inner_parent_dir_resolves_lexically() {
        assert_eq!(reject("/x/../y").unwrap().as_str(), "y");
        assert_eq!(reject("a/b/../../c").unwrap().as_str(), "c");
    }

    #[test]
    fn test_escaping_parent_dir_rejected() {
        for raw in ["../etc/passwd", "a/../../etc/passwd", "..", "..\\evil.dll"] {
            let result = reject(raw);
            assert!(
                matches!(result, Err(ExtractionError::PathTraversal { .. })),
                "path {raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_escaping_parent_dir_clamped() {
        assert_eq!(clamp("../etc/passwd").as_str(), "etc/passwd");
        assert_eq!(clamp("a/../../../b").as_str(), "b");
        assert!(clamp("..").is_root());
        assert_eq!(clamp("..\\evil.dll").as_str(), "evil.dll");
    }

    #[test]
    fn test_rejection_reports_raw_path() {
        let err = reject("a/../../x").unwrap_err();
        assert_eq!(err.path(), Some(Path::new("a/../../x")));
    }

    #[test]
    fn test_join_onto() {
        let root = Path::new("/dest");
        assert_eq!(
            reject("a/b.txt").unwrap().join_onto(root),
            PathBuf::from("/dest/a/b.txt")
        );
        assert_eq!(reject("./").unwrap().join_onto(root), PathBuf::from("/dest"));
    }

    #[test]
    fn test_plain_segments() {
        for segment in ["logs", "app.log", ".hidden", "..b"] {
            assert!(is_plain_segment(segment), "{segment}");
        }
        assert!(!is_plain_segment(""));
    }

    #[cfg(windows)]
    #[test]
    fn test_drive_prefix_handled_by_policy() {
        assert!(matches!(
            reject("C:/evil.txt"),
            Err(ExtractionError::PathTraversal { .. })
        ));
        assert!(matches!(
            reject("x/C:/evil.txt"),
            Err(ExtractionError::PathTraversal { .. })
        ));
        assert_eq!(clamp("C:/evil.txt").as_str(), "evil.txt");
        assert_eq!(
            clamp("C:/evil.txt").join_onto(Path::new("D:\\dest")),
            PathBuf::from("D:\\dest\\evil.txt")
        );
    }

    #[test]
    fn test_dot_files_kept() {
        assert_eq!(reject(".hidden").unwrap().as_str(), ".hidden");
        assert_eq!(reject("a/..b").unwrap().as_str(), "a/..b");
    }
}
