//! Extraction options.

/// How entry paths that climb above the destination root are handled.
///
/// Paths are resolved lexically, so `a/../b` is always fine. Only a `..`
/// that would step above the root is affected by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalPolicy {
    /// Abort extraction with `ExtractionError::PathTraversal`.
    #[default]
    Reject,
    /// Drop the offending `..` segments so the entry lands inside the root.
    Clamp,
}

/// Options controlling a single extraction run.
///
/// # Examples
///
/// ```
/// use tarsink_core::ExtractOptions;
/// use tarsink_core::TraversalPolicy;
///
/// // Secure defaults
/// let options = ExtractOptions::default();
/// assert_eq!(options.traversal, TraversalPolicy::Reject);
///
/// // Content only, no metadata restore
/// let options = ExtractOptions::default()
///     .with_traversal(TraversalPolicy::Clamp)
///     .with_preserve_permissions(false)
///     .with_preserve_mtime(false);
/// assert!(!options.preserve_mtime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Handling of paths escaping the destination root.
    pub traversal: TraversalPolicy,

    /// Restore permission bits recorded in the archive.
    pub preserve_permissions: bool,

    /// Restore modification times recorded in the archive.
    pub preserve_mtime: bool,
}

impl Default for ExtractOptions {
    /// Creates options with default settings.
    ///
    /// Default values:
    /// - `traversal`: `TraversalPolicy::Reject`
    /// - `preserve_permissions`: true
    /// - `preserve_mtime`: true
    fn default() -> Self {
        Self {
            traversal: TraversalPolicy::Reject,
            preserve_permissions: true,
            preserve_mtime: true,
        }
    }
}

impl ExtractOptions {
    /// Sets the traversal policy.
    #[must_use]
    pub const fn with_traversal(mut self, traversal: TraversalPolicy) -> Self {
        self.traversal = traversal;
        self
    }

    /// Enables or disables permission restore.
    #[must_use]
    pub const fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Enables or disables modification time restore.
    #[must_use]
    pub const fn with_preserve_mtime(mut self, preserve: bool) -> Self {
        self.preserve_mtime = preserve;
        self
    }
}
