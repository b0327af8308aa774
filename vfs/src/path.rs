//! Resource path parsing.

use std::fmt;

use crate::VfsError;

/// A normalized resource path.
///
/// Parsing:
/// - replaces backslashes with forward slashes
/// - collapses redundant separators (`a///b` → `a/b`)
/// - drops `.` segments
/// - rejects `..` segments (no path traversal)
/// - strips leading and trailing slashes
///
/// The first segment names the source a [`Vfs`](crate::Vfs) routes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    normalized: String,
}

impl ResourcePath {
    /// Parse and normalize a raw path.
    pub fn parse(raw: &str) -> Result<Self, VfsError> {
        let unified = raw.replace('\\', "/");
        let mut segments: Vec<&str> = Vec::new();

        for segment in unified.split('/').filter(|s| !s.is_empty() && *s != ".") {
            if segment == ".." {
                return Err(VfsError::InvalidPath(format!(
                    "path traversal (..) not allowed in {raw:?}"
                )));
            }
            segments.push(segment);
        }

        if segments.is_empty() {
            return Err(VfsError::InvalidPath(format!("empty path {raw:?}")));
        }

        Ok(Self {
            normalized: segments.join("/"),
        })
    }

    /// The normalized path.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Split into the first segment and the remainder.
    ///
    /// The remainder is empty for single-segment paths.
    pub fn split_source(&self) -> (&str, &str) {
        self.normalized
            .split_once('/')
            .unwrap_or((self.normalized.as_str(), ""))
    }

    /// Last segment of the path.
    pub fn file_name(&self) -> &str {
        self.normalized
            .rsplit_once('/')
            .map_or(self.normalized.as_str(), |(_, name)| name)
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .rsplit_once('.')
            .and_then(|(stem, ext)| (!stem.is_empty()).then_some(ext))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
