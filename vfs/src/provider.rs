use crate::VfsError;

/// Trait for resource storage backends.
///
/// # Path Contract
///
/// Paths passed to provider methods are already normalized by the
/// [`Vfs`](crate::Vfs) router: forward slashes, no leading/trailing slashes,
/// no `..` or `.` segments. The path is relative to the provider's root
/// (the source prefix has been stripped). The empty path is the root.
pub trait ResourceProvider: Send + Sync + 'static {
    /// Read the entire contents of a file at the given path.
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError>;

    /// Check whether a file exists at the given path.
    fn exists(&self, path: &str) -> Result<bool, VfsError>;

    /// List the immediate children of a directory, sorted by name.
    ///
    /// Returns an empty vec for non-existent directories.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, VfsError>;
}
