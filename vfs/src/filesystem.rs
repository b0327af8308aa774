use std::path::PathBuf;

use crate::error::VfsError;
use crate::provider::ResourceProvider;

/// Provider reading resources from a directory on disk.
///
/// The root path is joined with the resource path to form the filesystem
/// path. Path traversal is prevented by [`ResourcePath`](crate::ResourcePath)
/// normalization, which rejects `..` segments before they reach the provider.
pub struct FileSystemProvider {
    root: PathBuf,
}

impl FileSystemProvider {
    /// Create a provider rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is checked at read time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this provider reads from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ResourceProvider for FileSystemProvider {
    fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let full_path = self.resolve(path);
        log::debug!("Reading {}", full_path.display());
        std::fs::read(&full_path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound(full_path.display().to_string()),
            _ => VfsError::Io(err),
        })
    }

    fn exists(&self, path: &str) -> Result<bool, VfsError> {
        Ok(self.resolve(path).is_file())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, VfsError> {
        let full_path = self.resolve(path);
        if !full_path.is_dir() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(full_path)? {
            if let Some(name) = entry?.file_name().to_str() {
                entries.push(name.to_owned());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wiredraw_vfs_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn read_existing_file() {
        let dir = temp_dir("read");
        std::fs::create_dir_all(dir.join("shader")).unwrap();
        std::fs::write(dir.join("shader/lines.glsl"), b"void main() {}").unwrap();

        let provider = FileSystemProvider::new(&dir);
        assert_eq!(provider.read("shader/lines.glsl").unwrap(), b"void main() {}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_missing_file() {
        let dir = temp_dir("read_missing");
        let provider = FileSystemProvider::new(&dir);
        assert!(matches!(provider.read("nope.txt"), Err(VfsError::NotFound(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn exists_check() {
        let dir = temp_dir("exists");
        std::fs::write(dir.join("file.txt"), b"").unwrap();

        let provider = FileSystemProvider::new(&dir);
        assert!(provider.exists("file.txt").unwrap());
        assert!(!provider.exists("nope.txt").unwrap());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_dir_entries() {
        let dir = temp_dir("list");
        std::fs::write(dir.join("b.txt"), b"").unwrap();
        std::fs::write(dir.join("a.txt"), b"").unwrap();
        std::fs::create_dir_all(dir.join("sub")).unwrap();

        let provider = FileSystemProvider::new(&dir);
        assert_eq!(provider.list_dir("").unwrap(), vec!["a.txt", "b.txt", "sub"]);
        assert!(provider.list_dir("missing").unwrap().is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
