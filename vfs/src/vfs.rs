use std::collections::HashMap;

use crate::error::VfsError;
use crate::path::ResourcePath;
use crate::provider::ResourceProvider;

/// Resource store that routes paths to mounted providers.
///
/// Paths are structured as `"source_name/rest/of/path"`. The first path
/// segment selects the provider. If no source name matches, the default
/// source (if set) is tried with the full path.
///
/// ```ignore
/// let mut vfs = Vfs::new();
/// vfs.mount("assets", FileSystemProvider::new("./assets"));
/// vfs.mount("builtin", MemoryProvider::new());
/// vfs.set_default("assets");
///
/// // Reads ./assets/shader/debug_draw_vs.glsl
/// let vs = vfs.read_to_string("assets/shader/debug_draw_vs.glsl")?;
///
/// // Same file through the default source
/// let vs = vfs.read_to_string("shader/debug_draw_vs.glsl")?;
/// ```
#[derive(Default)]
pub struct Vfs {
    sources: HashMap<String, Box<dyn ResourceProvider>>,
    default_source: Option<String>,
}

impl Vfs {
    /// Create an empty store with no mounted sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a provider under the given source name.
    ///
    /// Replaces any previously mounted provider with the same name.
    pub fn mount(&mut self, name: impl Into<String>, provider: impl ResourceProvider) {
        let name = name.into();
        log::debug!("Mounting resource source '{}'", name);
        self.sources.insert(name, Box::new(provider));
    }

    /// Set the source used when a path does not start with a mounted name.
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default_source = Some(name.into());
    }

    /// Whether a source with the given name is mounted.
    pub fn is_mounted(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Read the entire contents of a file.
    pub fn read(&self, raw_path: &str) -> Result<Vec<u8>, VfsError> {
        let (provider, path) = self.resolve(raw_path)?;
        provider.read(&path)
    }

    /// Read a file as UTF-8 text.
    pub fn read_to_string(&self, raw_path: &str) -> Result<String, VfsError> {
        let bytes = self.read(raw_path)?;
        String::from_utf8(bytes).map_err(|_| VfsError::InvalidText(raw_path.to_owned()))
    }

    /// Check whether a file exists.
    pub fn exists(&self, raw_path: &str) -> Result<bool, VfsError> {
        let (provider, path) = self.resolve(raw_path)?;
        provider.exists(&path)
    }

    /// List the immediate children of a directory.
    pub fn list_dir(&self, raw_path: &str) -> Result<Vec<String>, VfsError> {
        let (provider, path) = self.resolve(raw_path)?;
        provider.list_dir(&path)
    }

    /// Resolve a raw path to a provider and the path within that provider.
    fn resolve(&self, raw_path: &str) -> Result<(&dyn ResourceProvider, String), VfsError> {
        let path = ResourcePath::parse(raw_path)?;
        let (source, rest) = path.split_source();

        if let Some(provider) = self.sources.get(source) {
            return Ok((provider.as_ref(), rest.to_owned()));
        }

        if let Some(default_name) = &self.default_source
            && let Some(provider) = self.sources.get(default_name)
        {
            return Ok((provider.as_ref(), path.as_str().to_owned()));
        }

        Err(VfsError::NoSuchSource(source.to_owned()))
    }
}
