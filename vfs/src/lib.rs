//! Path-addressed resource store for wiredraw.
//!
//! Shader sources and other startup assets are looked up by path through
//! the [`Vfs`] router, which forwards each request to the [`ResourceProvider`]
//! mounted under the path's first segment.
//!
//! All operations are synchronous. Assets are read once during
//! initialization, never from the per-frame path.
//!
//! # Providers
//!
//! - [`MemoryProvider`]: in-memory storage for tests and embedded assets
//! - [`FileSystemProvider`]: native filesystem access (requires the
//!   `filesystem` feature, native only)
//!
//! ```ignore
//! let mut vfs = Vfs::new();
//! vfs.mount("assets", FileSystemProvider::new("./assets"));
//! vfs.set_default("assets");
//!
//! let source = vfs.read_to_string("shader/debug_draw_vs.glsl")?;
//! ```

mod error;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
mod filesystem;
mod memory;
pub mod path;
mod provider;
mod vfs;

pub use error::VfsError;
#[cfg(all(feature = "filesystem", not(target_arch = "wasm32")))]
pub use filesystem::FileSystemProvider;
pub use memory::MemoryProvider;
pub use path::ResourcePath;
pub use provider::ResourceProvider;
pub use vfs::Vfs;
