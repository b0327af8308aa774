use thiserror::Error;
use wiredraw_device::DeviceError;
use wiredraw_vfs::VfsError;

/// Debug renderer errors.
#[derive(Debug, Error)]
pub enum DebugDrawError {
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    #[error("shader error: {0}")]
    Shader(String),

    #[error("resource error: {0}")]
    Resource(#[from] VfsError),
}
