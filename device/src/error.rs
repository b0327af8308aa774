//! Device error types.

use thiserror::Error;

/// Errors reported by a [`RenderDevice`](crate::RenderDevice).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Failed to create shader: {0}")]
    ShaderCreationFailed(String),
    #[error("Failed to link shader program: {0}")]
    ProgramLinkFailed(String),
    #[error("Failed to create buffer: {0}")]
    BufferCreationFailed(String),
    #[error("Failed to create input layout: {0}")]
    InputLayoutCreationFailed(String),
    #[error("Failed to create vertex array: {0}")]
    VertexArrayCreationFailed(String),
    #[error("Failed to create render state: {0}")]
    StateCreationFailed(String),
    #[error("Failed to map buffer: {0}")]
    MapFailed(String),
    #[error("Invalid handle: {0}")]
    InvalidHandle(u64),
    #[error("Out of memory")]
    OutOfMemory,
    #[error("Device lost")]
    DeviceLost,
}

pub type DeviceResult<T> = Result<T, DeviceError>;
