//! Immediate-mode debug line rendering.
//!
//! Application code records wireframe shapes (lines, circles, spheres,
//! capsules, boxes, grids, camera frustums) at any point during a frame.
//! Once per frame the renderer uploads the accumulated vertices, issues one
//! draw call per recorded primitive in call order and starts over.
//!
//! # Architecture
//!
//! - [`DebugDraw`]: shape generators, built on two primitives (line, line strip)
//! - [`FrameAccumulator`]: per-frame vertices and draw commands
//! - [`DeviceResources`]: shaders, buffers and pipeline state on the device
//! - [`DebugRenderer`]: owns all of the above and submits each frame
//!
//! Everything GPU-facing goes through [`wiredraw_device::RenderDevice`].
//!
//! # Usage
//!
//! ```ignore
//! // Setup (once)
//! let shaders = ShaderSources::load(&vfs, &config)?;
//! let mut renderer = DebugRenderer::init(&mut device, &config, &shaders)?;
//!
//! // Each frame:
//! renderer.grid(20.0, 20.0, 0.0, 1.0, [0.3, 0.3, 0.3]);
//! renderer.capsule(2.0, 0.5, Vec3::ZERO, [0.0, 1.0, 0.0]);
//! renderer.frustum(camera_proj, camera_view, [1.0, 1.0, 0.0]);
//! let stats = renderer.render(&mut device, None, width, height, view_proj)?;
//!
//! // On exit:
//! renderer.shutdown(&mut device);
//! ```

mod command;
mod config;
mod draw_api;
mod error;
mod frame;
mod renderer;
mod resources;
mod shader;
mod vertex;

pub use command::{DrawCommand, Topology};
pub use config::{
    DEFAULT_FRAGMENT_SHADER_PATH, DEFAULT_MAX_VERTICES, DEFAULT_VERTEX_SHADER_PATH,
    DebugDrawConfig, OverflowPolicy,
};
pub use draw_api::DebugDraw;
pub use error::DebugDrawError;
pub use frame::{DrawRange, FrameAccumulator};
pub use renderer::{DebugRenderer, FrameStats};
pub use resources::DeviceResources;
pub use shader::{DEBUG_DRAW_FRAGMENT_SHADER, DEBUG_DRAW_VERTEX_SHADER, ShaderSources};
pub use vertex::{CameraUniforms, DebugVertex};
