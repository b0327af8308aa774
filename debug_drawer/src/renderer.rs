use glam::{Mat4, Vec3};
use wiredraw_device::{
    BufferHandle, DeviceError, FramebufferHandle, MapMode, RenderDevice, ShaderStage,
};

use crate::config::{DebugDrawConfig, OverflowPolicy};
use crate::draw_api::DebugDraw;
use crate::error::DebugDrawError;
use crate::frame::FrameAccumulator;
use crate::resources::DeviceResources;
use crate::shader::ShaderSources;
use crate::vertex::CameraUniforms;

/// Outcome of one [`DebugRenderer::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Vertices copied into the vertex buffer (0 when the upload was skipped).
    pub vertices_uploaded: u32,
    pub draw_calls: u32,
    /// The frame held more vertices than the vertex buffer could store.
    pub overflowed: bool,
    /// Commands not issued because their range lay past the buffer end.
    pub skipped_commands: u32,
}

/// Immediate-mode debug line renderer.
///
/// Shapes are recorded through the [`DebugDraw`] methods at any point in a
/// frame. [`render`](Self::render) uploads them, replays one draw per
/// recorded command in call order and starts the next frame empty.
///
/// ```ignore
/// let mut renderer = DebugRenderer::init(&mut device, &config, &ShaderSources::builtin())?;
///
/// // Each frame:
/// renderer.aabb(Vec3::splat(-1.0), Vec3::splat(1.0), Vec3::ZERO, [0.0, 1.0, 0.0]);
/// renderer.sphere(0.5, Vec3::Y, [1.0, 0.0, 0.0]);
/// renderer.render(&mut device, None, width, height, proj * view)?;
///
/// // On exit:
/// renderer.shutdown(&mut device);
/// ```
pub struct DebugRenderer {
    frame: FrameAccumulator,
    uniforms: CameraUniforms,
    overflow_policy: OverflowPolicy,
    /// `None` only after [`shutdown`](Self::shutdown).
    resources: Option<DeviceResources>,
}

impl DebugRenderer {
    /// Create the device objects and an empty frame.
    pub fn init<D: RenderDevice + ?Sized>(
        device: &mut D,
        config: &DebugDrawConfig,
        shaders: &ShaderSources,
    ) -> Result<Self, DebugDrawError> {
        let resources = DeviceResources::create(device, config, shaders)?;
        Ok(Self {
            frame: FrameAccumulator::with_capacity(config.max_vertices as usize),
            uniforms: CameraUniforms::default(),
            overflow_policy: config.overflow_policy,
            resources: Some(resources),
        })
    }

    /// Shapes recorded since the last [`render`](Self::render).
    pub fn frame(&self) -> &FrameAccumulator {
        &self.frame
    }

    pub fn resources(&self) -> Option<&DeviceResources> {
        self.resources.as_ref()
    }

    /// Camera uniforms written by the last [`render`](Self::render).
    pub fn uniforms(&self) -> &CameraUniforms {
        &self.uniforms
    }

    /// Current vertex buffer capacity in vertices.
    pub fn vertex_capacity(&self) -> u32 {
        self.resources.as_ref().map_or(0, |r| r.vertex_capacity)
    }

    /// Submit the recorded frame and reset for the next one.
    ///
    /// Binds state, sets the viewport to `width x height` at the origin of
    /// `target` (`None` is the default framebuffer) and issues one draw per
    /// command. The frame is cleared whether or not submission succeeds.
    pub fn render<D: RenderDevice + ?Sized>(
        &mut self,
        device: &mut D,
        target: Option<FramebufferHandle>,
        width: u32,
        height: u32,
        view_proj: Mat4,
    ) -> Result<FrameStats, DebugDrawError> {
        let result = self.submit(device, target, width, height, view_proj);
        self.frame.clear();
        result
    }

    fn submit<D: RenderDevice + ?Sized>(
        &mut self,
        device: &mut D,
        target: Option<FramebufferHandle>,
        width: u32,
        height: u32,
        view_proj: Mat4,
    ) -> Result<FrameStats, DebugDrawError> {
        // Only `shutdown` takes the resources and it consumes the renderer
        let Some(resources) = self.resources.as_mut() else {
            return Ok(FrameStats::default());
        };
        let mut stats = FrameStats::default();

        self.uniforms = CameraUniforms::new(view_proj);

        let vertex_count = self.frame.vertex_count();
        if self.overflow_policy == OverflowPolicy::Grow
            && vertex_count > resources.vertex_capacity as usize
        {
            let grown = u32::try_from(vertex_count)
                .map_err(|_| DeviceError::OutOfMemory)
                .and_then(|required| resources.grow_vertex_storage(device, required));
            if let Err(err) = grown {
                log::error!(
                    "Failed to grow debug draw vertex buffer to {} vertices: {}",
                    vertex_count,
                    err
                );
            }
        }

        let capacity = resources.vertex_capacity;
        if vertex_count > capacity as usize {
            log::warn!(
                "Debug draw overflow: {} vertices exceed capacity of {}, skipping upload",
                vertex_count,
                capacity
            );
            stats.overflowed = true;
        } else if vertex_count > 0 {
            upload(
                device,
                resources.vertex_buffer,
                bytemuck::cast_slice(self.frame.vertices()),
            )?;
            stats.vertices_uploaded = vertex_count as u32;
        }

        upload(
            device,
            resources.uniform_buffer,
            bytemuck::bytes_of(&self.uniforms),
        )?;

        device.bind_rasterizer_state(resources.rasterizer_state);
        device.bind_depth_stencil_state(resources.depth_stencil_state);
        device.bind_framebuffer(target);
        device.set_viewport(0, 0, width, height);
        device.bind_shader_program(resources.program);
        device.bind_uniform_buffer(resources.uniform_buffer, ShaderStage::Vertex, 0);
        device.bind_vertex_array(resources.vertex_array);

        for range in self.frame.ranges() {
            // Ranges are contiguous, so every later one is out of bounds too
            if range.end_vertex() > u64::from(capacity) {
                stats.skipped_commands = (self.frame.command_count() as u32) - stats.draw_calls;
                break;
            }
            device.set_primitive_type(range.command.topology.into());
            device.draw(range.first_vertex, range.command.vertex_count);
            stats.draw_calls += 1;
        }

        if stats.skipped_commands > 0 {
            log::debug!(
                "Skipped {} debug draw commands past the vertex buffer end",
                stats.skipped_commands
            );
        }

        Ok(stats)
    }

    /// Release all device objects.
    pub fn shutdown<D: RenderDevice + ?Sized>(mut self, device: &mut D) {
        if let Some(resources) = self.resources.take() {
            resources.destroy(device);
        }
    }
}

impl DebugDraw for DebugRenderer {
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 3]) {
        self.frame.push_line(start, end, color);
    }

    fn line_strip(&mut self, points: &[Vec3], color: [f32; 3]) {
        self.frame.push_line_strip(points, color);
    }
}

impl Drop for DebugRenderer {
    fn drop(&mut self) {
        if self.resources.is_some() {
            log::warn!("DebugRenderer dropped without shutdown, device resources leaked");
        }
    }
}

/// Copy `bytes` to the start of `buffer`, unmapping even if the copy fails.
fn upload<D: RenderDevice + ?Sized>(
    device: &mut D,
    buffer: BufferHandle,
    bytes: &[u8],
) -> Result<(), DeviceError> {
    let mapped = device.map_buffer(buffer, MapMode::Write)?;
    let available = mapped.len();
    let result = if bytes.len() <= available {
        mapped[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    } else {
        Err(DeviceError::MapFailed(format!(
            "buffer {} holds {} bytes, {} needed",
            buffer.raw(),
            available,
            bytes.len()
        )))
    };
    device.unmap_buffer(buffer);
    result
}
