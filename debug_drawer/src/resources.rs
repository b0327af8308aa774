use wiredraw_device::{
    BufferDescriptor, BufferHandle, BufferUsage, CompareFunction, CullMode,
    DepthStencilStateDescriptor, DepthStencilStateHandle, DeviceError, DeviceResult, FillMode,
    InputLayoutHandle, RasterizerStateDescriptor, RasterizerStateHandle, RenderDevice,
    ResourceHandle, ShaderHandle, ShaderProgramHandle, ShaderStage, VertexArrayDescriptor,
    VertexArrayHandle,
};

use crate::config::DebugDrawConfig;
use crate::error::DebugDrawError;
use crate::shader::ShaderSources;
use crate::vertex::{CameraUniforms, DebugVertex};

/// Device objects owned by a [`DebugRenderer`](crate::DebugRenderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResources {
    pub vertex_shader: ShaderHandle,
    pub fragment_shader: ShaderHandle,
    pub program: ShaderProgramHandle,
    pub vertex_buffer: BufferHandle,
    pub input_layout: InputLayoutHandle,
    pub vertex_array: VertexArrayHandle,
    pub rasterizer_state: RasterizerStateHandle,
    pub depth_stencil_state: DepthStencilStateHandle,
    pub uniform_buffer: BufferHandle,
    /// Number of [`DebugVertex`] the vertex buffer holds.
    pub vertex_capacity: u32,
}

impl DeviceResources {
    /// Create every device object the debug renderer needs.
    ///
    /// On failure, objects created so far are destroyed before the error is
    /// returned.
    pub fn create<D: RenderDevice + ?Sized>(
        device: &mut D,
        config: &DebugDrawConfig,
        shaders: &ShaderSources,
    ) -> Result<Self, DebugDrawError> {
        let vertex_capacity = config.max_vertices;
        let mut guard = CreationGuard::new(device);

        let vertex_shader =
            guard.create(|d| d.create_shader(&shaders.vertex, ShaderStage::Vertex))?;
        let fragment_shader =
            guard.create(|d| d.create_shader(&shaders.fragment, ShaderStage::Fragment))?;
        let program =
            guard.create(|d| d.create_shader_program(&[vertex_shader, fragment_shader]))?;

        let vertex_buffer =
            guard.create(|d| d.create_vertex_buffer(&vertex_buffer_descriptor(vertex_capacity)))?;
        let input_layout = guard.create(|d| d.create_input_layout(&DebugVertex::input_layout()))?;
        let vertex_array = guard.create(|d| {
            d.create_vertex_array(&VertexArrayDescriptor {
                vertex_buffer,
                index_buffer: None,
                layout: input_layout,
            })
        })?;

        let rasterizer_state = guard.create(|d| {
            d.create_rasterizer_state(&RasterizerStateDescriptor {
                cull_mode: CullMode::None,
                fill_mode: FillMode::Solid,
                front_winding_ccw: true,
                multisample: true,
                scissor: false,
            })
        })?;
        let depth_stencil_state = guard.create(|d| {
            d.create_depth_stencil_state(&DepthStencilStateDescriptor {
                depth_test: config.depth_test,
                depth_write: config.depth_test,
                stencil_test: false,
                depth_compare: CompareFunction::LessEqual,
            })
        })?;

        let uniform_buffer = guard.create(|d| {
            d.create_uniform_buffer(
                &BufferDescriptor::new(
                    std::mem::size_of::<CameraUniforms>() as u64,
                    BufferUsage::UNIFORM | BufferUsage::DYNAMIC | BufferUsage::MAP_WRITE,
                )
                .with_label("debug_draw_uniforms"),
            )
        })?;

        guard.commit();
        log::debug!(
            "Created debug draw resources (vertex capacity: {})",
            vertex_capacity
        );

        Ok(Self {
            vertex_shader,
            fragment_shader,
            program,
            vertex_buffer,
            input_layout,
            vertex_array,
            rasterizer_state,
            depth_stencil_state,
            uniform_buffer,
            vertex_capacity,
        })
    }

    /// All handles in release order.
    pub fn handles(&self) -> [ResourceHandle; 9] {
        [
            self.uniform_buffer.into(),
            self.program.into(),
            self.vertex_shader.into(),
            self.fragment_shader.into(),
            self.vertex_array.into(),
            self.vertex_buffer.into(),
            self.input_layout.into(),
            self.depth_stencil_state.into(),
            self.rasterizer_state.into(),
        ]
    }

    /// Release every handle.
    pub fn destroy<D: RenderDevice + ?Sized>(self, device: &mut D) {
        for handle in self.handles() {
            device.destroy(handle);
        }
        log::debug!("Destroyed debug draw resources");
    }

    /// Replace the vertex buffer and vertex array with larger ones.
    ///
    /// The new capacity is `max(required, 2 * current)`. Old objects are
    /// released only once both replacements exist; on failure the current
    /// ones stay in place.
    pub fn grow_vertex_storage<D: RenderDevice + ?Sized>(
        &mut self,
        device: &mut D,
        required: u32,
    ) -> DeviceResult<()> {
        let new_capacity = required.max(self.vertex_capacity.saturating_mul(2));

        let vertex_buffer = device.create_vertex_buffer(&vertex_buffer_descriptor(new_capacity))?;
        let vertex_array = match device.create_vertex_array(&VertexArrayDescriptor {
            vertex_buffer,
            index_buffer: None,
            layout: self.input_layout,
        }) {
            Ok(vertex_array) => vertex_array,
            Err(err) => {
                device.destroy(vertex_buffer.into());
                return Err(err);
            }
        };

        device.destroy(self.vertex_array.into());
        device.destroy(self.vertex_buffer.into());

        log::debug!(
            "Grew debug draw vertex buffer: {} -> {} vertices",
            self.vertex_capacity,
            new_capacity
        );
        self.vertex_buffer = vertex_buffer;
        self.vertex_array = vertex_array;
        self.vertex_capacity = new_capacity;
        Ok(())
    }
}

fn vertex_buffer_descriptor(vertex_capacity: u32) -> BufferDescriptor {
    BufferDescriptor::new(
        u64::from(vertex_capacity) * u64::from(DebugVertex::STRIDE),
        BufferUsage::VERTEX | BufferUsage::DYNAMIC | BufferUsage::MAP_WRITE,
    )
    .with_label("debug_draw_vertices")
}

/// Tracks handles created during initialization and releases them, newest
/// first, unless [`commit`](Self::commit) is called.
struct CreationGuard<'a, D: RenderDevice + ?Sized> {
    device: &'a mut D,
    created: Vec<ResourceHandle>,
}

impl<'a, D: RenderDevice + ?Sized> CreationGuard<'a, D> {
    fn new(device: &'a mut D) -> Self {
        Self {
            device,
            created: Vec::new(),
        }
    }

    fn create<H>(&mut self, create: impl FnOnce(&mut D) -> Result<H, DeviceError>) -> DeviceResult<H>
    where
        H: Copy + Into<ResourceHandle>,
    {
        let handle = create(&mut *self.device)?;
        self.created.push(handle.into());
        Ok(handle)
    }

    fn commit(mut self) {
        self.created.clear();
    }
}

impl<D: RenderDevice + ?Sized> Drop for CreationGuard<'_, D> {
    fn drop(&mut self) {
        if !self.created.is_empty() {
            log::debug!(
                "Releasing {} debug draw resources after failed initialization",
                self.created.len()
            );
        }
        while let Some(handle) = self.created.pop() {
            self.device.destroy(handle);
        }
    }
}
