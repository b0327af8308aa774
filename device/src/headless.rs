//! Headless device for testing and development.
//!
//! This device doesn't talk to a GPU. Buffers are plain byte vectors,
//! state objects are bookkeeping entries, and every bind or draw is appended
//! to a call log that tests can inspect.

use std::collections::HashMap;

use crate::error::{DeviceError, DeviceResult};
use crate::handles::{
    BufferHandle, DepthStencilStateHandle, FramebufferHandle, InputLayoutHandle,
    RasterizerStateHandle, ResourceHandle, ShaderHandle, ShaderProgramHandle, VertexArrayHandle,
};
use crate::types::{
    BufferDescriptor, DepthStencilStateDescriptor, InputLayoutDescriptor, MapMode, PrimitiveType,
    RasterizerStateDescriptor, ShaderStage, VertexArrayDescriptor,
};
use crate::RenderDevice;

/// One draw call as seen by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    /// Primitive type bound at the time of the draw, if any was set.
    pub primitive: Option<PrimitiveType>,
    pub first_vertex: u32,
    pub count: u32,
}

/// A recorded non-creation device call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCall {
    MapBuffer(BufferHandle),
    UnmapBuffer(BufferHandle),
    BindFramebuffer(Option<FramebufferHandle>),
    BindShaderProgram(ShaderProgramHandle),
    BindUniformBuffer {
        buffer: BufferHandle,
        stage: ShaderStage,
        slot: u32,
    },
    BindVertexArray(VertexArrayHandle),
    BindRasterizerState(RasterizerStateHandle),
    BindDepthStencilState(DepthStencilStateHandle),
    SetViewport {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    SetPrimitiveType(PrimitiveType),
    Draw(DrawRecord),
}

struct HeadlessBuffer {
    data: Vec<u8>,
    mapped: bool,
    map_count: usize,
}

/// Headless [`RenderDevice`] implementation.
pub struct HeadlessDevice {
    next_id: u64,
    live: HashMap<u64, ResourceHandle>,
    buffers: HashMap<u64, HeadlessBuffer>,
    vertex_arrays: HashMap<u64, VertexArrayDescriptor>,
    calls: Vec<DeviceCall>,
    primitive: Option<PrimitiveType>,
    creations: usize,
    fail_creation_at: Option<usize>,
}

impl HeadlessDevice {
    /// Create a new headless device.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: HashMap::new(),
            buffers: HashMap::new(),
            vertex_arrays: HashMap::new(),
            calls: Vec::new(),
            primitive: None,
            creations: 0,
            fail_creation_at: None,
        }
    }

    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        "Headless Device"
    }

    /// Make the `index`-th resource creation call (0-based) fail.
    ///
    /// Simulates a driver rejecting a shader or running out of memory
    /// part-way through initialization.
    pub fn with_failing_creation(mut self, index: usize) -> Self {
        self.fail_creation_at = Some(index);
        self
    }

    /// Create an offscreen render target.
    pub fn create_framebuffer(&mut self) -> FramebufferHandle {
        let handle = FramebufferHandle(self.allocate_id());
        self.live.insert(handle.raw(), handle.into());
        handle
    }

    /// All recorded calls since creation or the last [`take_calls`](Self::take_calls).
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Draw calls in the current call log, in issue order.
    pub fn draws(&self) -> Vec<DrawRecord> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DeviceCall::Draw(record) => Some(*record),
                _ => None,
            })
            .collect()
    }

    /// Current contents of a buffer.
    pub fn buffer_contents(&self, buffer: BufferHandle) -> Option<&[u8]> {
        self.buffers.get(&buffer.raw()).map(|b| b.data.as_slice())
    }

    /// How many times a buffer has been mapped over its lifetime.
    pub fn map_count(&self, buffer: BufferHandle) -> usize {
        self.buffers.get(&buffer.raw()).map_or(0, |b| b.map_count)
    }

    /// Whether a buffer is currently mapped.
    pub fn is_mapped(&self, buffer: BufferHandle) -> bool {
        self.buffers.get(&buffer.raw()).is_some_and(|b| b.mapped)
    }

    /// The vertex buffer a vertex array was created with.
    pub fn vertex_array_buffer(&self, vertex_array: VertexArrayHandle) -> Option<BufferHandle> {
        self.vertex_arrays
            .get(&vertex_array.raw())
            .map(|desc| desc.vertex_buffer)
    }

    /// Number of resources created and not yet destroyed.
    pub fn live_resources(&self) -> usize {
        self.live.len()
    }

    /// Whether a handle refers to a live resource.
    pub fn is_live(&self, handle: impl Into<ResourceHandle>) -> bool {
        let handle = handle.into();
        self.live.get(&handle.raw()) == Some(&handle)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Count a creation call and fail it if it is the injected failure.
    fn begin_creation(&mut self, on_failure: impl FnOnce() -> DeviceError) -> DeviceResult<u64> {
        let index = self.creations;
        self.creations += 1;
        if self.fail_creation_at == Some(index) {
            log::trace!("HeadlessDevice: injected failure at creation #{}", index);
            return Err(on_failure());
        }
        Ok(self.allocate_id())
    }

    fn create_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle> {
        let id = self.begin_creation(|| {
            DeviceError::BufferCreationFailed(desc.label.clone().unwrap_or_default())
        })?;
        log::trace!(
            "HeadlessDevice: creating buffer {:?} (size: {})",
            desc.label,
            desc.size
        );
        let size = usize::try_from(desc.size).map_err(|_| DeviceError::OutOfMemory)?;
        let handle = BufferHandle(id);
        self.buffers.insert(
            id,
            HeadlessBuffer {
                data: vec![0; size],
                mapped: false,
                map_count: 0,
            },
        );
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn require_live(&self, handle: impl Into<ResourceHandle>) -> DeviceResult<()> {
        let handle = handle.into();
        if self.is_live(handle) {
            Ok(())
        } else {
            Err(DeviceError::InvalidHandle(handle.raw()))
        }
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDevice for HeadlessDevice {
    fn create_shader(&mut self, source: &str, stage: ShaderStage) -> DeviceResult<ShaderHandle> {
        if source.trim().is_empty() {
            return Err(DeviceError::ShaderCreationFailed(format!(
                "empty {stage:?} shader source"
            )));
        }
        let id = self.begin_creation(|| {
            DeviceError::ShaderCreationFailed(format!("{stage:?} stage rejected"))
        })?;
        log::trace!("HeadlessDevice: creating {:?} shader ({} bytes)", stage, source.len());
        let handle = ShaderHandle(id);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn create_shader_program(
        &mut self,
        shaders: &[ShaderHandle],
    ) -> DeviceResult<ShaderProgramHandle> {
        if shaders.is_empty() {
            return Err(DeviceError::ProgramLinkFailed("no shader stages".into()));
        }
        for &shader in shaders {
            self.require_live(shader)?;
        }
        let id = self.begin_creation(|| DeviceError::ProgramLinkFailed("link rejected".into()))?;
        log::trace!("HeadlessDevice: linking program from {} stages", shaders.len());
        let handle = ShaderProgramHandle(id);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn create_vertex_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle> {
        self.create_buffer(desc)
    }

    fn create_index_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle> {
        self.create_buffer(desc)
    }

    fn create_uniform_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle> {
        self.create_buffer(desc)
    }

    fn create_input_layout(
        &mut self,
        desc: &InputLayoutDescriptor,
    ) -> DeviceResult<InputLayoutHandle> {
        if let Some(element) = desc
            .elements
            .iter()
            .find(|e| e.offset + e.size() > desc.vertex_size)
        {
            return Err(DeviceError::InputLayoutCreationFailed(format!(
                "{} extends past vertex stride {}",
                element.semantic, desc.vertex_size
            )));
        }
        let id = self.begin_creation(|| {
            DeviceError::InputLayoutCreationFailed("layout rejected".into())
        })?;
        log::trace!(
            "HeadlessDevice: creating input layout ({} elements, stride {})",
            desc.elements.len(),
            desc.vertex_size
        );
        let handle = InputLayoutHandle(id);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn create_vertex_array(
        &mut self,
        desc: &VertexArrayDescriptor,
    ) -> DeviceResult<VertexArrayHandle> {
        self.require_live(desc.vertex_buffer)?;
        self.require_live(desc.layout)?;
        if let Some(index_buffer) = desc.index_buffer {
            self.require_live(index_buffer)?;
        }
        let id = self.begin_creation(|| {
            DeviceError::VertexArrayCreationFailed("vertex array rejected".into())
        })?;
        log::trace!("HeadlessDevice: creating vertex array");
        let handle = VertexArrayHandle(id);
        self.vertex_arrays.insert(id, *desc);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn create_rasterizer_state(
        &mut self,
        desc: &RasterizerStateDescriptor,
    ) -> DeviceResult<RasterizerStateHandle> {
        let id = self.begin_creation(|| {
            DeviceError::StateCreationFailed("rasterizer state rejected".into())
        })?;
        log::trace!("HeadlessDevice: creating rasterizer state {:?}", desc);
        let handle = RasterizerStateHandle(id);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn create_depth_stencil_state(
        &mut self,
        desc: &DepthStencilStateDescriptor,
    ) -> DeviceResult<DepthStencilStateHandle> {
        let id = self.begin_creation(|| {
            DeviceError::StateCreationFailed("depth-stencil state rejected".into())
        })?;
        log::trace!("HeadlessDevice: creating depth-stencil state {:?}", desc);
        let handle = DepthStencilStateHandle(id);
        self.live.insert(id, handle.into());
        Ok(handle)
    }

    fn map_buffer(&mut self, buffer: BufferHandle, mode: MapMode) -> DeviceResult<&mut [u8]> {
        let entry = self
            .buffers
            .get_mut(&buffer.raw())
            .ok_or(DeviceError::InvalidHandle(buffer.raw()))?;
        if entry.mapped {
            return Err(DeviceError::MapFailed(format!(
                "buffer {} is already mapped",
                buffer.raw()
            )));
        }
        log::trace!("HeadlessDevice: map_buffer {} ({:?})", buffer.raw(), mode);
        entry.mapped = true;
        entry.map_count += 1;
        self.calls.push(DeviceCall::MapBuffer(buffer));
        Ok(entry.data.as_mut_slice())
    }

    fn unmap_buffer(&mut self, buffer: BufferHandle) {
        match self.buffers.get_mut(&buffer.raw()) {
            Some(entry) if entry.mapped => {
                entry.mapped = false;
                self.calls.push(DeviceCall::UnmapBuffer(buffer));
            }
            _ => log::warn!("HeadlessDevice: unmap of unmapped buffer {}", buffer.raw()),
        }
    }

    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferHandle>) {
        self.calls.push(DeviceCall::BindFramebuffer(framebuffer));
    }

    fn bind_shader_program(&mut self, program: ShaderProgramHandle) {
        self.calls.push(DeviceCall::BindShaderProgram(program));
    }

    fn bind_uniform_buffer(&mut self, buffer: BufferHandle, stage: ShaderStage, slot: u32) {
        self.calls.push(DeviceCall::BindUniformBuffer {
            buffer,
            stage,
            slot,
        });
    }

    fn bind_vertex_array(&mut self, vertex_array: VertexArrayHandle) {
        self.calls.push(DeviceCall::BindVertexArray(vertex_array));
    }

    fn bind_rasterizer_state(&mut self, state: RasterizerStateHandle) {
        self.calls.push(DeviceCall::BindRasterizerState(state));
    }

    fn bind_depth_stencil_state(&mut self, state: DepthStencilStateHandle) {
        self.calls.push(DeviceCall::BindDepthStencilState(state));
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.calls.push(DeviceCall::SetViewport {
            x,
            y,
            width,
            height,
        });
    }

    fn set_primitive_type(&mut self, primitive: PrimitiveType) {
        self.primitive = Some(primitive);
        self.calls.push(DeviceCall::SetPrimitiveType(primitive));
    }

    fn draw(&mut self, first_vertex: u32, count: u32) {
        log::trace!(
            "HeadlessDevice: draw {:?} first={} count={}",
            self.primitive,
            first_vertex,
            count
        );
        self.calls.push(DeviceCall::Draw(DrawRecord {
            primitive: self.primitive,
            first_vertex,
            count,
        }));
    }

    fn destroy(&mut self, handle: ResourceHandle) {
        let id = handle.raw();
        if self.live.get(&id) != Some(&handle) {
            log::warn!("HeadlessDevice: destroy of unknown resource {:?}", handle);
            return;
        }
        log::trace!("HeadlessDevice: destroying {:?}", handle);
        self.live.remove(&id);
        self.buffers.remove(&id);
        self.vertex_arrays.remove(&id);
    }
}
