//! Graphics device capability interface for wiredraw.
//!
//! The debug renderer never talks to a graphics API directly. Everything it
//! needs from the GPU goes through the [`RenderDevice`] trait: creating
//! shaders, buffers and pipeline state, mapping buffers for upload, binding
//! state and issuing non-indexed draw calls.
//!
//! # Backends
//!
//! - [`HeadlessDevice`]: no GPU, keeps buffer contents in memory and records
//!   every bind and draw. Used by tests, benchmarks and the headless demo.
//!
//! Native backends live outside this workspace and implement [`RenderDevice`]
//! on top of their API of choice.

mod error;
mod handles;
mod headless;
mod types;

pub use error::{DeviceError, DeviceResult};
pub use handles::{
    BufferHandle, DepthStencilStateHandle, FramebufferHandle, InputLayoutHandle,
    RasterizerStateHandle, ResourceHandle, ShaderHandle, ShaderProgramHandle, VertexArrayHandle,
};
pub use headless::{DeviceCall, DrawRecord, HeadlessDevice};
pub use types::{
    BufferDescriptor, BufferUsage, CompareFunction, CullMode, DataType, DepthStencilStateDescriptor,
    FillMode, InputElement, InputLayoutDescriptor, MapMode, PrimitiveType,
    RasterizerStateDescriptor, ShaderStage, VertexArrayDescriptor,
};

/// Capability set a graphics backend exposes to the debug renderer.
///
/// All calls are synchronous and issued from the render thread. Handles are
/// owned by whoever created them and must be released with [`destroy`](Self::destroy).
///
/// # Buffer mapping
///
/// [`map_buffer`](Self::map_buffer) hands out the whole buffer as a mutable
/// byte slice. The slice borrows the device, so nothing else can touch the
/// device until it is dropped. Callers must pair every successful map with
/// [`unmap_buffer`](Self::unmap_buffer).
pub trait RenderDevice {
    // Resource creation

    /// Compile a shader stage from source text.
    fn create_shader(&mut self, source: &str, stage: ShaderStage) -> DeviceResult<ShaderHandle>;

    /// Link shader stages into a program.
    fn create_shader_program(
        &mut self,
        shaders: &[ShaderHandle],
    ) -> DeviceResult<ShaderProgramHandle>;

    /// Create a vertex buffer.
    fn create_vertex_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle>;

    /// Create an index buffer.
    fn create_index_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle>;

    /// Create a uniform buffer.
    fn create_uniform_buffer(&mut self, desc: &BufferDescriptor) -> DeviceResult<BufferHandle>;

    /// Describe how vertex buffer bytes map onto shader inputs.
    fn create_input_layout(
        &mut self,
        desc: &InputLayoutDescriptor,
    ) -> DeviceResult<InputLayoutHandle>;

    /// Bundle a vertex buffer, optional index buffer and input layout.
    fn create_vertex_array(
        &mut self,
        desc: &VertexArrayDescriptor,
    ) -> DeviceResult<VertexArrayHandle>;

    /// Create a rasterizer state object.
    fn create_rasterizer_state(
        &mut self,
        desc: &RasterizerStateDescriptor,
    ) -> DeviceResult<RasterizerStateHandle>;

    /// Create a depth-stencil state object.
    fn create_depth_stencil_state(
        &mut self,
        desc: &DepthStencilStateDescriptor,
    ) -> DeviceResult<DepthStencilStateHandle>;

    // Buffer access

    /// Map a buffer for CPU access.
    fn map_buffer(&mut self, buffer: BufferHandle, mode: MapMode) -> DeviceResult<&mut [u8]>;

    /// Release a mapping created by [`map_buffer`](Self::map_buffer).
    fn unmap_buffer(&mut self, buffer: BufferHandle);

    // State binding

    /// Bind a render target. `None` selects the default framebuffer.
    fn bind_framebuffer(&mut self, framebuffer: Option<FramebufferHandle>);

    /// Bind a linked shader program.
    fn bind_shader_program(&mut self, program: ShaderProgramHandle);

    /// Bind a uniform buffer to a slot of the given stage.
    fn bind_uniform_buffer(&mut self, buffer: BufferHandle, stage: ShaderStage, slot: u32);

    /// Bind a vertex array.
    fn bind_vertex_array(&mut self, vertex_array: VertexArrayHandle);

    /// Bind a rasterizer state.
    fn bind_rasterizer_state(&mut self, state: RasterizerStateHandle);

    /// Bind a depth-stencil state.
    fn bind_depth_stencil_state(&mut self, state: DepthStencilStateHandle);

    /// Set the viewport rectangle in pixels.
    fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Set the primitive assembly mode used by subsequent draws.
    fn set_primitive_type(&mut self, primitive: PrimitiveType);

    // Drawing

    /// Draw `count` vertices starting at `first_vertex` of the bound vertex array.
    fn draw(&mut self, first_vertex: u32, count: u32);

    // Resource cleanup

    /// Release a resource. Destroying an unknown handle is a no-op.
    fn destroy(&mut self, handle: ResourceHandle);
}
