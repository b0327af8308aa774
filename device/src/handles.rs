//! Opaque handles to device resources.
//!
//! Handles are plain ids. The device that created a handle is the only one
//! that can interpret it.

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u64);

        impl $name {
            /// Wrap a backend-specific id.
            pub const fn from_raw(id: u64) -> Self {
                Self(id)
            }

            /// The backend-specific id.
            pub const fn raw(self) -> u64 {
                self.0
            }
        }
    };
}

define_handle!(
    /// Handle to a compiled shader stage.
    ShaderHandle
);
define_handle!(
    /// Handle to a linked shader program.
    ShaderProgramHandle
);
define_handle!(
    /// Handle to a vertex, index or uniform buffer.
    BufferHandle
);
define_handle!(
    /// Handle to a vertex input layout.
    InputLayoutHandle
);
define_handle!(
    /// Handle to a vertex array (buffer + layout binding).
    VertexArrayHandle
);
define_handle!(
    /// Handle to a rasterizer state object.
    RasterizerStateHandle
);
define_handle!(
    /// Handle to a depth-stencil state object.
    DepthStencilStateHandle
);
define_handle!(
    /// Handle to an offscreen render target.
    FramebufferHandle
);

/// Any resource handle, as accepted by [`RenderDevice::destroy`](crate::RenderDevice::destroy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceHandle {
    Shader(ShaderHandle),
    ShaderProgram(ShaderProgramHandle),
    Buffer(BufferHandle),
    InputLayout(InputLayoutHandle),
    VertexArray(VertexArrayHandle),
    RasterizerState(RasterizerStateHandle),
    DepthStencilState(DepthStencilStateHandle),
    Framebuffer(FramebufferHandle),
}

impl ResourceHandle {
    /// The backend-specific id of the wrapped handle.
    pub fn raw(self) -> u64 {
        match self {
            Self::Shader(h) => h.raw(),
            Self::ShaderProgram(h) => h.raw(),
            Self::Buffer(h) => h.raw(),
            Self::InputLayout(h) => h.raw(),
            Self::VertexArray(h) => h.raw(),
            Self::RasterizerState(h) => h.raw(),
            Self::DepthStencilState(h) => h.raw(),
            Self::Framebuffer(h) => h.raw(),
        }
    }
}

macro_rules! impl_into_resource {
    ($($handle:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$handle> for ResourceHandle {
                fn from(handle: $handle) -> Self {
                    Self::$variant(handle)
                }
            }
        )*
    };
}

impl_into_resource! {
    ShaderHandle => Shader,
    ShaderProgramHandle => ShaderProgram,
    BufferHandle => Buffer,
    InputLayoutHandle => InputLayout,
    VertexArrayHandle => VertexArray,
    RasterizerStateHandle => RasterizerState,
    DepthStencilStateHandle => DepthStencilState,
    FramebufferHandle => Framebuffer,
}
