//! Resource descriptors and pipeline state enums.

use bitflags::bitflags;

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Primitive assembly mode for non-indexed draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

/// CPU access requested when mapping a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapMode {
    Read,
    Write,
    ReadWrite,
}

bitflags! {
    /// Usage flags for buffers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// Buffer can be used as a vertex buffer.
        const VERTEX = 1 << 0;
        /// Buffer can be used as an index buffer.
        const INDEX = 1 << 1;
        /// Buffer can be used as a uniform buffer.
        const UNIFORM = 1 << 2;
        /// Contents are rewritten frequently (typically every frame).
        const DYNAMIC = 1 << 3;
        /// Buffer is mappable for CPU write.
        const MAP_WRITE = 1 << 4;
    }
}

impl Default for BufferUsage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Descriptor for creating a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BufferDescriptor {
    /// Debug label for the buffer.
    pub label: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Usage flags.
    pub usage: BufferUsage,
}

impl BufferDescriptor {
    /// Create a new buffer descriptor.
    pub fn new(size: u64, usage: BufferUsage) -> Self {
        Self {
            label: None,
            size,
            usage,
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Scalar type of a vertex attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Float,
    Int,
    UnsignedInt,
    UnsignedByte,
}

impl DataType {
    /// Size of one component in bytes.
    pub fn size(self) -> u32 {
        match self {
            Self::Float | Self::Int | Self::UnsignedInt => 4,
            Self::UnsignedByte => 1,
        }
    }
}

/// One attribute of an interleaved vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputElement {
    /// Number of components (1..=4).
    pub components: u32,
    pub data_type: DataType,
    pub normalized: bool,
    /// Byte offset from the start of the vertex.
    pub offset: u32,
    /// Semantic name matched against shader inputs (`"POSITION"`, `"COLOR"`, ...).
    pub semantic: &'static str,
}

impl InputElement {
    /// A non-normalized float attribute.
    pub fn float(components: u32, offset: u32, semantic: &'static str) -> Self {
        Self {
            components,
            data_type: DataType::Float,
            normalized: false,
            offset,
            semantic,
        }
    }

    /// Size of the attribute in bytes.
    pub fn size(&self) -> u32 {
        self.components * self.data_type.size()
    }
}

/// Descriptor for an interleaved vertex input layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InputLayoutDescriptor {
    pub elements: Vec<InputElement>,
    /// Stride between consecutive vertices in bytes.
    pub vertex_size: u32,
}

impl InputLayoutDescriptor {
    /// Create an empty layout with the given stride.
    pub fn new(vertex_size: u32) -> Self {
        Self {
            elements: Vec::new(),
            vertex_size,
        }
    }

    /// Append an attribute.
    pub fn with_element(mut self, element: InputElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// Descriptor for a vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayDescriptor {
    pub vertex_buffer: crate::BufferHandle,
    pub index_buffer: Option<crate::BufferHandle>,
    pub layout: crate::InputLayoutHandle,
}

/// Face culling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    #[default]
    None,
    Front,
    Back,
}

/// Polygon fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    #[default]
    Solid,
    Wireframe,
}

/// Descriptor for a rasterizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterizerStateDescriptor {
    pub cull_mode: CullMode,
    pub fill_mode: FillMode,
    pub front_winding_ccw: bool,
    pub multisample: bool,
    pub scissor: bool,
}

impl Default for RasterizerStateDescriptor {
    fn default() -> Self {
        Self {
            cull_mode: CullMode::Back,
            fill_mode: FillMode::Solid,
            front_winding_ccw: true,
            multisample: false,
            scissor: false,
        }
    }
}

/// Depth comparison function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareFunction {
    Never,
    #[default]
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

/// Descriptor for a depth-stencil state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilStateDescriptor {
    pub depth_test: bool,
    pub depth_write: bool,
    pub stencil_test: bool,
    pub depth_compare: CompareFunction,
}

impl Default for DepthStencilStateDescriptor {
    fn default() -> Self {
        Self {
            depth_test: true,
            depth_write: true,
            stencil_test: false,
            depth_compare: CompareFunction::Less,
        }
    }
}
