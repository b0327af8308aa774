use glam::{Mat4, Vec3};
use wiredraw_device::{InputElement, InputLayoutDescriptor};

/// A debug draw vertex: position + texture coordinate + color.
///
/// The texture coordinate is never read by the line shader. It is kept so
/// the vertex matches the engine-wide world vertex format.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DebugVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

impl DebugVertex {
    /// Stride of one vertex in the vertex buffer.
    pub const STRIDE: u32 = std::mem::size_of::<Self>() as u32;

    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            uv: [0.0; 2],
            color,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Input layout matching this vertex: POSITION, TEXCOORD, COLOR.
    pub fn input_layout() -> InputLayoutDescriptor {
        InputLayoutDescriptor::new(Self::STRIDE)
            .with_element(InputElement::float(3, 0, "POSITION"))
            .with_element(InputElement::float(2, 12, "TEXCOORD"))
            .with_element(InputElement::float(3, 20, "COLOR"))
    }
}

/// Uniform buffer data for the debug draw shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Column-major 4x4 view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
