use wiredraw_device::PrimitiveType;

/// Primitive assembly mode of a debug draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Independent segments, two vertices each.
    Lines,
    /// One connected polyline through all vertices.
    LineStrip,
}

impl From<Topology> for PrimitiveType {
    fn from(topology: Topology) -> Self {
        match topology {
            Topology::Lines => PrimitiveType::Lines,
            Topology::LineStrip => PrimitiveType::LineStrip,
        }
    }
}

/// One draw call's shape and extent. Lives for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawCommand {
    pub topology: Topology,
    pub vertex_count: u32,
}

impl DrawCommand {
    pub fn lines(vertex_count: u32) -> Self {
        Self {
            topology: Topology::Lines,
            vertex_count,
        }
    }

    pub fn line_strip(vertex_count: u32) -> Self {
        Self {
            topology: Topology::LineStrip,
            vertex_count,
        }
    }
}
