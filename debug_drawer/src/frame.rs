use glam::Vec3;

use crate::command::DrawCommand;
use crate::vertex::DebugVertex;

/// A draw command together with the index of its first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub command: DrawCommand,
    pub first_vertex: u32,
}

impl DrawRange {
    /// One past the last vertex of the range.
    pub fn end_vertex(&self) -> u64 {
        u64::from(self.first_vertex) + u64::from(self.command.vertex_count)
    }
}

/// Vertex and command data accumulated for a single frame.
///
/// Every push appends its vertices to the vertex list and exactly one
/// [`DrawCommand`] covering them to the command list, so the commands
/// partition the vertices into contiguous ranges in call order. Nothing is
/// merged or reordered.
#[derive(Debug, Default)]
pub struct FrameAccumulator {
    vertices: Vec<DebugVertex>,
    commands: Vec<DrawCommand>,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with storage reserved for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            // Every command covers at least two vertices
            commands: Vec::with_capacity(vertex_capacity / 2),
        }
    }

    /// Push two vertices forming one independent line segment.
    #[inline]
    pub fn push_line(&mut self, start: Vec3, end: Vec3, color: [f32; 3]) {
        self.vertices.push(DebugVertex::new(start, color));
        self.vertices.push(DebugVertex::new(end, color));
        self.commands.push(DrawCommand::lines(2));
    }

    /// Push a connected polyline through `points`.
    ///
    /// An empty slice pushes nothing.
    pub fn push_line_strip(&mut self, points: &[Vec3], color: [f32; 3]) {
        if points.is_empty() {
            return;
        }
        self.vertices
            .extend(points.iter().map(|&p| DebugVertex::new(p, color)));
        self.commands
            .push(DrawCommand::line_strip(points.len() as u32));
    }

    pub fn vertices(&self) -> &[DebugVertex] {
        &self.vertices
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands paired with their starting vertex, in draw order.
    ///
    /// Offsets saturate at `u32::MAX`, which is past the end of any vertex
    /// buffer.
    pub fn ranges(&self) -> impl Iterator<Item = DrawRange> + '_ {
        self.commands.iter().scan(0u32, |offset, &command| {
            let range = DrawRange {
                command,
                first_vertex: *offset,
            };
            *offset = offset.saturating_add(command.vertex_count);
            Some(range)
        })
    }

    /// Drop all vertices and commands, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Topology;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];

    #[test]
    fn test_new_accumulator_is_empty() {
        let frame = FrameAccumulator::new();
        assert!(frame.is_empty());
        assert_eq!(frame.vertex_count(), 0);
        assert_eq!(frame.ranges().count(), 0);
    }

    #[test]
    fn test_push_line() {
        let mut frame = FrameAccumulator::new();
        frame.push_line(Vec3::ZERO, Vec3::ONE, RED);

        assert_eq!(frame.vertex_count(), 2);
        assert_eq!(frame.commands(), &[DrawCommand::lines(2)]);
        assert_eq!(frame.vertices()[0].position(), Vec3::ZERO);
        assert_eq!(frame.vertices()[1].position(), Vec3::ONE);
        assert_eq!(frame.vertices()[1].color, RED);
    }

    #[test]
    fn test_push_line_strip() {
        let mut frame = FrameAccumulator::new();
        let points = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::X];
        frame.push_line_strip(&points, RED);

        assert_eq!(frame.vertex_count(), 4);
        assert_eq!(frame.commands()[0].topology, Topology::LineStrip);
        assert_eq!(frame.commands()[0].vertex_count, 4);
    }

    #[test]
    fn test_empty_line_strip_is_ignored() {
        let mut frame = FrameAccumulator::new();
        frame.push_line_strip(&[], RED);
        assert!(frame.is_empty());
        assert_eq!(frame.vertex_count(), 0);
    }

    #[test]
    fn test_ranges_partition_vertices() {
        let mut frame = FrameAccumulator::new();
        frame.push_line(Vec3::ZERO, Vec3::X, RED);
        frame.push_line_strip(&[Vec3::ZERO, Vec3::Y, Vec3::Z], RED);
        frame.push_line(Vec3::ZERO, Vec3::Z, RED);

        let ranges: Vec<_> = frame.ranges().collect();
        assert_eq!(
            ranges.iter().map(|r| r.first_vertex).collect::<Vec<_>>(),
            vec![0, 2, 5]
        );
        assert_eq!(ranges.last().unwrap().end_vertex() as usize, frame.vertex_count());
    }

    #[test]
    fn test_range_offsets_saturate() {
        let mut frame = FrameAccumulator::new();
        frame.commands.push(DrawCommand::line_strip(u32::MAX));
        frame.commands.push(DrawCommand::lines(2));
        frame.commands.push(DrawCommand::lines(2));

        let ranges: Vec<_> = frame.ranges().collect();
        assert_eq!(ranges[1].first_vertex, u32::MAX);
        assert_eq!(ranges[2].first_vertex, u32::MAX);
        assert_eq!(ranges[2].end_vertex(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut frame = FrameAccumulator::with_capacity(64);
        for _ in 0..10 {
            frame.push_line(Vec3::ZERO, Vec3::ONE, RED);
        }
        let capacity = frame.vertices.capacity();

        frame.clear();
        assert!(frame.is_empty());
        assert_eq!(frame.vertex_count(), 0);
        assert_eq!(frame.vertices.capacity(), capacity);
    }
}
