use glam::{Mat4, Vec3, Vec4};

use crate::frame::FrameAccumulator;

/// Angular step used by every curved shape, in degrees.
const ANGLE_STEP_DEG: u32 = 20;
/// Points of a full circle: 0°, 20°, ..., 360° (first and last coincide).
const CIRCLE_POINTS: usize = 19;
/// Points of a half circle: 0°, 20°, ..., 180°.
const ARC_POINTS: usize = 10;

/// Canonical NDC cube corners: far face (z = 1) then near face (z = -1),
/// each wound bottom-left, top-left, top-right, bottom-right.
const FRUSTUM_CORNERS: [Vec4; 8] = [
    Vec4::new(-1.0, -1.0, 1.0, 1.0),
    Vec4::new(-1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, -1.0, 1.0, 1.0),
    Vec4::new(-1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, -1.0, -1.0, 1.0),
];

/// Box edges over corners indexed as `x_bit << 2 | y_bit << 1 | z_bit`.
const BOX_EDGES: [(usize, usize); 12] = [
    // Bottom face (y = min)
    (0, 1),
    (1, 5),
    (5, 4),
    (4, 0),
    // Top face (y = max)
    (2, 3),
    (3, 7),
    (7, 6),
    (6, 2),
    // Vertical edges
    (2, 0),
    (6, 4),
    (3, 1),
    (7, 5),
];

/// Sample `N` points every [`ANGLE_STEP_DEG`] starting at `start_deg`.
///
/// `point` receives `(cos, sin)` of each angle.
fn sample_angles<const N: usize>(start_deg: u32, point: impl Fn(f32, f32) -> Vec3) -> [Vec3; N] {
    std::array::from_fn(|i| {
        let degrees = start_deg + i as u32 * ANGLE_STEP_DEG;
        let (sin, cos) = (degrees as f32).to_radians().sin_cos();
        point(cos, sin)
    })
}

/// Immediate-mode debug shape generators.
///
/// Implementors provide the two primitives, [`line`](Self::line) and
/// [`line_strip`](Self::line_strip). Every other shape decomposes into calls
/// to those two, so each shape contributes a fixed, predictable sequence of
/// draw commands. Shapes only ever append; inputs are not validated, and a
/// zero or negative size simply produces degenerate geometry.
pub trait DebugDraw {
    /// Draw a single line segment (one LINES command, 2 vertices).
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 3]);

    /// Draw a polyline through `points` (one LINE_STRIP command).
    fn line_strip(&mut self, points: &[Vec3], color: [f32; 3]);

    /// Draw a circle in the XY plane around `center`.
    fn circle_xy(&mut self, radius: f32, center: Vec3, color: [f32; 3]) {
        let points: [Vec3; CIRCLE_POINTS] =
            sample_angles(0, |cos, sin| center + Vec3::new(cos * radius, sin * radius, 0.0));
        self.line_strip(&points, color);
    }

    /// Draw a circle in the XZ plane around `center`.
    fn circle_xz(&mut self, radius: f32, center: Vec3, color: [f32; 3]) {
        let points: [Vec3; CIRCLE_POINTS] =
            sample_angles(0, |cos, sin| center + Vec3::new(cos * radius, 0.0, sin * radius));
        self.line_strip(&points, color);
    }

    /// Draw a circle in the YZ plane around `center`.
    fn circle_yz(&mut self, radius: f32, center: Vec3, color: [f32; 3]) {
        let points: [Vec3; CIRCLE_POINTS] =
            sample_angles(0, |cos, sin| center + Vec3::new(0.0, cos * radius, sin * radius));
        self.line_strip(&points, color);
    }

    /// Draw a wireframe sphere as three great circles (XY, XZ, YZ).
    fn sphere(&mut self, radius: f32, center: Vec3, color: [f32; 3]) {
        self.circle_xy(radius, center, color);
        self.circle_xz(radius, center, color);
        self.circle_yz(radius, center, color);
    }

    /// Draw a Y-up capsule.
    ///
    /// The hemispheres are centred at `y = height - radius` and `y = radius`
    /// in absolute coordinates; only the side lines start at `pos.y + radius`.
    fn capsule(&mut self, height: f32, radius: f32, pos: Vec3, color: [f32; 3]) {
        let top = height - radius;
        let bottom = pos.y + radius;

        // Side lines
        for offset in [
            Vec3::new(0.0, 0.0, -radius),
            Vec3::new(0.0, 0.0, radius),
            Vec3::new(-radius, 0.0, 0.0),
            Vec3::new(radius, 0.0, 0.0),
        ] {
            self.line(
                Vec3::new(pos.x + offset.x, bottom, pos.z + offset.z),
                Vec3::new(pos.x + offset.x, top, pos.z + offset.z),
                color,
            );
        }

        // Upper hemisphere arcs
        let arc: [Vec3; ARC_POINTS] = sample_angles(0, |cos, sin| {
            Vec3::new(pos.x + cos * radius, top + sin * radius, pos.z)
        });
        self.line_strip(&arc, color);
        let arc: [Vec3; ARC_POINTS] = sample_angles(0, |cos, sin| {
            Vec3::new(pos.x, top + sin * radius, pos.z + cos * radius)
        });
        self.line_strip(&arc, color);

        // Lower hemisphere arcs
        let arc: [Vec3; ARC_POINTS] = sample_angles(180, |cos, sin| {
            Vec3::new(pos.x + cos * radius, radius + sin * radius, pos.z)
        });
        self.line_strip(&arc, color);
        let arc: [Vec3; ARC_POINTS] = sample_angles(180, |cos, sin| {
            Vec3::new(pos.x, radius + sin * radius, pos.z + cos * radius)
        });
        self.line_strip(&arc, color);

        self.circle_xz(radius, Vec3::new(pos.x, top, pos.z), color);
        self.circle_xz(radius, Vec3::new(pos.x, radius, pos.z), color);
    }

    /// Draw an axis-aligned box spanning `pos + min` to `pos + max` (12 edges).
    fn aabb(&mut self, min: Vec3, max: Vec3, pos: Vec3, color: [f32; 3]) {
        let min = pos + min;
        let max = pos + max;

        // Bottom face
        self.line(min, Vec3::new(max.x, min.y, min.z), color);
        self.line(Vec3::new(max.x, min.y, min.z), Vec3::new(max.x, min.y, max.z), color);
        self.line(Vec3::new(max.x, min.y, max.z), Vec3::new(min.x, min.y, max.z), color);
        self.line(Vec3::new(min.x, min.y, max.z), min, color);
        // Top face
        self.line(Vec3::new(min.x, max.y, min.z), Vec3::new(max.x, max.y, min.z), color);
        self.line(Vec3::new(max.x, max.y, min.z), max, color);
        self.line(max, Vec3::new(min.x, max.y, max.z), color);
        self.line(Vec3::new(min.x, max.y, max.z), Vec3::new(min.x, max.y, min.z), color);
        // Vertical edges
        self.line(min, Vec3::new(min.x, max.y, min.z), color);
        self.line(Vec3::new(max.x, min.y, min.z), Vec3::new(max.x, max.y, min.z), color);
        self.line(Vec3::new(max.x, min.y, max.z), max, color);
        self.line(Vec3::new(min.x, min.y, max.z), Vec3::new(min.x, max.y, max.z), color);
    }

    /// Draw the box `min..max` transformed by `model` (12 edges).
    fn obb(&mut self, min: Vec3, max: Vec3, model: Mat4, color: [f32; 3]) {
        let corners: [Vec3; 8] = std::array::from_fn(|i| {
            let pick = |bit: usize, axis: usize| if i & bit == 0 { min[axis] } else { max[axis] };
            model.transform_point3(Vec3::new(pick(4, 0), pick(2, 1), pick(1, 2)))
        });
        for (a, b) in BOX_EDGES {
            self.line(corners[a], corners[b], color);
        }
    }

    /// Draw a grid on the plane `y = y_level`, centred on the origin.
    ///
    /// Half extents are `floor(x * spacing / 2)` and `floor(z * spacing / 2)`
    /// and grid lines sit at integer coordinates `spacing` apart. A negative
    /// half extent places no grid lines along that axis.
    fn grid(&mut self, x: f32, z: f32, y_level: f32, spacing: f32, color: [f32; 3]) {
        let half_x = grid_half_extent(x, spacing);
        let half_z = grid_half_extent(z, spacing);
        let step = (spacing as i32).max(1) as usize;

        // Lines along Z
        for gx in (-half_x..=half_x).step_by(step) {
            self.line(
                Vec3::new(gx as f32, y_level, -half_z as f32),
                Vec3::new(gx as f32, y_level, half_z as f32),
                color,
            );
        }
        // Lines along X
        for gz in (-half_z..=half_z).step_by(step) {
            self.line(
                Vec3::new(-half_x as f32, y_level, gz as f32),
                Vec3::new(half_x as f32, y_level, gz as f32),
                color,
            );
        }
    }

    /// Draw the view volume of a camera.
    ///
    /// The NDC cube is unprojected through `(proj * view)^-1`. Emits the far
    /// and near faces as closed 5-point strips, then 4 connecting edges.
    fn frustum(&mut self, proj: Mat4, view: Mat4, color: [f32; 3]) {
        let inverse = (proj * view).inverse();
        let c: [Vec3; 8] = std::array::from_fn(|i| {
            let v = inverse * FRUSTUM_CORNERS[i];
            v.truncate() / v.w
        });

        self.line_strip(&[c[0], c[1], c[2], c[3], c[0]], color);
        self.line_strip(&[c[4], c[5], c[6], c[7], c[4]], color);

        for i in 0..4 {
            self.line(c[i], c[i + 4], color);
        }
    }

    /// Draw a cross marker at a point (3 axis-aligned lines).
    fn cross(&mut self, center: Vec3, size: f32, color: [f32; 3]) {
        let half = size * 0.5;
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            self.line(center - axis * half, center + axis * half, color);
        }
    }

    /// Draw a ray from `origin` along `direction` scaled by `length`.
    fn ray(&mut self, origin: Vec3, direction: Vec3, length: f32, color: [f32; 3]) {
        self.line(origin, origin + direction * length, color);
    }

    /// Draw coordinate axes gizmo (R=X, G=Y, B=Z).
    fn axes(&mut self, center: Vec3, size: f32) {
        self.ray(center, Vec3::X, size, [1.0, 0.0, 0.0]);
        self.ray(center, Vec3::Y, size, [0.0, 1.0, 0.0]);
        self.ray(center, Vec3::Z, size, [0.0, 0.0, 1.0]);
    }
}

impl DebugDraw for FrameAccumulator {
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 3]) {
        self.push_line(start, end, color);
    }

    fn line_strip(&mut self, points: &[Vec3], color: [f32; 3]) {
        self.push_line_strip(points, color);
    }
}

/// `floor(size * spacing / 2)`, clamped so that its negation fits in `i32`.
fn grid_half_extent(size: f32, spacing: f32) -> i32 {
    let half = (size * spacing / 2.0).floor() as i64;
    half.clamp(-i64::from(i32::MAX), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{DrawCommand, Topology};

    const WHITE: [f32; 3] = [1.0; 3];
    const EPS: f32 = 1e-4;

    fn positions(frame: &FrameAccumulator) -> Vec<Vec3> {
        frame.vertices().iter().map(|v| v.position()).collect()
    }

    #[test]
    fn test_line() {
        let mut frame = FrameAccumulator::new();
        frame.line(Vec3::ZERO, Vec3::ONE, WHITE);
        assert_eq!(frame.vertex_count(), 2);
        assert_eq!(frame.commands(), &[DrawCommand::lines(2)]);
    }

    #[test]
    fn test_circle_xy_is_closed_strip() {
        let mut frame = FrameAccumulator::new();
        let center = Vec3::new(1.0, 2.0, 3.0);
        frame.circle_xy(2.0, center, WHITE);

        assert_eq!(frame.commands(), &[DrawCommand::line_strip(19)]);
        let points = positions(&frame);
        assert!(points[0].abs_diff_eq(points[18], EPS));
        assert!(points[0].abs_diff_eq(center + Vec3::new(2.0, 0.0, 0.0), EPS));
        for p in &points {
            assert!((p.z - center.z).abs() < EPS);
            assert!((p.distance(center) - 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_circle_planes() {
        let mut frame = FrameAccumulator::new();
        frame.circle_xz(1.0, Vec3::ZERO, WHITE);
        frame.circle_yz(1.0, Vec3::ZERO, WHITE);

        let points = positions(&frame);
        assert!(points[..19].iter().all(|p| p.y.abs() < EPS));
        assert!(points[19..].iter().all(|p| p.x.abs() < EPS));
        // Fifth sample of the YZ circle sits at 80°
        assert!(points[23].abs_diff_eq(Vec3::new(0.0, 0.173_648, 0.984_808), EPS));
    }

    #[test]
    fn test_sphere() {
        let mut frame = FrameAccumulator::new();
        frame.sphere(1.0, Vec3::ZERO, WHITE);
        assert_eq!(frame.command_count(), 3);
        assert_eq!(frame.vertex_count(), 57);
        assert!(
            frame
                .commands()
                .iter()
                .all(|c| *c == DrawCommand::line_strip(19))
        );
    }

    #[test]
    fn test_capsule_decomposition() {
        let mut frame = FrameAccumulator::new();
        frame.capsule(4.0, 1.0, Vec3::ZERO, WHITE);

        assert_eq!(frame.command_count(), 10);
        assert_eq!(frame.vertex_count(), 86);

        let commands = frame.commands();
        assert!(commands[..4].iter().all(|c| *c == DrawCommand::lines(2)));
        assert!(commands[4..8].iter().all(|c| *c == DrawCommand::line_strip(10)));
        assert!(commands[8..].iter().all(|c| *c == DrawCommand::line_strip(19)));
    }

    #[test]
    fn test_capsule_geometry() {
        let mut frame = FrameAccumulator::new();
        frame.capsule(4.0, 1.0, Vec3::new(2.0, 0.0, 0.0), WHITE);
        let points = positions(&frame);

        // First side line runs from y = pos.y + r to y = height - r at z - r
        assert!(points[0].abs_diff_eq(Vec3::new(2.0, 1.0, -1.0), EPS));
        assert!(points[1].abs_diff_eq(Vec3::new(2.0, 3.0, -1.0), EPS));

        // Top arc peaks at height
        let top_arc = &points[8..18];
        assert!(top_arc[0].abs_diff_eq(Vec3::new(3.0, 3.0, 0.0), EPS));
        assert!(top_arc[9].abs_diff_eq(Vec3::new(1.0, 3.0, 0.0), EPS));
        let peak = top_arc.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(peak <= 4.0 + EPS && peak > 3.9);

        // Bottom arc reaches the ground
        let bottom_arc = &points[28..38];
        let lowest = bottom_arc.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert!(lowest.abs() < 0.02);
    }

    #[test]
    fn test_aabb() {
        let mut frame = FrameAccumulator::new();
        let pos = Vec3::new(10.0, 0.0, -5.0);
        let min = Vec3::new(-1.0, -2.0, -3.0);
        let max = Vec3::new(1.0, 2.0, 3.0);
        frame.aabb(min, max, pos, WHITE);

        assert_eq!(frame.command_count(), 12);
        assert_eq!(frame.vertex_count(), 24);
        assert!(frame.commands().iter().all(|c| c.topology == Topology::Lines));

        let lo = pos + min;
        let hi = pos + max;
        let on_box = |v: f32, a: f32, b: f32| (v - a).abs() < EPS || (v - b).abs() < EPS;
        let points = positions(&frame);
        for p in &points {
            assert!(on_box(p.x, lo.x, hi.x));
            assert!(on_box(p.y, lo.y, hi.y));
            assert!(on_box(p.z, lo.z, hi.z));
        }
        // Each edge changes exactly one coordinate
        for edge in points.chunks(2) {
            let d = (edge[1] - edge[0]).abs();
            let changed = [d.x, d.y, d.z].iter().filter(|c| **c > EPS).count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_obb_identity_matches_box() {
        let mut frame = FrameAccumulator::new();
        frame.obb(Vec3::splat(-1.0), Vec3::splat(1.0), Mat4::IDENTITY, WHITE);

        assert_eq!(frame.command_count(), 12);
        let points = positions(&frame);
        for edge in points.chunks(2) {
            assert!(((edge[1] - edge[0]).length() - 2.0).abs() < EPS);
            assert!(edge[0].abs().abs_diff_eq(Vec3::ONE, EPS));
        }
    }

    #[test]
    fn test_obb_transformed() {
        let mut frame = FrameAccumulator::new();
        let model = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0))
            * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        frame.obb(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0), model, WHITE);

        // Local +X maps to world -Z after a 90° turn about Y
        let points = positions(&frame);
        assert!(points[0].abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), EPS));
        assert!(
            points
                .iter()
                .any(|p| p.abs_diff_eq(Vec3::new(0.0, 5.0, -2.0), EPS))
        );
    }

    #[test]
    fn test_grid() {
        let mut frame = FrameAccumulator::new();
        frame.grid(4.0, 6.0, 0.5, 1.0, WHITE);

        // half_x = 2 → 5 lines, half_z = 3 → 7 lines
        assert_eq!(frame.command_count(), 12);
        let points = positions(&frame);
        assert!(points.iter().all(|p| p.y == 0.5));
        assert_eq!(points[0], Vec3::new(-2.0, 0.5, -3.0));
        assert_eq!(points[1], Vec3::new(-2.0, 0.5, 3.0));
        assert_eq!(points[10], Vec3::new(-2.0, 0.5, -3.0));
        assert_eq!(points[11], Vec3::new(2.0, 0.5, -3.0));
    }

    #[test]
    fn test_grid_fractional_spacing_terminates() {
        let mut frame = FrameAccumulator::new();
        frame.grid(10.0, 10.0, 0.0, 0.5, WHITE);
        // half extents floor(2.5) = 2, integer step clamps to 1
        assert_eq!(frame.command_count(), 10);
    }

    #[test]
    fn test_grid_negative_extent_is_empty() {
        let mut frame = FrameAccumulator::new();
        frame.grid(-1.0e10, -4.0, 0.0, 1.0, WHITE);
        assert!(frame.is_empty());

        // Only the lines along X remain, running from +max to -max
        frame.grid(-1.0e10, 4.0, 0.0, 1.0, WHITE);
        assert_eq!(frame.command_count(), 5);
        let points = positions(&frame);
        assert!(points[0].x > 0.0 && points[1].x < 0.0);
        assert_eq!(points[0].z, -2.0);
    }

    #[test]
    fn test_frustum_orthographic() {
        let mut frame = FrameAccumulator::new();
        let proj = Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        frame.frustum(proj, Mat4::IDENTITY, WHITE);

        assert_eq!(
            frame.commands(),
            &[
                DrawCommand::line_strip(5),
                DrawCommand::line_strip(5),
                DrawCommand::lines(2),
                DrawCommand::lines(2),
                DrawCommand::lines(2),
                DrawCommand::lines(2),
            ]
        );
        let points = positions(&frame);
        // Far face first, closed
        assert!(points[0].abs_diff_eq(Vec3::new(-1.0, -1.0, -3.0), EPS));
        assert!(points[4].abs_diff_eq(points[0], EPS));
        // Near face second
        assert!(points[5].abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), EPS));
        // Connecting edge joins far and near corners
        assert!(points[10].abs_diff_eq(points[0], EPS));
        assert!(points[11].abs_diff_eq(points[5], EPS));
    }

    #[test]
    fn test_frustum_perspective_divide() {
        let mut frame = FrameAccumulator::new();
        let proj = Mat4::perspective_rh_gl(90f32.to_radians(), 1.0, 1.0, 10.0);
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        frame.frustum(proj, view, WHITE);

        let points = positions(&frame);
        // 90° FOV: the near face is a 2x2 square at z = -1
        assert!(points[5].abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), 1e-3));
        // and the far face a 20x20 square at z = -10
        assert!(points[0].abs_diff_eq(Vec3::new(-10.0, -10.0, -10.0), 1e-2));
    }

    #[test]
    fn test_cross_ray_axes() {
        let mut frame = FrameAccumulator::new();
        frame.cross(Vec3::ZERO, 2.0, WHITE);
        frame.ray(Vec3::ZERO, Vec3::Y, 3.0, WHITE);
        frame.axes(Vec3::ZERO, 1.0);

        assert_eq!(frame.command_count(), 7);
        let points = positions(&frame);
        assert_eq!(points[0], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(points[7], Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(frame.vertices()[8].color, [1.0, 0.0, 0.0]);
        assert_eq!(frame.vertices()[13].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_shapes_append_in_call_order() {
        let mut frame = FrameAccumulator::new();
        frame.line(Vec3::ZERO, Vec3::X, WHITE);
        frame.sphere(1.0, Vec3::ZERO, WHITE);
        frame.aabb(Vec3::ZERO, Vec3::ONE, Vec3::ZERO, WHITE);
        frame.capsule(2.0, 0.5, Vec3::ZERO, WHITE);

        assert_eq!(frame.command_count(), 1 + 3 + 12 + 10);
        assert_eq!(frame.vertex_count(), 2 + 57 + 24 + 86);
        let total: u32 = frame.commands().iter().map(|c| c.vertex_count).sum();
        assert_eq!(total as usize, frame.vertex_count());
    }
}
