//! # wiredraw demos
//!
//! Demo scenes for the wiredraw debug renderer.
//!
//! ## Available Demos
//!
//! - `debug_draw_demo` - Animated debug scene rendered on the headless device

use glam::{Mat4, Vec3};
use wiredraw::DebugDraw;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const GRID_COLOR: [f32; 3] = [0.35, 0.35, 0.35];
const BOX_COLOR: [f32; 3] = [0.9, 0.6, 0.1];
const CAPSULE_COLOR: [f32; 3] = [0.2, 0.8, 0.3];
const SPHERE_COLOR: [f32; 3] = [0.3, 0.5, 1.0];
const FRUSTUM_COLOR: [f32; 3] = [1.0, 1.0, 0.2];

/// Camera circling the origin at `time` seconds.
pub struct OrbitCamera {
    pub view: Mat4,
    pub proj: Mat4,
}

impl OrbitCamera {
    pub fn at(time: f32, aspect: f32) -> Self {
        let eye = Vec3::new(time.cos() * 12.0, 6.0, time.sin() * 12.0);
        Self {
            view: Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y),
            proj: Mat4::perspective_rh_gl(60f32.to_radians(), aspect, 0.1, 100.0),
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }
}

/// Record one frame of the demo scene.
///
/// A floor grid, a spinning box, a row of capsules, a bobbing sphere, the
/// world axes and the frustum of a second camera sweeping over the scene.
pub fn record_scene(draw: &mut impl DebugDraw, time: f32) {
    draw.grid(20.0, 20.0, 0.0, 1.0, GRID_COLOR);
    draw.axes(Vec3::ZERO, 2.0);

    draw.aabb(
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
        Vec3::new(-4.0, 0.5, 0.0),
        BOX_COLOR,
    );
    let spin = Mat4::from_translation(Vec3::new(4.0, 1.0, 0.0)) * Mat4::from_rotation_y(time);
    draw.obb(Vec3::splat(-1.0), Vec3::splat(1.0), spin, BOX_COLOR);

    for i in 0..3 {
        let x = i as f32 * 2.0 - 2.0;
        draw.capsule(2.0, 0.4, Vec3::new(x, 0.0, -4.0), CAPSULE_COLOR);
    }

    let bob = 2.0 + (time * 2.0).sin() * 0.5;
    draw.sphere(0.75, Vec3::new(0.0, bob, 4.0), SPHERE_COLOR);
    draw.cross(Vec3::new(0.0, bob, 4.0), 0.5, SPHERE_COLOR);

    let watcher = Mat4::look_at_rh(
        Vec3::new(0.0, 3.0, 8.0),
        Vec3::new(time.sin() * 4.0, 0.0, 0.0),
        Vec3::Y,
    );
    let lens = Mat4::perspective_rh_gl(40f32.to_radians(), 1.5, 0.5, 6.0);
    draw.frustum(lens, watcher, FRUSTUM_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiredraw::FrameAccumulator;

    #[test]
    fn test_scene_is_deterministic() {
        let mut a = FrameAccumulator::new();
        let mut b = FrameAccumulator::new();
        record_scene(&mut a, 1.25);
        record_scene(&mut b, 1.25);
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn test_scene_fits_default_capacity() {
        let mut frame = FrameAccumulator::new();
        record_scene(&mut frame, 0.0);
        // grid 42 lines, axes 3, aabb 12, obb 12, capsules 3x10, sphere 3,
        // cross 3, frustum 6
        assert_eq!(frame.command_count(), 42 + 3 + 12 + 12 + 30 + 3 + 3 + 6);
        assert!(frame.vertex_count() < wiredraw::DEFAULT_MAX_VERTICES as usize);
    }

    #[test]
    fn test_orbit_camera_looks_at_origin() {
        let camera = OrbitCamera::at(0.0, 1.0);
        let clip = camera.view_proj() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }
}
