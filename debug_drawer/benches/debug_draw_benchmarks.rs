use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{Mat4, Vec3};

use wiredraw::{DebugDraw, DebugDrawConfig, DebugRenderer, FrameAccumulator, ShaderSources};
use wiredraw_device::HeadlessDevice;

const COLOR: [f32; 3] = [0.2, 0.8, 0.2];

// ---------------------------------------------------------------------------
// Shape generation
// ---------------------------------------------------------------------------

fn bench_lines(c: &mut Criterion) {
    c.bench_function("accumulate_1000_lines", |b| {
        let mut frame = FrameAccumulator::with_capacity(2000);
        b.iter(|| {
            for i in 0..1000 {
                let x = i as f32;
                frame.line(Vec3::new(x, 0.0, 0.0), Vec3::new(x, 1.0, 0.0), COLOR);
            }
            black_box(frame.vertex_count());
            frame.clear();
        });
    });
}

fn bench_spheres(c: &mut Criterion) {
    c.bench_function("accumulate_100_spheres", |b| {
        let mut frame = FrameAccumulator::with_capacity(5700);
        b.iter(|| {
            for i in 0..100 {
                frame.sphere(1.0, Vec3::new(i as f32, 0.0, 0.0), COLOR);
            }
            black_box(frame.vertex_count());
            frame.clear();
        });
    });
}

fn bench_capsules_and_boxes(c: &mut Criterion) {
    c.bench_function("accumulate_100_capsules_and_obbs", |b| {
        let mut frame = FrameAccumulator::with_capacity(11_000);
        let model = Mat4::from_rotation_y(0.5);
        b.iter(|| {
            for i in 0..100 {
                let pos = Vec3::new(i as f32, 0.0, 0.0);
                frame.capsule(2.0, 0.5, pos, COLOR);
                frame.obb(Vec3::splat(-0.5), Vec3::splat(0.5), model, COLOR);
            }
            black_box(frame.vertex_count());
            frame.clear();
        });
    });
}

fn bench_grid(c: &mut Criterion) {
    c.bench_function("accumulate_grid_100x100", |b| {
        let mut frame = FrameAccumulator::with_capacity(1000);
        b.iter(|| {
            frame.grid(100.0, 100.0, 0.0, 1.0, COLOR);
            black_box(frame.vertex_count());
            frame.clear();
        });
    });
}

// ---------------------------------------------------------------------------
// Frame submission
// ---------------------------------------------------------------------------

fn bench_render_headless(c: &mut Criterion) {
    let mut device = HeadlessDevice::new();
    let config = DebugDrawConfig::default();
    let Ok(mut renderer) = DebugRenderer::init(&mut device, &config, &ShaderSources::builtin())
    else {
        return;
    };
    let view_proj = Mat4::perspective_rh_gl(1.0, 16.0 / 9.0, 0.1, 100.0);

    c.bench_function("headless_render_500_spheres", |b| {
        b.iter(|| {
            for i in 0..500 {
                renderer.sphere(0.5, Vec3::new(i as f32, 0.0, 0.0), COLOR);
            }
            let stats = renderer.render(&mut device, None, 1280, 720, view_proj);
            black_box(stats.is_ok());
            device.take_calls();
        });
    });

    renderer.shutdown(&mut device);
}

criterion_group!(
    benches,
    bench_lines,
    bench_spheres,
    bench_capsules_and_boxes,
    bench_grid,
    bench_render_headless,
);
criterion_main!(benches);
