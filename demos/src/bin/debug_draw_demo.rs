//! # Debug Draw Demo
//!
//! Renders an animated debug scene for a fixed number of frames on the
//! headless device and logs what each frame submitted.
//!
//! ```bash
//! # Built-in shaders, 60 frames
//! RUST_LOG=info cargo run --bin debug_draw_demo
//!
//! # Shaders from disk, tiny buffer to exercise overflow handling
//! RUST_LOG=debug cargo run --bin debug_draw_demo -- \
//!     --shader-dir demos/assets --max-vertices 500 --overflow grow
//! ```

use std::path::PathBuf;

use clap::Parser;
use wiredraw::{DebugDrawConfig, DebugDrawError, DebugRenderer, OverflowPolicy, ShaderSources};
use wiredraw_demos::{OrbitCamera, record_scene};
use wiredraw_device::HeadlessDevice;
use wiredraw_vfs::{FileSystemProvider, Vfs};

/// Overflow handling selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliOverflow {
    /// Skip the vertex upload for frames that do not fit.
    #[default]
    Skip,
    /// Reallocate the vertex buffer to fit.
    Grow,
}

impl From<CliOverflow> for OverflowPolicy {
    fn from(cli: CliOverflow) -> Self {
        match cli {
            CliOverflow::Skip => OverflowPolicy::SkipUpload,
            CliOverflow::Grow => OverflowPolicy::Grow,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "debug_draw_demo", about = "wiredraw debug renderer demo", version)]
struct Args {
    /// Number of frames to render.
    #[arg(long, default_value = "60")]
    frames: u32,

    /// Viewport width in pixels.
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value = "720")]
    height: u32,

    /// Vertex buffer capacity.
    #[arg(long, default_value_t = wiredraw::DEFAULT_MAX_VERTICES)]
    max_vertices: u32,

    /// What to do when a frame exceeds the vertex buffer.
    #[arg(long, default_value = "skip", value_enum)]
    overflow: CliOverflow,

    /// Directory containing `shader/debug_draw_vs.glsl` and
    /// `shader/debug_draw_fs.glsl`. Built-in shaders are used otherwise.
    #[arg(long)]
    shader_dir: Option<PathBuf>,

    /// Draw lines on top of everything.
    #[arg(long)]
    no_depth_test: bool,
}

fn main() -> Result<(), DebugDrawError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = DebugDrawConfig::default()
        .with_max_vertices(args.max_vertices)
        .with_overflow_policy(args.overflow.into())
        .with_depth_test(!args.no_depth_test);

    let mut vfs = Vfs::new();
    vfs.mount("builtin", ShaderSources::builtin_provider());
    match &args.shader_dir {
        Some(dir) => {
            log::info!("Loading shaders from {}", dir.display());
            vfs.mount("assets", FileSystemProvider::new(dir));
            vfs.set_default("assets");
        }
        None => vfs.set_default("builtin"),
    }
    let shaders = ShaderSources::load(&vfs, &config)?;

    let mut device = HeadlessDevice::new();
    log::info!("Using {}", device.name());
    let mut renderer = DebugRenderer::init(&mut device, &config, &shaders)?;

    let aspect = args.width as f32 / args.height.max(1) as f32;
    let mut total_draws = 0u64;
    let mut overflowed_frames = 0u32;

    for frame in 0..args.frames {
        let time = frame as f32 / 60.0;
        let camera = OrbitCamera::at(time, aspect);

        record_scene(&mut renderer, time);
        let result = renderer.render(
            &mut device,
            None,
            args.width,
            args.height,
            camera.view_proj(),
        );
        let stats = match result {
            Ok(stats) => stats,
            Err(err) => {
                renderer.shutdown(&mut device);
                return Err(err);
            }
        };

        log::debug!(
            "Frame {}: {} vertices, {} draws, {} skipped",
            frame,
            stats.vertices_uploaded,
            stats.draw_calls,
            stats.skipped_commands
        );
        total_draws += u64::from(stats.draw_calls);
        if stats.overflowed {
            overflowed_frames += 1;
        }
        device.take_calls();
    }

    log::info!(
        "Rendered {} frames: {} draw calls, {} overflowed, final capacity {} vertices",
        args.frames,
        total_draws,
        overflowed_frames,
        renderer.vertex_capacity()
    );

    renderer.shutdown(&mut device);
    log::info!("Live device resources after shutdown: {}", device.live_resources());
    Ok(())
}
