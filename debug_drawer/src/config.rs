/// Default vertex capacity of the GPU vertex buffer.
pub const DEFAULT_MAX_VERTICES: u32 = 100_000;

/// Default resource path of the debug line vertex shader.
pub const DEFAULT_VERTEX_SHADER_PATH: &str = "shader/debug_draw_vs.glsl";

/// Default resource path of the debug line fragment shader.
pub const DEFAULT_FRAGMENT_SHADER_PATH: &str = "shader/debug_draw_fs.glsl";

/// What the renderer does when a frame holds more vertices than the
/// vertex buffer can store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Report the overflow, keep the previous buffer contents and skip any
    /// draw that would read past the end of the buffer.
    #[default]
    SkipUpload,
    /// Reallocate the vertex buffer with room for at least twice the
    /// current capacity, then upload normally.
    Grow,
}

/// Debug renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugDrawConfig {
    /// Vertex capacity of the GPU vertex buffer.
    pub max_vertices: u32,
    /// Path of the vertex shader in the resource store.
    pub vertex_shader_path: String,
    /// Path of the fragment shader in the resource store.
    pub fragment_shader_path: String,
    pub overflow_policy: OverflowPolicy,
    /// Test lines against the depth buffer. When off, lines draw on top.
    pub depth_test: bool,
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            vertex_shader_path: DEFAULT_VERTEX_SHADER_PATH.to_owned(),
            fragment_shader_path: DEFAULT_FRAGMENT_SHADER_PATH.to_owned(),
            overflow_policy: OverflowPolicy::default(),
            depth_test: true,
        }
    }
}

impl DebugDrawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_vertices(mut self, max_vertices: u32) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_vertex_shader_path(mut self, path: impl Into<String>) -> Self {
        self.vertex_shader_path = path.into();
        self
    }

    pub fn with_fragment_shader_path(mut self, path: impl Into<String>) -> Self {
        self.fragment_shader_path = path.into();
        self
    }

    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    pub fn with_depth_test(mut self, depth_test: bool) -> Self {
        self.depth_test = depth_test;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DebugDrawConfig::default();
        assert_eq!(config.max_vertices, 100_000);
        assert_eq!(config.vertex_shader_path, "shader/debug_draw_vs.glsl");
        assert_eq!(config.fragment_shader_path, "shader/debug_draw_fs.glsl");
        assert_eq!(config.overflow_policy, OverflowPolicy::SkipUpload);
        assert!(config.depth_test);
    }

    #[test]
    fn test_builder() {
        let config = DebugDrawConfig::new()
            .with_max_vertices(64)
            .with_vertex_shader_path("lines/vs.glsl")
            .with_fragment_shader_path("lines/fs.glsl")
            .with_overflow_policy(OverflowPolicy::Grow)
            .with_depth_test(false);

        assert_eq!(config.max_vertices, 64);
        assert_eq!(config.vertex_shader_path, "lines/vs.glsl");
        assert_eq!(config.fragment_shader_path, "lines/fs.glsl");
        assert_eq!(config.overflow_policy, OverflowPolicy::Grow);
        assert!(!config.depth_test);
    }
}
