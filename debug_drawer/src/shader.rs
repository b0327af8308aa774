use wiredraw_vfs::{MemoryProvider, Vfs};

use crate::config::{DEFAULT_FRAGMENT_SHADER_PATH, DEFAULT_VERTEX_SHADER_PATH, DebugDrawConfig};
use crate::error::DebugDrawError;

/// Built-in debug line vertex shader (GLSL).
///
/// Transforms the position by the view-projection matrix and passes the
/// vertex color through. The texture coordinate input is declared to match
/// the vertex layout but never read.
pub const DEBUG_DRAW_VERTEX_SHADER: &str = r#"#version 330 core

layout(std140) uniform CameraUniforms {
    mat4 view_proj;
};

layout(location = 0) in vec3 position;
layout(location = 1) in vec2 uv;
layout(location = 2) in vec3 color;

out vec3 v_color;

void main() {
    gl_Position = view_proj * vec4(position, 1.0);
    v_color = color;
}
"#;

/// Built-in debug line fragment shader (GLSL).
pub const DEBUG_DRAW_FRAGMENT_SHADER: &str = r#"#version 330 core

in vec3 v_color;
out vec4 out_color;

void main() {
    out_color = vec4(v_color, 1.0);
}
"#;

/// Vertex and fragment shader text for the debug line program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// The shaders compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            vertex: DEBUG_DRAW_VERTEX_SHADER.to_owned(),
            fragment: DEBUG_DRAW_FRAGMENT_SHADER.to_owned(),
        }
    }

    /// Read both stages from the resource store at the configured paths.
    pub fn load(vfs: &Vfs, config: &DebugDrawConfig) -> Result<Self, DebugDrawError> {
        let vertex = read_stage(vfs, &config.vertex_shader_path)?;
        let fragment = read_stage(vfs, &config.fragment_shader_path)?;
        log::debug!(
            "Loaded debug draw shaders from '{}' and '{}'",
            config.vertex_shader_path,
            config.fragment_shader_path
        );
        Ok(Self { vertex, fragment })
    }

    /// A memory provider holding the built-in shaders at the default paths.
    ///
    /// Mount it as a fallback source so [`load`](Self::load) works without
    /// shader files on disk.
    pub fn builtin_provider() -> MemoryProvider {
        let provider = MemoryProvider::new();
        provider.insert(DEFAULT_VERTEX_SHADER_PATH, DEBUG_DRAW_VERTEX_SHADER);
        provider.insert(DEFAULT_FRAGMENT_SHADER_PATH, DEBUG_DRAW_FRAGMENT_SHADER);
        provider
    }
}

fn read_stage(vfs: &Vfs, path: &str) -> Result<String, DebugDrawError> {
    let source = vfs.read_to_string(path)?;
    if source.trim().is_empty() {
        return Err(DebugDrawError::Shader(format!("shader '{path}' is empty")));
    }
    Ok(source)
}
