use strum_macros::Display;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
}

impl ShaderKind {
    /// Shader model 5.0 profile for this stage.
    pub fn target(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vs_5_0",
        }
    }
}

/// An HLSL program embedded in the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    pub kind: ShaderKind,
    pub source: String,
    pub entrypoint: String,
}

impl ShaderProgram {
    pub fn vertex(source: impl Into<String>, entrypoint: impl Into<String>) -> Self {
        Self {
            kind: ShaderKind::Vertex,
            source: source.into(),
            entrypoint: entrypoint.into(),
        }
    }

    pub fn target(&self) -> &'static str {
        self.kind.target()
    }
}

pub const VERTEX_SHADER_SOURCE: &str =
    "float4 VSMain(in float4 Position : Position) : SV_Position { return Position; }";
pub const VERTEX_SHADER_ENTRYPOINT: &str = "VSMain";

/// The only shader this program ever compiles. It is never bound.
pub fn vertex_shader() -> ShaderProgram {
    ShaderProgram::vertex(VERTEX_SHADER_SOURCE, VERTEX_SHADER_ENTRYPOINT)
}

/// Turns a compiler message buffer into text: everything up to the first NUL,
/// lossily decoded, trailing whitespace dropped.
pub fn decode_diagnostics(buffer: &[u8]) -> String {
    let end = buffer.iter().position(|b| *b == 0).unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).trim_end().to_string()
}
