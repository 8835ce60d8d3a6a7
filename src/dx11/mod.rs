pub mod backend;
pub mod input_layout;
pub mod render_target;
pub mod shader;
pub mod vertex_buffer;

pub use {
    backend::RenderBackend, shader::ShaderBytecode, vertex_buffer::VertexBuffer,
};
