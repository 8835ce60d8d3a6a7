use crate::{
    config::ReproConfig, error::ReproResult, geometry::Vertex, layout::InputElement,
    shader::ShaderProgram,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
}

#[cfg(windows)]
impl PrimitiveTopology {
    pub fn dx11(&self) -> windows::Win32::Graphics::Direct3D::D3D_PRIMITIVE_TOPOLOGY {
        use windows::Win32::Graphics::Direct3D::D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST;
        match self {
            PrimitiveTopology::TriangleList => D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST,
        }
    }
}

/// Rasterizer viewport. The default is all zeroes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top_left_x: f32,
    pub top_left_y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// Owner of the OS window the swap chain presents into.
pub trait WindowHost {
    type Surface;

    fn open(&mut self) -> ReproResult<Self::Surface>;
    /// Best-effort teardown; failures are not reported.
    fn close(self);
}

/// A vertex buffer as created on the device.
pub trait VertexSource {
    /// Size of the uploaded data in bytes.
    fn byte_width(&self) -> u32;
}

/// A device, its immediate context and swap chain.
///
/// There is deliberately no way to bind a shader stage through this trait:
/// whatever is drawn through it is drawn with the vertex and pixel stages in
/// their default, unbound state.
pub trait Backend: Sized {
    type Surface;
    type RenderTarget;
    type VertexBuffer: VertexSource;
    type Bytecode;
    type InputLayout;

    fn bring_up(surface: &Self::Surface, config: &ReproConfig) -> ReproResult<Self>;

    fn create_render_target(&mut self) -> ReproResult<Self::RenderTarget>;
    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> ReproResult<Self::VertexBuffer>;
    fn compile_shader(
        &mut self,
        program: &ShaderProgram,
        config: &ReproConfig,
    ) -> ReproResult<Self::Bytecode>;
    fn create_input_layout(
        &mut self,
        elements: &[InputElement],
        bytecode: &Self::Bytecode,
    ) -> ReproResult<Self::InputLayout>;

    fn set_viewport(&mut self, viewport: &Viewport);
    fn set_render_target(&mut self, target: &Self::RenderTarget);
    fn set_topology(&mut self, topology: PrimitiveTopology);
    fn set_input_layout(&mut self, layout: &Self::InputLayout);
    fn set_vertex_buffer(&mut self, slot: u32, buffer: &Self::VertexBuffer, stride: u32, offset: u32);
    fn draw(&mut self, vertex_count: u32, start: u32);
    fn present(&mut self);
}
