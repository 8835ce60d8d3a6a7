use crate::{
    geometry::VERTEX_STRIDE,
    pipeline::{Backend, PrimitiveTopology, VertexSource, Viewport},
};

/// The draw that reaches the driver with no vertex or pixel shader bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultTrigger {
    pub viewport: Viewport,
    pub topology: PrimitiveTopology,
    pub slot: u32,
    pub stride: u32,
    pub offset: u32,
    pub start_vertex: u32,
}

impl Default for FaultTrigger {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            topology: PrimitiveTopology::TriangleList,
            slot: 0,
            stride: VERTEX_STRIDE,
            offset: 0,
            start_vertex: 0,
        }
    }
}

impl FaultTrigger {
    /// Whole vertices available in a buffer of `byte_width` bytes at this stride.
    pub fn vertex_count(&self, byte_width: u32) -> u32 {
        byte_width.checked_div(self.stride).unwrap_or(0)
    }

    /// Binds the fixed-function state and draws every vertex in `vertex_buffer`.
    /// Nothing here returns a status: if the driver falls over, it does so
    /// outside this process.
    pub fn fire<B: Backend>(
        &self,
        backend: &mut B,
        render_target: &B::RenderTarget,
        input_layout: &B::InputLayout,
        vertex_buffer: &B::VertexBuffer,
    ) {
        let byte_width = vertex_buffer.byte_width();
        let vertex_count = self.vertex_count(byte_width);
        log::debug!("Binding pipeline state for {:?}", self);
        backend.set_viewport(&self.viewport);
        backend.set_render_target(render_target);
        backend.set_topology(self.topology);
        backend.set_input_layout(input_layout);
        // Vertex and pixel shader stages stay unbound.
        backend.set_vertex_buffer(self.slot, vertex_buffer, self.stride, self.offset);
        log::info!("Drawing {vertex_count} vertices from {byte_width} bytes");
        backend.draw(vertex_count, self.start_vertex);
    }
}
