use {glam::Vec3, std::mem::size_of_val};

#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: Vec3,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
];

pub const VERTEX_STRIDE: u32 = (3 * size_of::<f32>()) as u32;
pub const VERTEX_BUFFER_BYTE_WIDTH: u32 = (TRIANGLE.len() * size_of::<Vertex>()) as u32;
pub const DRAW_VERTEX_COUNT: u32 = VERTEX_BUFFER_BYTE_WIDTH / VERTEX_STRIDE;

/// Raw bytes of a vertex slice, as handed to the device.
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(vertices.as_ptr().cast::<u8>(), size_of_val(vertices)) }
}
