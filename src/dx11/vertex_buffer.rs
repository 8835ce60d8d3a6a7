use {
    crate::{
        error::{created, ReproError, ReproResult, ResultCode, Stage},
        geometry::{self, Vertex},
        pipeline::VertexSource,
    },
    windows::Win32::Graphics::Direct3D11::{
        ID3D11Buffer, ID3D11Device, ID3D11DeviceContext, D3D11_BIND_VERTEX_BUFFER,
        D3D11_BUFFER_DESC, D3D11_SUBRESOURCE_DATA, D3D11_USAGE_IMMUTABLE,
    },
};

pub struct VertexBuffer {
    pub buffer: ID3D11Buffer,
    pub stride: u32,
    pub byte_width: u32,
}

impl VertexBuffer {
    /// Uploads `vertices` once; the buffer has no update path afterwards.
    pub fn create(device: &ID3D11Device, vertices: &[Vertex]) -> ReproResult<Self> {
        let data = geometry::as_bytes(vertices);
        let byte_width = data.len() as u32;

        log::info!("Setting up vertex buffer of {byte_width} bytes");
        let desc = D3D11_BUFFER_DESC {
            ByteWidth: byte_width,
            Usage: D3D11_USAGE_IMMUTABLE,
            BindFlags: D3D11_BIND_VERTEX_BUFFER.0 as u32,
            CPUAccessFlags: 0,
            MiscFlags: 0,
            StructureByteStride: 0,
        };
        let subresource_data = D3D11_SUBRESOURCE_DATA {
            pSysMem: data.as_ptr().cast(),
            SysMemPitch: 0,
            SysMemSlicePitch: 0,
        };

        let mut ptr: Option<ID3D11Buffer> = None;
        unsafe { device.CreateBuffer(&desc, Some(&subresource_data), Some(&mut ptr)) }.map_err(
            |e| ReproError::BufferCreation {
                code: ResultCode::from(&e),
            },
        )?;
        let buffer = created(Stage::VertexBuffer, ptr)?;
        log::info!("Set up vertex buffer");

        Ok(Self {
            buffer,
            stride: size_of::<Vertex>() as u32,
            byte_width,
        })
    }

    pub fn set(&self, slot: u32, stride: u32, offset: u32, device_context: &ID3D11DeviceContext) {
        let buffers = [Some(self.buffer.clone())];
        unsafe {
            device_context.IASetVertexBuffers(
                slot,
                1,
                Some(buffers.as_ptr()),
                Some(&stride),
                Some(&offset),
            );
        }
    }
}

impl VertexSource for VertexBuffer {
    fn byte_width(&self) -> u32 {
        self.byte_width
    }
}
