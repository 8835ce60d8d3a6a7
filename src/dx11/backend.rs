use {
    super::{input_layout, render_target, shader, ShaderBytecode, VertexBuffer},
    crate::{
        config::ReproConfig,
        error::{created, ReproError, ReproResult, ResultCode, Stage},
        geometry::Vertex,
        layout::InputElement,
        pipeline::{Backend, PrimitiveTopology, Viewport},
        shader::ShaderProgram,
    },
    windows::Win32::{
        Foundation::HWND,
        Graphics::{
            Direct3D::D3D_DRIVER_TYPE_HARDWARE,
            Direct3D11::{
                D3D11CreateDeviceAndSwapChain, ID3D11Device, ID3D11DeviceContext,
                ID3D11InputLayout, ID3D11RenderTargetView, D3D11_CREATE_DEVICE_DEBUG,
                D3D11_CREATE_DEVICE_FLAG, D3D11_SDK_VERSION, D3D11_VIEWPORT,
            },
            Dxgi::{
                Common::{DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_MODE_DESC, DXGI_SAMPLE_DESC},
                IDXGISwapChain, DXGI_PRESENT, DXGI_SWAP_CHAIN_DESC, DXGI_SWAP_EFFECT_DISCARD,
                DXGI_USAGE_RENDER_TARGET_OUTPUT,
            },
        },
    },
};

/// Device, immediate context and swap chain for one window.
pub struct RenderBackend {
    pub device: ID3D11Device,
    pub context: ID3D11DeviceContext,
    pub swap_chain: IDXGISwapChain,
}

impl RenderBackend {
    pub fn swap_chain_desc(window: HWND) -> DXGI_SWAP_CHAIN_DESC {
        DXGI_SWAP_CHAIN_DESC {
            BufferDesc: DXGI_MODE_DESC {
                Format: DXGI_FORMAT_R8G8B8A8_UNORM,
                ..Default::default()
            },
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: 1,
                Quality: 0,
            },
            BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
            BufferCount: 1,
            OutputWindow: window,
            Windowed: true.into(),
            SwapEffect: DXGI_SWAP_EFFECT_DISCARD,
            Flags: 0,
        }
    }

    pub fn creation_flags(config: &ReproConfig) -> D3D11_CREATE_DEVICE_FLAG {
        if config.debug_layer {
            D3D11_CREATE_DEVICE_DEBUG
        } else {
            D3D11_CREATE_DEVICE_FLAG(0)
        }
    }

    pub fn setup(window: HWND, config: &ReproConfig) -> ReproResult<Self> {
        log::info!(
            "Setting up device and swap chain (debug layer: {})",
            config.debug_layer
        );
        let swap_chain_desc = Self::swap_chain_desc(window);
        let mut swap_chain_ptr: Option<IDXGISwapChain> = None;
        let mut device_ptr: Option<ID3D11Device> = None;
        let mut context_ptr: Option<ID3D11DeviceContext> = None;
        unsafe {
            D3D11CreateDeviceAndSwapChain(
                None,
                D3D_DRIVER_TYPE_HARDWARE,
                None,
                Self::creation_flags(config),
                None,
                D3D11_SDK_VERSION,
                Some(&swap_chain_desc),
                Some(&mut swap_chain_ptr),
                Some(&mut device_ptr),
                None,
                Some(&mut context_ptr),
            )
        }
        .map_err(|e| ReproError::DeviceCreation {
            code: ResultCode::from(&e),
        })?;

        let backend = Self {
            device: created(Stage::Device, device_ptr)?,
            context: created(Stage::Device, context_ptr)?,
            swap_chain: created(Stage::Device, swap_chain_ptr)?,
        };
        log::info!("Set up device and swap chain");
        Ok(backend)
    }
}

impl Backend for RenderBackend {
    type Surface = HWND;
    type RenderTarget = ID3D11RenderTargetView;
    type VertexBuffer = VertexBuffer;
    type Bytecode = ShaderBytecode;
    type InputLayout = ID3D11InputLayout;

    fn bring_up(surface: &HWND, config: &ReproConfig) -> ReproResult<Self> {
        Self::setup(*surface, config)
    }

    fn create_render_target(&mut self) -> ReproResult<ID3D11RenderTargetView> {
        render_target::create(&self.device, &self.swap_chain)
    }

    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> ReproResult<VertexBuffer> {
        VertexBuffer::create(&self.device, vertices)
    }

    fn compile_shader(
        &mut self,
        program: &ShaderProgram,
        config: &ReproConfig,
    ) -> ReproResult<ShaderBytecode> {
        shader::compile(program, config)
    }

    fn create_input_layout(
        &mut self,
        elements: &[InputElement],
        bytecode: &ShaderBytecode,
    ) -> ReproResult<ID3D11InputLayout> {
        input_layout::create(&self.device, elements, bytecode.as_bytes())
    }

    fn set_viewport(&mut self, viewport: &Viewport) {
        let viewport = D3D11_VIEWPORT {
            TopLeftX: viewport.top_left_x,
            TopLeftY: viewport.top_left_y,
            Width: viewport.width,
            Height: viewport.height,
            MinDepth: viewport.min_depth,
            MaxDepth: viewport.max_depth,
        };
        unsafe { self.context.RSSetViewports(Some(&[viewport])) }
    }

    fn set_render_target(&mut self, target: &ID3D11RenderTargetView) {
        unsafe { self.context.OMSetRenderTargets(Some(&[Some(target.clone())]), None) }
    }

    fn set_topology(&mut self, topology: PrimitiveTopology) {
        unsafe { self.context.IASetPrimitiveTopology(topology.dx11()) }
    }

    fn set_input_layout(&mut self, layout: &ID3D11InputLayout) {
        unsafe { self.context.IASetInputLayout(layout) }
    }

    fn set_vertex_buffer(&mut self, slot: u32, buffer: &VertexBuffer, stride: u32, offset: u32) {
        if stride != buffer.stride {
            log::warn!(
                "Binding vertex buffer with stride {stride}, it was created with {}",
                buffer.stride
            );
        }
        buffer.set(slot, stride, offset, &self.context);
    }

    fn draw(&mut self, vertex_count: u32, start: u32) {
        unsafe { self.context.Draw(vertex_count, start) }
    }

    fn present(&mut self) {
        let result = unsafe { self.swap_chain.Present(0, DXGI_PRESENT(0)) };
        if result.is_err() {
            log::debug!("Present returned {:x}", result.0 as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, windows::Win32::Foundation::E_POINTER};

    #[test]
    fn missing_device_is_a_bring_up_failure() {
        assert_eq!(ResultCode::NULL_INTERFACE, ResultCode(E_POINTER.0));
        match created::<IDXGISwapChain>(Stage::Device, None) {
            Err(ReproError::DeviceCreation { code }) => assert_eq!(code, ResultCode(E_POINTER.0)),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("null swap chain was accepted"),
        }
    }

    #[test]
    fn swap_chain_is_single_buffered_rgba8() {
        let desc = RenderBackend::swap_chain_desc(HWND::default());
        assert_eq!(desc.BufferCount, 1);
        assert_eq!(desc.BufferDesc.Format, DXGI_FORMAT_R8G8B8A8_UNORM);
        assert_eq!(desc.SampleDesc.Count, 1);
        assert_eq!(desc.SwapEffect, DXGI_SWAP_EFFECT_DISCARD);
        assert!(desc.Windowed.as_bool());
    }

    #[test]
    fn debug_layer_follows_config() {
        let debug = ReproConfig {
            debug_layer: true,
            ..Default::default()
        };
        assert_eq!(RenderBackend::creation_flags(&debug), D3D11_CREATE_DEVICE_DEBUG);
        assert_eq!(
            RenderBackend::creation_flags(&ReproConfig::default()),
            D3D11_CREATE_DEVICE_FLAG(0)
        );
    }
}
