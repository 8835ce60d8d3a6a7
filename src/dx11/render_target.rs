use {
    crate::error::{created, ReproError, ReproResult, ResultCode, Stage},
    windows::Win32::Graphics::{
        Direct3D11::{ID3D11Device, ID3D11RenderTargetView, ID3D11Resource},
        Dxgi::IDXGISwapChain,
    },
};

fn view_error(error: windows_core::Error) -> ReproError {
    ReproError::ViewCreation {
        code: ResultCode::from(&error),
    }
}

pub fn get_back_buffer(swap_chain: &IDXGISwapChain) -> ReproResult<ID3D11Resource> {
    log::debug!("Fetching back buffer 0");
    unsafe { swap_chain.GetBuffer(0) }.map_err(view_error)
}

/// Wraps back buffer 0 in a view that inherits its format.
pub fn create(
    device: &ID3D11Device,
    swap_chain: &IDXGISwapChain,
) -> ReproResult<ID3D11RenderTargetView> {
    let back_buffer = get_back_buffer(swap_chain)?;
    log::info!("Setting up render target view");
    let mut render_target_view_ptr: Option<ID3D11RenderTargetView> = None;
    unsafe {
        device.CreateRenderTargetView(&back_buffer, None, Some(&mut render_target_view_ptr))
    }
    .map_err(view_error)?;
    let render_target_view = created(Stage::RenderTarget, render_target_view_ptr)?;
    log::info!("Set up render target view");
    Ok(render_target_view)
}
