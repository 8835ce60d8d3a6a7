use {
    std::fmt,
    strum_macros::Display,
    thiserror::Error,
};

/// The stage a run was in when it stopped.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    #[strum(to_string = "window")]
    Window,
    #[strum(to_string = "device bring-up")]
    Device,
    #[strum(to_string = "render target view")]
    RenderTarget,
    #[strum(to_string = "vertex buffer")]
    VertexBuffer,
    #[strum(to_string = "vertex shader compile")]
    Shader,
    #[strum(to_string = "input layout")]
    InputLayout,
}

/// Native `HRESULT`, printed the way the Windows SDK headers print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCode(pub i32);

impl ResultCode {
    /// `E_POINTER`, for a call that succeeded without handing back its interface.
    pub const NULL_INTERFACE: Self = Self(0x80004003_u32 as i32);
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0 as u32)
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

#[cfg(windows)]
impl From<&windows_core::Error> for ResultCode {
    fn from(error: &windows_core::Error) -> Self {
        Self(error.code().0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReproError {
    #[error("Failed to create window! CreateWindowExW return code: {code}")]
    WindowCreation { code: ResultCode },
    #[error("Failed to create device! D3D11CreateDeviceAndSwapChain return code: {code}")]
    DeviceCreation { code: ResultCode },
    #[error("Failed to create render target view! ID3D11Device*->CreateRenderTargetView return code: {code}")]
    ViewCreation { code: ResultCode },
    #[error("Failed to create vertex buffer! ID3D11Device*->CreateBuffer return code: {code}")]
    BufferCreation { code: ResultCode },
    #[error("Failed to compile vertex shader! D3DCompile return code: {code}\nCompilation error output:\n{diagnostics}")]
    ShaderCompile {
        code: ResultCode,
        diagnostics: String,
    },
    #[error("Failed to create input layout! ID3D11Device*->CreateInputLayout return code: {code}")]
    LayoutCreation { code: ResultCode },
}

impl ReproError {
    pub fn stage(&self) -> Stage {
        use ReproError::*;
        match self {
            WindowCreation { .. } => Stage::Window,
            DeviceCreation { .. } => Stage::Device,
            ViewCreation { .. } => Stage::RenderTarget,
            BufferCreation { .. } => Stage::VertexBuffer,
            ShaderCompile { .. } => Stage::Shader,
            LayoutCreation { .. } => Stage::InputLayout,
        }
    }

    pub fn code(&self) -> ResultCode {
        use ReproError::*;
        match self {
            WindowCreation { code }
            | DeviceCreation { code }
            | ViewCreation { code }
            | BufferCreation { code }
            | ShaderCompile { code, .. }
            | LayoutCreation { code } => *code,
        }
    }

    // Every stage failure is terminal.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type ReproResult<T> = Result<T, ReproError>;

impl Stage {
    pub fn error(self, code: ResultCode) -> ReproError {
        use Stage::*;
        match self {
            Window => ReproError::WindowCreation { code },
            Device => ReproError::DeviceCreation { code },
            RenderTarget => ReproError::ViewCreation { code },
            VertexBuffer => ReproError::BufferCreation { code },
            Shader => ReproError::ShaderCompile {
                code,
                diagnostics: String::new(),
            },
            InputLayout => ReproError::LayoutCreation { code },
        }
    }
}

/// The out-parameter of a creation call that reported success. A success
/// with nothing written is still a failure of `stage`.
pub fn created<T>(stage: Stage, interface: Option<T>) -> ReproResult<T> {
    interface.ok_or_else(|| stage.error(ResultCode::NULL_INTERFACE))
}
