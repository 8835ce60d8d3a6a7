use {
    crate::{
        config::ReproConfig,
        error::{ReproError, ReproResult, ResultCode},
        shader::{decode_diagnostics, ShaderKind, ShaderProgram},
    },
    std::{ffi::CString, slice::from_raw_parts},
    windows::Win32::{
        Foundation::E_INVALIDARG,
        Graphics::Direct3D::{
            Fxc::{D3DCompile, D3DCOMPILE_DEBUG, D3DCOMPILE_SKIP_OPTIMIZATION},
            ID3DBlob,
        },
    },
    windows_strings::{s, PCSTR},
};

/// Compiled shader bytecode. Only ever read, never turned into a shader object.
pub struct ShaderBytecode {
    blob: ID3DBlob,
}

impl ShaderBytecode {
    pub fn as_bytes(&self) -> &[u8] {
        blob_bytes(&self.blob)
    }
}

fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    unsafe { from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize()) }
}

pub fn compile_flags(config: &ReproConfig) -> u32 {
    if config.debug_shaders {
        D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION
    } else {
        0
    }
}

pub fn target(kind: ShaderKind) -> PCSTR {
    match kind {
        ShaderKind::Vertex => s!("vs_5_0"),
    }
}

pub fn compile(program: &ShaderProgram, config: &ReproConfig) -> ReproResult<ShaderBytecode> {
    let entrypoint_cstring =
        CString::new(program.entrypoint.as_str()).map_err(|_| ReproError::ShaderCompile {
            code: ResultCode(E_INVALIDARG.0),
            diagnostics: "entrypoint contains a NUL byte".to_string(),
        })?;
    log::info!(
        "Beginning compile of {} shader, entrypoint {:?}, target {}",
        program.kind,
        entrypoint_cstring,
        program.target()
    );

    let mut blob_ptr: Option<ID3DBlob> = None;
    let mut error_blob: Option<ID3DBlob> = None;
    let result = unsafe {
        D3DCompile(
            program.source.as_ptr().cast(),
            program.source.len(),
            PCSTR::null(),
            None,
            None,
            PCSTR::from_raw(entrypoint_cstring.as_ptr() as *const u8),
            target(program.kind),
            compile_flags(config),
            0,
            &mut blob_ptr,
            Some(&mut error_blob),
        )
    };
    let diagnostics = error_blob
        .as_ref()
        .map(|blob| decode_diagnostics(blob_bytes(blob)))
        .unwrap_or_default();

    match (result, blob_ptr) {
        (Ok(()), Some(blob)) => {
            if !diagnostics.is_empty() {
                log::warn!("Compiler output for {} shader:\n{diagnostics}", program.kind);
            }
            log::info!(
                "Compile successful for {} shader, entrypoint {:?}",
                program.kind,
                entrypoint_cstring
            );
            Ok(ShaderBytecode { blob })
        }
        (Ok(()), None) => Err(ReproError::ShaderCompile {
            code: ResultCode::NULL_INTERFACE,
            diagnostics,
        }),
        (Err(e), _) => Err(ReproError::ShaderCompile {
            code: ResultCode::from(&e),
            diagnostics,
        }),
    }
}
