use {
    crate::{
        error::{created, ReproError, ReproResult, ResultCode, Stage},
        layout::{ElementFormat, InputClass, InputElement},
    },
    std::ffi::CString,
    windows::Win32::{
        Foundation::E_INVALIDARG,
        Graphics::{
            Direct3D11::{
                ID3D11Device, ID3D11InputLayout, D3D11_INPUT_CLASSIFICATION,
                D3D11_INPUT_ELEMENT_DESC, D3D11_INPUT_PER_VERTEX_DATA,
            },
            Dxgi::Common::{DXGI_FORMAT, DXGI_FORMAT_R32G32B32_FLOAT},
        },
    },
    windows_strings::PCSTR,
};

fn format(format: ElementFormat) -> DXGI_FORMAT {
    match format {
        ElementFormat::Float3 => DXGI_FORMAT_R32G32B32_FLOAT,
    }
}

fn classification(class: InputClass) -> D3D11_INPUT_CLASSIFICATION {
    match class {
        InputClass::PerVertex => D3D11_INPUT_PER_VERTEX_DATA,
    }
}

/// Builds the layout and lets the runtime check it against the input
/// signature embedded in `bytecode`.
pub fn create(
    device: &ID3D11Device,
    elements: &[InputElement],
    bytecode: &[u8],
) -> ReproResult<ID3D11InputLayout> {
    let semantic_names = elements
        .iter()
        .map(|e| CString::new(e.semantic))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ReproError::LayoutCreation {
            code: ResultCode(E_INVALIDARG.0),
        })?;
    let input_layout_description: Vec<D3D11_INPUT_ELEMENT_DESC> = elements
        .iter()
        .zip(&semantic_names)
        .map(|(element, name)| D3D11_INPUT_ELEMENT_DESC {
            SemanticName: PCSTR::from_raw(name.as_ptr() as *const u8),
            SemanticIndex: element.semantic_index,
            Format: format(element.format),
            InputSlot: element.slot,
            AlignedByteOffset: element.offset,
            InputSlotClass: classification(element.class),
            InstanceDataStepRate: 0,
        })
        .collect();

    log::info!(
        "Creating input layout with {} element(s) against {} bytes of bytecode",
        elements.len(),
        bytecode.len()
    );
    let mut layout_ptr: Option<ID3D11InputLayout> = None;
    unsafe { device.CreateInputLayout(&input_layout_description, bytecode, Some(&mut layout_ptr)) }
        .map_err(|e| ReproError::LayoutCreation {
            code: ResultCode::from(&e),
        })?;
    let layout = created(Stage::InputLayout, layout_ptr)?;
    log::info!("Created input layout");
    Ok(layout)
}
