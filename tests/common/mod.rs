#![allow(dead_code)]

use {
    shaderless_draw::{
        error::{ReproError, ReproResult, ResultCode, Stage},
        geometry::{self, Vertex},
        layout::InputElement,
        pipeline::{Backend, PrimitiveTopology, VertexSource, Viewport, WindowHost},
        shader::ShaderProgram,
        Console, ReproConfig,
    },
    std::{cell::RefCell, rc::Rc},
};

pub const FAILURE_CODE: i32 = 0x887a0004_u32 as i32;
pub const INVALID_ARG: i32 = 0x80070057_u32 as i32;
pub const COMPILE_FAIL: i32 = 0x80004005_u32 as i32;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    OpenWindow,
    CloseWindow,
    BringUp { debug_layer: bool },
    CreateRenderTarget,
    CreateVertexBuffer { bytes: usize },
    CompileShader { entrypoint: String, target: &'static str },
    CreateInputLayout { semantics: Vec<&'static str> },
    SetViewport(Viewport),
    SetRenderTarget(u32),
    SetTopology(PrimitiveTopology),
    SetInputLayout(u32),
    SetVertexBuffer { slot: u32, buffer: u32, stride: u32, offset: u32 },
    Draw { vertex_count: u32, start: u32 },
    Present,
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

/// Records every call and fails at `fail`, if set.
#[derive(Clone)]
pub struct Script {
    pub journal: Journal,
    pub fail: Option<Stage>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            journal: Rc::new(RefCell::new(Vec::new())),
            fail: None,
        }
    }

    pub fn failing_at(stage: Stage) -> Self {
        Self {
            fail: Some(stage),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }

    fn fails(&self, stage: Stage) -> bool {
        self.fail == Some(stage)
    }
}

pub struct MockHost(pub Script);

impl WindowHost for MockHost {
    type Surface = Script;

    fn open(&mut self) -> ReproResult<Script> {
        self.0.record(Call::OpenWindow);
        if self.0.fails(Stage::Window) {
            return Err(ReproError::WindowCreation {
                code: ResultCode(FAILURE_CODE),
            });
        }
        Ok(self.0.clone())
    }

    fn close(self) {
        self.0.record(Call::CloseWindow);
    }
}

pub struct MockBytecode {
    pub inputs: Vec<String>,
}

pub struct MockVertexBuffer {
    pub id: u32,
    pub bytes: u32,
}

impl VertexSource for MockVertexBuffer {
    fn byte_width(&self) -> u32 {
        self.bytes
    }
}

pub struct MockBackend {
    script: Script,
}

impl Backend for MockBackend {
    type Surface = Script;
    type RenderTarget = u32;
    type VertexBuffer = MockVertexBuffer;
    type Bytecode = MockBytecode;
    type InputLayout = u32;

    fn bring_up(surface: &Script, config: &ReproConfig) -> ReproResult<Self> {
        surface.record(Call::BringUp {
            debug_layer: config.debug_layer,
        });
        if surface.fails(Stage::Device) {
            return Err(ReproError::DeviceCreation {
                code: ResultCode(FAILURE_CODE),
            });
        }
        Ok(Self {
            script: surface.clone(),
        })
    }

    fn create_render_target(&mut self) -> ReproResult<u32> {
        self.script.record(Call::CreateRenderTarget);
        if self.script.fails(Stage::RenderTarget) {
            return Err(ReproError::ViewCreation {
                code: ResultCode(FAILURE_CODE),
            });
        }
        Ok(1)
    }

    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> ReproResult<MockVertexBuffer> {
        let bytes = geometry::as_bytes(vertices).len();
        self.script.record(Call::CreateVertexBuffer { bytes });
        if self.script.fails(Stage::VertexBuffer) {
            return Err(ReproError::BufferCreation {
                code: ResultCode(FAILURE_CODE),
            });
        }
        Ok(MockVertexBuffer {
            id: 2,
            bytes: bytes as u32,
        })
    }

    fn compile_shader(
        &mut self,
        program: &ShaderProgram,
        _config: &ReproConfig,
    ) -> ReproResult<MockBytecode> {
        self.script.record(Call::CompileShader {
            entrypoint: program.entrypoint.clone(),
            target: program.target(),
        });
        if !program.source.contains(&format!("{}(", program.entrypoint)) {
            return Err(ReproError::ShaderCompile {
                code: ResultCode(COMPILE_FAIL),
                diagnostics: format!(
                    "error X3501: '{}': entrypoint not found",
                    program.entrypoint
                ),
            });
        }
        let inputs = ["Position", "TEXCOORD", "COLOR"]
            .into_iter()
            .filter(|semantic| program.source.contains(&format!(": {semantic})")))
            .map(String::from)
            .collect();
        Ok(MockBytecode { inputs })
    }

    fn create_input_layout(
        &mut self,
        elements: &[InputElement],
        bytecode: &MockBytecode,
    ) -> ReproResult<u32> {
        self.script.record(Call::CreateInputLayout {
            semantics: elements.iter().map(|e| e.semantic).collect(),
        });
        let matches = elements
            .iter()
            .all(|e| bytecode.inputs.iter().any(|input| input == e.semantic));
        if !matches {
            return Err(ReproError::LayoutCreation {
                code: ResultCode(INVALID_ARG),
            });
        }
        Ok(3)
    }

    fn set_viewport(&mut self, viewport: &Viewport) {
        self.script.record(Call::SetViewport(*viewport));
    }

    fn set_render_target(&mut self, target: &u32) {
        self.script.record(Call::SetRenderTarget(*target));
    }

    fn set_topology(&mut self, topology: PrimitiveTopology) {
        self.script.record(Call::SetTopology(topology));
    }

    fn set_input_layout(&mut self, layout: &u32) {
        self.script.record(Call::SetInputLayout(*layout));
    }

    fn set_vertex_buffer(
        &mut self,
        slot: u32,
        buffer: &MockVertexBuffer,
        stride: u32,
        offset: u32,
    ) {
        self.script.record(Call::SetVertexBuffer {
            slot,
            buffer: buffer.id,
            stride,
            offset,
        });
    }

    fn draw(&mut self, vertex_count: u32, start: u32) {
        self.script.record(Call::Draw {
            vertex_count,
            start,
        });
    }

    fn present(&mut self) {
        self.script.record(Call::Present);
    }
}

pub type TestConsole = Console<Vec<u8>, Vec<u8>>;

pub fn console() -> TestConsole {
    Console::new(Vec::new(), Vec::new())
}

pub fn output(console: TestConsole) -> (String, String) {
    let (out, err) = console.into_inner();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
