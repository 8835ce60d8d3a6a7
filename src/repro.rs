use {
    crate::{
        config::ReproConfig,
        console::Console,
        error::ReproResult,
        gate::{self, Consent},
        geometry::{Vertex, TRIANGLE},
        layout::{self, InputElement, POSITION_LAYOUT},
        pipeline::{Backend, WindowHost},
        shader::{self, ShaderProgram},
        trigger::FaultTrigger,
    },
    std::io::{BufRead, Write},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The draw was issued and the process survived it.
    Finished,
    /// The user did not confirm; nothing was drawn.
    Declined,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// One run of the repro, from window creation to teardown.
pub struct Repro {
    pub config: ReproConfig,
    pub vertices: Vec<Vertex>,
    pub vertex_shader: ShaderProgram,
    pub input_layout: Vec<InputElement>,
    pub trigger: FaultTrigger,
}

impl Repro {
    pub fn new(config: ReproConfig) -> Self {
        Self {
            config,
            vertices: TRIANGLE.to_vec(),
            vertex_shader: shader::vertex_shader(),
            input_layout: POSITION_LAYOUT.to_vec(),
            trigger: FaultTrigger::default(),
        }
    }

    pub fn with_vertex_shader(mut self, program: ShaderProgram) -> Self {
        self.vertex_shader = program;
        self
    }

    pub fn with_input_layout(mut self, elements: &[InputElement]) -> Self {
        self.input_layout = elements.to_vec();
        self
    }

    pub fn run<H, B, O, E>(
        &self,
        mut host: H,
        console: &mut Console<O, E>,
        input: &mut impl BufRead,
    ) -> ReproResult<Outcome>
    where
        H: WindowHost,
        B: Backend<Surface = H::Surface>,
        O: Write,
        E: Write,
    {
        console.status("Creating window");
        let surface = host.open()?;

        console.status("Creating Direct3D 11 device and swap chain");
        let mut backend = B::bring_up(&surface, &self.config)?;

        console.status("Creating render target view");
        let render_target = backend.create_render_target()?;

        console.status("Creating vertex buffer");
        let vertex_buffer = backend.create_vertex_buffer(&self.vertices)?;

        console.status("Compiling vertex shader");
        let bytecode = backend.compile_shader(&self.vertex_shader, &self.config)?;

        console.status("Creating input layout");
        if !layout::matches_vertex_stride(&self.input_layout) {
            log::warn!(
                "Input layout reads {} bytes per vertex, vertex buffer stride is {}",
                layout::slot_stride(&self.input_layout, 0),
                self.trigger.stride
            );
        }
        let input_layout = backend.create_input_layout(&self.input_layout, &bytecode)?;

        if gate::confirm(console, input) == Consent::Decline {
            console.success("Aborting");
            return Ok(Outcome::Declined);
        }

        console.status("Sending commands to immediate context");
        self.trigger
            .fire(&mut backend, &render_target, &input_layout, &vertex_buffer);

        console.status("Swapping buffers");
        backend.present();

        console.status("Cleaning up");
        host.close();

        console.success("Finished");
        Ok(Outcome::Finished)
    }
}
