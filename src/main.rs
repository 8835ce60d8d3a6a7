use {
    shaderless_draw::{logging, Console, ReproConfig},
    std::process::ExitCode,
};

fn main() -> ExitCode {
    let config = ReproConfig::from_build();
    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to set up logging: {e:#}");
    }
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    log::info!("Starting {name} {version}");

    let mut console = Console::stdio();
    run(&config, &mut console)
}

#[cfg(windows)]
fn run(config: &ReproConfig, console: &mut Console<std::io::Stdout, std::io::Stderr>) -> ExitCode {
    use shaderless_draw::{dx11::RenderBackend, window::Win32WindowHost, Repro};

    let host = Win32WindowHost::new(config);
    let stdin = std::io::stdin();
    let result = Repro::new(config.clone()).run::<_, RenderBackend, _, _>(
        host,
        console,
        &mut stdin.lock(),
    );
    match result {
        Ok(outcome) => {
            log::info!("Run ended: {outcome:?}");
            ExitCode::from(outcome.exit_code())
        }
        Err(error) => {
            log::debug!("Stopped during {}", error.stage());
            console.error(&error.to_string());
            ExitCode::from(error.exit_code())
        }
    }
}

#[cfg(not(windows))]
fn run(_config: &ReproConfig, console: &mut Console<std::io::Stdout, std::io::Stderr>) -> ExitCode {
    console.error("Direct3D 11 is only available on Windows");
    ExitCode::FAILURE
}
