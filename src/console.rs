use {
    colored::Colorize,
    std::io::{self, Stderr, Stdout, Write},
};

/// User-facing console output. Status goes to `out`, failures to `err`.
///
/// Writes are best-effort: a closed stdout must not change how the run goes.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        #[cfg(windows)]
        {
            let _ = colored::control::set_virtual_terminal(true);
        }
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn status(&mut self, text: &str) {
        log::info!("{text}");
        let _ = writeln!(self.out, "[*] {text}");
    }

    /// Prints a warning without a trailing newline so input follows it.
    pub fn prompt(&mut self, text: &str) {
        let _ = write!(self.out, "{}", format!("[!] {text} ").yellow().bold());
        let _ = self.out.flush();
    }

    pub fn success(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", format!("[v] {text}").bright_green().bold());
    }

    pub fn error(&mut self, text: &str) {
        log::error!("{text}");
        let _ = writeln!(self.err, "{}", format!("[x] {text}").bright_red().bold());
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
