use {
    crate::console::Console,
    std::io::{BufRead, Write},
};

pub const WARNING: &str = "Are you sure you want to continue?\n\
On a device with an AMD graphics card, your display driver may crash and become unstable!\n\
(Y/N)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Proceed,
    Decline,
}

impl Consent {
    /// Only `Y` or `y` is consent; no reply at all is a refusal.
    pub fn from_reply(reply: Option<char>) -> Self {
        match reply {
            Some('Y') | Some('y') => Consent::Proceed,
            _ => Consent::Decline,
        }
    }
}

/// Reads the first character the user types. EOF and read errors count as no
/// reply.
pub fn read_reply(input: &mut impl BufRead) -> Option<char> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => line.chars().next(),
        Err(e) => {
            log::warn!("Failed to read confirmation: {e}");
            None
        }
    }
}

/// Warns about the driver crash and blocks until the user answers.
pub fn confirm<O: Write, E: Write>(console: &mut Console<O, E>, input: &mut impl BufRead) -> Consent {
    console.prompt(WARNING);
    let reply = read_reply(input);
    let consent = Consent::from_reply(reply);
    log::debug!("Confirmation reply {reply:?} -> {consent:?}");
    consent
}
