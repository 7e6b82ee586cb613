//! The closed set of commands the bot understands.

/// Incoming message, classified. Anything that is not a known command
/// is treated as a candidate cadastre number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Lookup(String),
}

impl Command {
    /// Classify a raw message. Surrounding whitespace is stripped here
    /// so the validator downstream sees the bare candidate.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "/start" => Command::Start,
            "/stop" => Command::Stop,
            other => Command::Lookup(other.to_string()),
        }
    }
}
