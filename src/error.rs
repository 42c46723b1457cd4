use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The character grid could not be acquired or re-acquired. Fatal.
    #[error("display error: {0}")]
    Display(#[source] std::io::Error),

    #[error("failed to load config {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("failed to save config {path}: {reason}")]
    ConfigSave { path: PathBuf, reason: String },

    /// The external session could not be started or exited non-zero.
    #[error("session for {host} failed: {reason}")]
    Launch { host: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let display = Error::Display(std::io::Error::other("no tty"));
        assert_eq!(display.to_string(), "display error: no tty");

        let launch = Error::Launch {
            host: "web".into(),
            reason: "exit status: 255".into(),
        };
        assert_eq!(launch.to_string(), "session for web failed: exit status: 255");
    }
}
