//! Error type shared by every command
//!
//! Any variant ends a command with exit code 1; the `Display` text is what
//! the user sees after `Error: `.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum TfeError {
    /// Transport failure before an HTTP status was received
    Http(reqwest::Error),
    /// Non-2xx response; `message` comes from the JSON:API `errors` array
    Api { status: u16, message: String },
    TokenNotFound(String),
    HostNotFound(String),
    /// Credentials file exists but cannot be read or parsed
    Credentials(String),
    /// Response body is not valid JSON
    Json(String),
    /// Local file or directory could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A command definition is inconsistent
    Config(String),
    /// A flag value failed validation (names the offending flag)
    Validation(String),
    /// Command line could not be parsed, already formatted by clap
    Usage(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "request failed: {}", e),
            TfeError::Api { status, message } => write!(f, "{} (HTTP {})", message, status),
            TfeError::TokenNotFound(msg)
            | TfeError::HostNotFound(msg)
            | TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "unexpected response body: {}", msg),
            TfeError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            TfeError::Config(msg) => write!(f, "invalid command definition: {}", msg),
            TfeError::Validation(msg) => write!(f, "invalid argument: {}", msg),
            TfeError::Usage(msg) => write!(f, "{}", msg.trim_end()),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            TfeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<clap::Error> for TfeError {
    fn from(err: clap::Error) -> Self {
        TfeError::Usage(err.to_string())
    }
}

impl TfeError {
    /// Wrap a filesystem failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TfeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tfectl operations
pub type Result<T> = std::result::Result<T, TfeError>;
