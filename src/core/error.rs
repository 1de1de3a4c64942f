use std::fmt;

/// Everything that can abort a simulation run.
#[derive(Debug)]
pub enum SimError {
    /// Non-numeric or out-of-domain launch input.
    InvalidParameter(String),
    /// Reading input or writing an output file failed.
    Io(std::io::Error),
    /// The result record could not be encoded or decoded.
    Json(serde_json::Error),
    /// The chart backend refused to draw.
    Chart(String),
}

impl SimError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SimError::InvalidParameter(message.into())
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter(msg) => write!(f, "invalid input: {msg}"),
            SimError::Io(e) => write!(f, "IO error: {e}"),
            SimError::Json(e) => write!(f, "JSON error: {e}"),
            SimError::Chart(msg) => write!(f, "chart error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            SimError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}
