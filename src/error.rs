use std::fmt;

/// Custom error types for track log handling
#[derive(Debug)]
pub enum NmeaError {
    /// I/O errors
    Io(std::io::Error),
    /// Log line that does not split into the timestamp;sentence shape
    InvalidLine(String),
    /// Sentence whose talker+sentence code is not supported
    UnknownSentence(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaError::Io(err) => write!(f, "I/O error: {}", err),
            NmeaError::InvalidLine(line) => write!(f, "Invalid log line: {}", line),
            NmeaError::UnknownSentence(code) => write!(f, "Unsupported sentence: {}", code),
            NmeaError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for NmeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NmeaError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NmeaError {
    fn from(err: std::io::Error) -> Self {
        NmeaError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, NmeaError>;
