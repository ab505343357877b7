use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum PiError {
    InvalidRange { a: u64, b: u64 },
    InvalidTermCount(u64),
    InvalidConfig(String),
    Arithmetic(String),
    Io(io::Error),
}

impl Display for PiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PiError::InvalidRange { a, b } => write!(f, "InvalidRange: [{}, {}) is empty", a, b),
            PiError::InvalidTermCount(n) => write!(f, "InvalidTermCount: {} (need at least 1 term)", n),
            PiError::InvalidConfig(msg) => write!(f, "InvalidConfig: {}", msg),
            PiError::Arithmetic(msg) => write!(f, "Arithmetic: {}", msg),
            PiError::Io(e) => write!(f, "IO: {}", e),
        }
    }
}

impl std::error::Error for PiError {}

impl From<io::Error> for PiError {
    fn from(value: io::Error) -> Self { PiError::Io(value) }
}
