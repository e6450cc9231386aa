use std::fmt;
use std::process::ExitCode;

use crate::driver::DriverError;

/// Every way a run can fail, each with its own exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetlightError {
    /// Wrong number of arguments
    Usage,
    /// Color argument is not a non-zero hexadecimal number
    Format,
    /// Color argument does not fit in 32 bits
    Range,
    Acquire(DriverError),
    Render(DriverError),
}

impl SetlightError {
    /// Process exit status. Driver statuses are truncated to 8 bits like a
    /// C `return` from `main`.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetlightError::Usage => 1,
            SetlightError::Format => 2,
            SetlightError::Range => 3,
            SetlightError::Acquire(e) | SetlightError::Render(e) => e.status as u8,
        }
    }
}

impl From<SetlightError> for ExitCode {
    fn from(err: SetlightError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

impl fmt::Display for SetlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetlightError::Usage => write!(f, "expected exactly one color argument"),
            SetlightError::Format => write!(f, "color is not a non-zero hexadecimal number"),
            SetlightError::Range => write!(f, "color does not fit in 32 bits"),
            SetlightError::Acquire(e) => write!(f, "failed to initialize LED driver: {}", e),
            SetlightError::Render(e) => write!(f, "failed to render LED strip: {}", e),
        }
    }
}

impl std::error::Error for SetlightError {}
