//! Error types for fnvrs.
//!
//! The hash engine itself never fails; these errors come from the layers
//! around it (readers, configuration, command-line parsing).

use std::fmt;

/// Errors that can occur while hashing streams or parsing an invocation.
#[derive(Debug)]
pub enum FnvError {
    /// An I/O error occurred while reading input or writing output.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// Malformed command-line invocation.
    #[cfg(feature = "cli")]
    Usage(lexopt::Error),
}

impl FnvError {
    /// Returns true if this error was caused by a malformed invocation.
    pub fn is_usage(&self) -> bool {
        match self {
            #[cfg(feature = "cli")]
            FnvError::Usage(_) => true,
            FnvError::InvalidConfig { .. } => true,
            FnvError::Io(_) => false,
        }
    }
}

impl fmt::Display for FnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnvError::Io(e) => write!(f, "io error: {}", e),
            FnvError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            #[cfg(feature = "cli")]
            FnvError::Usage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FnvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FnvError::Io(e) => Some(e),
            #[cfg(feature = "cli")]
            FnvError::Usage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FnvError {
    fn from(e: std::io::Error) -> Self {
        FnvError::Io(e)
    }
}

#[cfg(feature = "cli")]
impl From<lexopt::Error> for FnvError {
    fn from(e: lexopt::Error) -> Self {
        FnvError::Usage(e)
    }
}
