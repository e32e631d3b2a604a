//! Application error type.
//!
//! Every fallible path in the crate reports an `AppError`: a user-facing
//! message plus the process exit code `main` should return. Two codes cover
//! everything this tool can hit:
//!
//! - `2`: usage/input errors (bad flags, level over the supported cap,
//!   unreadable density files)
//! - `4`: runtime errors (terminal failures, unwritable exports)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    /// Usage or input error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: 2,
            message: message.into(),
        }
    }

    /// Runtime error: terminal, filesystem, or other environment failure
    /// (exit code 4).
    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            exit_code: 4,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
