//! Application error type.
//!
//! Failures fall into three classes with fixed exit codes:
//!
//! - `startup` (2): a model artifact is missing or malformed, or the loaded
//!   bundle fails cross-validation. The process cannot serve any request.
//! - `validation` (3): a single submitted record is unreadable or violates
//!   a declared numeric domain. No result is produced for that request.
//! - `internal` (4): an invariant breach inside the pipeline (e.g. a
//!   non-finite model output).
//!
//! An out-of-vocabulary categorical value is deliberately *not* an error;
//! alignment zero-fills it (see `features::align`).

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Fatal resource/bundle failure: the process must not serve requests.
    pub fn startup(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Per-request record failure: surfaced to the caller, nothing computed.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Pipeline invariant breach.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn is_validation(&self) -> bool {
        self.exit_code == 3
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
