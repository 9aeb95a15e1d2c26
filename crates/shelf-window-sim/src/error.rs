use shelf_window::WindowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SimError {
    /// `2` for anything the caller can fix by changing flags or config
    /// values, `1` for I/O and parse failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Window(error) if error.is_invalid_configuration() => 2,
            Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
