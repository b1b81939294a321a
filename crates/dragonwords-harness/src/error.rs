use thiserror::Error;

use dragonwords::{CodeParseError, MemoryHostError};

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid code: {0}")]
    InvalidCode(#[from] CodeParseError),

    #[error("editor host error: {0}")]
    Host(String),

    #[error("word panel was not rendered: {reason}")]
    PanelNotRendered { reason: String },

    #[error("no word for code {code}")]
    UnknownCode { code: String },
}

impl From<MemoryHostError> for HarnessError {
    fn from(err: MemoryHostError) -> Self {
        Self::Host(err.to_string())
    }
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidCode(_) => 2,
            Self::UnknownCode { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn not_rendered(reason: impl Into<String>) -> Self {
        Self::PanelNotRendered {
            reason: reason.into(),
        }
    }
}
