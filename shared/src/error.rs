use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a request to the backend did not complete.
///
/// These are logged and swallowed: the busy flag is released and the list
/// simply does not change. A non-success status is not one of them; the
/// body decides.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("could not encode request: {message}")]
    Encode { message: String },

    #[error("invalid backend configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SyncError {
    pub fn transport(e: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: e.to_string(),
        }
    }

    pub fn malformed(e: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            message: e.to_string(),
        }
    }
}

/// Input that keeps a request from being sent at all.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("no todo selected for editing")]
    NoEditTarget,

    #[error("unknown todo: {0}")]
    UnknownTodo(String),
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigError {
    #[error("could not parse configuration: {0}")]
    Parse(String),

    #[error("invalid host '{0}'")]
    InvalidHost(String),

    #[error("invalid port {0}")]
    InvalidPort(u16),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
