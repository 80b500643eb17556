// src/error.rs
use thiserror::Error;

/// Anything that can go wrong talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid API URL: {0}")]
    Url(String),

    #[error("HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures that abort a run. Everything else degrades to "absent".
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to fetch clan information (check token and clan tag): {0}")]
    ClanUnavailable(#[source] ApiError),

    #[error("failed to fetch clan members: {0}")]
    MembersUnavailable(#[source] ApiError),

    #[error("failed to fetch details for any clan member")]
    NoPlayers,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("reference tables: {0}")]
    Tables(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
