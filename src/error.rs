use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Spotify accounts service or Web API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("Playlist has no id; it was probably never created")]
    InvalidPlaylist,
}

impl ApiError {
    /// Status code of the failed response, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Failures reading a track list.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON track list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No tracks found in {}", .0.display())]
    Empty(PathBuf),
}

/// Failures writing result files.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
