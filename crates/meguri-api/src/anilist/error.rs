use meguri_core::source::TransportError;
use thiserror::Error;

/// Errors from the AniList API client.
#[derive(Debug, Error)]
pub enum AniListError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("not found")]
    NotFound,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<AniListError> for TransportError {
    fn from(e: AniListError) -> Self {
        match e {
            AniListError::NotFound => TransportError::NotFound,
            AniListError::Api { status, message } => TransportError::Status { status, message },
            AniListError::Parse(detail) => TransportError::Malformed(detail),
            AniListError::Http(e) if e.is_decode() => TransportError::Malformed(e.to_string()),
            AniListError::Http(e) => TransportError::Network(e.to_string()),
        }
    }
}
