//! Boundary to whatever fetches user lists.
//!
//! The AniList client implements [`ListSource`]; tests use an in-memory one.

use std::future::Future;

use thiserror::Error;

use crate::models::MediaListStatus;
use crate::payload::RawListPayload;

/// Transport-level failure reported by a [`ListSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("not found")]
    NotFound,

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Fetches one user's list for one watch status.
pub trait ListSource: Send + Sync {
    fn fetch_list(
        &self,
        username: &str,
        status: MediaListStatus,
    ) -> impl Future<Output = Result<RawListPayload, TransportError>> + Send;
}
