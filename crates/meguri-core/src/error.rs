use thiserror::Error;

/// Why a user's list could not be used for the common pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("user not found: {username}")]
    UserNotFound { username: String },

    #[error("could not fetch list for {username}: {detail}")]
    Transient { username: String, detail: String },
}

impl FetchError {
    /// Transient failures are worth retrying; a missing user needs a
    /// corrected username instead.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }

    pub fn username(&self) -> &str {
        match self {
            Self::UserNotFound { username } | Self::Transient { username, .. } => username,
        }
    }
}

#[derive(Debug, Error)]
pub enum MeguriError {
    #[error("config error: {0}")]
    Config(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
