use tracing::warn;

use crate::error::FetchError;
use crate::models::{Entry, MediaListStatus};
use crate::resolver::resolve_common;
use crate::source::ListSource;

/// The last successfully resolved common pool, plus the last failure.
///
/// A failed refresh records the error but leaves the previous entries in
/// place until a later refresh succeeds.
#[derive(Debug, Clone, Default)]
pub struct PoolState {
    entries: Vec<Entry>,
    status: MediaListStatus,
    error: Option<FetchError>,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Watch status the current entries were resolved for.
    pub fn status(&self) -> MediaListStatus {
        self.status
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Fold a resolution result into the state.
    pub fn apply(&mut self, status: MediaListStatus, result: Result<Vec<Entry>, FetchError>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.status = status;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, kept = self.entries.len(), "Pool refresh failed, keeping previous pool");
                self.error = Some(e);
            }
        }
    }

    /// Resolve the pool for `usernames` and apply the result.
    pub async fn refresh<S, U>(&mut self, usernames: &[U], status: MediaListStatus, source: &S)
    where
        S: ListSource,
        U: AsRef<str>,
    {
        let result = resolve_common(usernames, status, source).await;
        self.apply(status, result);
    }
}
