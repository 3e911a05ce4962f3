use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::status::{MediaSeason, MediaStatus};

/// Upstream (AniList) media id. The only identity key of an [`Entry`].
pub type EntryId = u64;

/// One user's list, keyed by entry id.
pub type EntryMap = BTreeMap<EntryId, Entry>;

/// An anime title as shown on the wheel and in the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub cover_image_url: String,
    pub average_score: u32,
    pub episode_count: u32,
    pub genres: Vec<String>,
    pub status: MediaStatus,
    pub season: MediaSeason,
    pub season_year: u32,
}

impl Entry {
    /// An entry with only an id and a title; every other attribute is
    /// set to its sentinel.
    pub fn new(id: EntryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover_image_url: String::new(),
            average_score: 0,
            episode_count: 0,
            genres: Vec::new(),
            status: MediaStatus::default(),
            season: MediaSeason::default(),
            season_year: 0,
        }
    }
}

/// Pick the display title from candidates in priority order.
///
/// The first candidate that is present and not blank wins; an empty string
/// is returned only when every candidate is missing.
pub fn resolve_title(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
        .map(|t| t.to_string())
        .unwrap_or_default()
}
