//! Per-user fetch outcome → entry map.

use tracing::{debug, error, warn};

use crate::error::FetchError;
use crate::models::{resolve_title, Entry, EntryMap, MediaSeason, MediaStatus};
use crate::payload::{RawListPayload, RawMedia};
use crate::source::TransportError;

/// Normalize one user's fetch outcome into an entry map.
///
/// A 404, either from the transport or embedded in the GraphQL errors,
/// becomes [`FetchError::UserNotFound`]. Everything else that is not a clean
/// payload becomes [`FetchError::Transient`].
pub fn normalize(
    username: &str,
    raw: Result<RawListPayload, TransportError>,
) -> Result<EntryMap, FetchError> {
    let payload = match raw {
        Ok(payload) => payload,
        Err(TransportError::NotFound) => return Err(not_found(username)),
        Err(TransportError::Malformed(detail)) => {
            error!(username, detail = %detail, "Malformed list payload");
            return Err(transient(username, format!("malformed payload: {detail}")));
        }
        Err(e) => {
            warn!(username, error = %e, "List fetch failed");
            return Err(transient(username, e.to_string()));
        }
    };

    if payload.is_not_found() {
        return Err(not_found(username));
    }
    if let Some(first) = payload.errors.first() {
        warn!(username, message = %first.message, "List query returned errors");
        return Err(transient(username, first.message.clone()));
    }

    let entries: EntryMap = payload
        .entries()
        .filter_map(|e| e.media.as_ref())
        .filter_map(convert_media)
        .map(|entry| (entry.id, entry))
        .collect();

    debug!(username, count = entries.len(), "Normalized user list");
    Ok(entries)
}

/// Convert raw media into an entry, applying the title fallback and
/// attribute sentinels. Media without an id is dropped.
pub fn convert_media(media: &RawMedia) -> Option<Entry> {
    let id = media.id?;
    let title = media.title.as_ref();
    let title = resolve_title(&[
        title.and_then(|t| t.english.as_deref()),
        title.and_then(|t| t.romaji.as_deref()),
    ]);

    Some(Entry {
        id,
        title,
        cover_image_url: media
            .cover_image
            .as_ref()
            .and_then(|c| c.extra_large.clone())
            .unwrap_or_default(),
        average_score: media.average_score.unwrap_or(0),
        episode_count: media.episodes.unwrap_or(0),
        genres: media
            .genres
            .iter()
            .flatten()
            .flatten()
            .cloned()
            .collect(),
        status: media
            .status
            .as_deref()
            .and_then(MediaStatus::from_anilist_str)
            .unwrap_or_default(),
        season: media
            .season
            .as_deref()
            .and_then(MediaSeason::from_anilist_str)
            .unwrap_or_default(),
        season_year: media.season_year.unwrap_or(0),
    })
}

fn not_found(username: &str) -> FetchError {
    debug!(username, "User not found upstream");
    FetchError::UserNotFound {
        username: username.to_string(),
    }
}

fn transient(username: &str, detail: String) -> FetchError {
    FetchError::Transient {
        username: username.to_string(),
        detail,
    }
}
