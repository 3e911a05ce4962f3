//! Raw list payload as returned by the AniList `MediaListCollection` query.
//!
//! Every field is optional: the normalizer, not the decoder, decides what a
//! missing value means.

use serde::Deserialize;

// ── GraphQL response wrapper ─────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListPayload {
    pub data: Option<ListData>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub status: Option<u16>,
}

// ── User list ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ListData {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: Option<MediaListCollection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaListCollection {
    #[serde(rename = "hasNextChunk")]
    pub has_next_chunk: Option<bool>,
    #[serde(default)]
    pub lists: Vec<Option<MediaListGroup>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaListGroup {
    #[serde(default)]
    pub entries: Vec<Option<MediaListEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaListEntry {
    #[serde(rename = "mediaId")]
    pub media_id: Option<u64>,
    pub media: Option<RawMedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMedia {
    pub id: Option<u64>,
    pub title: Option<RawTitle>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<RawCoverImage>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    pub episodes: Option<u32>,
    pub genres: Option<Vec<Option<String>>>,
    pub status: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "seasonYear")]
    pub season_year: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoverImage {
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
    pub medium: Option<String>,
}

impl RawListPayload {
    /// All list entries across every group of the collection.
    pub fn entries(&self) -> impl Iterator<Item = &MediaListEntry> {
        self.data
            .iter()
            .filter_map(|d| d.media_list_collection.as_ref())
            .flat_map(|c| c.lists.iter().flatten())
            .flat_map(|group| group.entries.iter().flatten())
    }

    /// Whether an embedded GraphQL error carries a 404 status.
    pub fn is_not_found(&self) -> bool {
        self.errors.iter().any(|e| e.status == Some(404))
    }
}
