use meguri_core::models::EntryId;
use reqwest::Client;
use url::Url;

use super::error::AnimeThemesError;
use super::types::{AnimeThemesResponse, OpeningTheme};

const API_URL: &str = "https://api.animethemes.moe";

const THEME_INCLUDES: &str = "animethemes.animethemeentries.videos.audio,animethemes.song";

/// AnimeThemes REST client, keyed by AniList media ids.
pub struct AnimeThemesClient {
    base_url: String,
    http: Client,
}

impl Default for AnimeThemesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimeThemesClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    fn anime_url(&self, anilist_id: EntryId) -> Result<Url, AnimeThemesError> {
        let base = format!("{}/anime", self.base_url.trim_end_matches('/'));
        let id = anilist_id.to_string();
        Ok(Url::parse_with_params(
            &base,
            &[
                ("filter[has]", "resources"),
                ("filter[site]", "AniList"),
                ("filter[external_id]", id.as_str()),
                ("include", THEME_INCLUDES),
            ],
        )?)
    }

    /// Opening theme of the AniList title `anilist_id`, if AnimeThemes knows
    /// one with playable audio.
    pub async fn opening_for(
        &self,
        anilist_id: EntryId,
    ) -> Result<Option<OpeningTheme>, AnimeThemesError> {
        let url = self.anime_url(anilist_id)?;
        tracing::debug!(anilist_id, "AnimeThemes lookup");

        let resp = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(anilist_id, status = status_code, "AnimeThemes API error");
            return Err(AnimeThemesError::Api {
                status: status_code,
                message: body,
            });
        }

        let parsed: AnimeThemesResponse = resp
            .json()
            .await
            .map_err(|e| AnimeThemesError::Parse(e.to_string()))?;

        let opening = parsed.first_opening();
        if opening.is_none() {
            tracing::debug!(anilist_id, "no opening theme found");
        }
        Ok(opening)
    }
}
