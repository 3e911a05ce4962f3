use serde::Deserialize;

/// Root of an AnimeThemes `/anime` listing.
#[derive(Debug, Default, Deserialize)]
pub struct AnimeThemesResponse {
    #[serde(default)]
    pub anime: Vec<ThemedAnime>,
}

#[derive(Debug, Deserialize)]
pub struct ThemedAnime {
    #[serde(default)]
    pub animethemes: Vec<AnimeTheme>,
}

#[derive(Debug, Deserialize)]
pub struct AnimeTheme {
    /// `OP` or `ED`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub song: Option<Song>,
    #[serde(default)]
    pub animethemeentries: Vec<ThemeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Song {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeEntry {
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub audio: Option<Audio>,
}

#[derive(Debug, Deserialize)]
pub struct Audio {
    pub link: String,
}

/// An opening song with a playable audio link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningTheme {
    pub name: String,
    pub audio_url: String,
}

impl AnimeTheme {
    pub fn is_opening(&self) -> bool {
        self.kind.eq_ignore_ascii_case("OP")
    }

    fn audio_link(&self) -> Option<&str> {
        self.animethemeentries
            .first()?
            .videos
            .first()?
            .audio
            .as_ref()
            .map(|a| a.link.as_str())
    }
}

impl AnimeThemesResponse {
    /// First opening of the first matched anime that carries an audio link.
    pub fn first_opening(&self) -> Option<OpeningTheme> {
        let anime = self.anime.first()?;
        anime
            .animethemes
            .iter()
            .filter(|t| t.is_opening())
            .find_map(|theme| {
                let audio_url = theme.audio_link()?.to_string();
                let name = theme
                    .song
                    .as_ref()
                    .and_then(|s| s.title.clone())
                    .unwrap_or_default();
                Some(OpeningTheme { name, audio_url })
            })
    }
}
