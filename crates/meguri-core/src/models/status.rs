use serde::{Deserialize, Serialize};

/// Watch status a user list is filtered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaListStatus {
    #[default]
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

impl MediaListStatus {
    pub const ALL: &[MediaListStatus] = &[
        Self::Current,
        Self::Planning,
        Self::Completed,
        Self::Dropped,
        Self::Paused,
        Self::Repeating,
    ];

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "Currently Watching",
            Self::Planning => "Plan to Watch",
            Self::Completed => "Completed",
            Self::Dropped => "Dropped",
            Self::Paused => "Paused",
            Self::Repeating => "Repeating",
        }
    }

    /// Parse a label produced by [`as_str`](Self::as_str). Unknown labels
    /// map to `Current`.
    pub fn from_label(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .unwrap_or_default()
    }

    /// AniList GraphQL `MediaListStatus` enum value.
    pub fn to_anilist_str(self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Planning => "PLANNING",
            Self::Completed => "COMPLETED",
            Self::Dropped => "DROPPED",
            Self::Paused => "PAUSED",
            Self::Repeating => "REPEATING",
        }
    }

    pub fn from_anilist_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.to_anilist_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for MediaListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Airing status of a title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    #[default]
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl MediaStatus {
    pub fn from_anilist_str(s: &str) -> Option<Self> {
        match s {
            "FINISHED" => Some(Self::Finished),
            "RELEASING" => Some(Self::Releasing),
            "NOT_YET_RELEASED" => Some(Self::NotYetReleased),
            "CANCELLED" => Some(Self::Cancelled),
            "HIATUS" => Some(Self::Hiatus),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finished => write!(f, "Finished"),
            Self::Releasing => write!(f, "Releasing"),
            Self::NotYetReleased => write!(f, "Not Yet Released"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Hiatus => write!(f, "Hiatus"),
        }
    }
}

/// Anime season (quarter of the year).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSeason {
    Winter,
    Spring,
    Summer,
    #[default]
    Fall,
}

impl MediaSeason {
    pub fn from_anilist_str(s: &str) -> Option<Self> {
        match s {
            "WINTER" => Some(Self::Winter),
            "SPRING" => Some(Self::Spring),
            "SUMMER" => Some(Self::Summer),
            "FALL" => Some(Self::Fall),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winter => write!(f, "Winter"),
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for status in MediaListStatus::ALL {
            assert_eq!(MediaListStatus::from_label(status.as_str()), *status);
        }
    }

    #[test]
    fn test_unknown_label_defaults_to_current() {
        assert_eq!(MediaListStatus::from_label("Rewatching"), MediaListStatus::Current);
        assert_eq!(MediaListStatus::from_label(""), MediaListStatus::Current);
    }

    #[test]
    fn test_anilist_status_parse() {
        assert_eq!(
            MediaListStatus::from_anilist_str("planning"),
            Some(MediaListStatus::Planning)
        );
        assert_eq!(MediaListStatus::from_anilist_str("WATCHING"), None);
        assert_eq!(
            MediaStatus::from_anilist_str("NOT_YET_RELEASED"),
            Some(MediaStatus::NotYetReleased)
        );
        assert_eq!(MediaSeason::from_anilist_str("fall"), None);
    }
}
