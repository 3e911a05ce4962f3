use std::path::PathBuf;

use clap::Parser;
use meguri_core::config::AppConfig;
use meguri_core::models::{EntryId, MediaListStatus, MediaSeason};

/// Spin a wheel over the anime every given AniList user has on their list.
#[derive(Debug, Parser)]
#[command(name = "meguri", version)]
pub struct Args {
    /// AniList usernames to intersect.
    #[arg(required = true)]
    pub usernames: Vec<String>,

    /// Watch status to pick from (CURRENT, PLANNING, COMPLETED, DROPPED, PAUSED, REPEATING).
    #[arg(long, default_value = "CURRENT", value_parser = parse_status)]
    pub status: MediaListStatus,

    /// Print the common pool and exit without spinning.
    #[arg(long)]
    pub list: bool,

    /// Keep titles whose name contains this text.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep titles tagged with this genre. Repeat to require several.
    #[arg(long = "genre")]
    pub genres: Vec<String>,

    /// Keep titles from this season (WINTER, SPRING, SUMMER, FALL). Repeatable.
    #[arg(long = "season", value_parser = parse_season)]
    pub seasons: Vec<MediaSeason>,

    /// Keep titles from this year. Repeatable.
    #[arg(long = "year")]
    pub years: Vec<u32>,

    /// Also keep titles that have not aired yet.
    #[arg(long)]
    pub unreleased: bool,

    /// Put only this AniList id on the wheel. Repeat to pick several.
    #[arg(long = "pick")]
    pub picks: Vec<EntryId>,

    /// Maximum number of titles placed on the wheel.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Do not print a tick on every pin crossing.
    #[arg(long)]
    pub no_clicks: bool,

    /// Announce the winner with a fanfare.
    #[arg(long)]
    pub fanfare: bool,

    /// Look up the winner's opening theme on AnimeThemes.
    #[arg(long)]
    pub opening: bool,

    /// Config file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_status(s: &str) -> Result<MediaListStatus, String> {
    MediaListStatus::from_anilist_str(s).ok_or_else(|| format!("unknown watch status: {s}"))
}

fn parse_season(s: &str) -> Result<MediaSeason, String> {
    MediaSeason::from_anilist_str(&s.to_ascii_uppercase())
        .ok_or_else(|| format!("unknown season: {s}"))
}

impl Args {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(limit) = self.limit {
            config.wheel.candidate_limit = limit;
        }
        if self.no_clicks {
            config.audio.play_clicks = false;
        }
        if self.fanfare {
            config.audio.play_fanfare = true;
        }
    }
}
