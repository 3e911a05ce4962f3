mod cli;
mod driver;
mod pick;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use meguri_api::{AniListClient, AnimeThemesClient, AnimeThemesError};
use meguri_core::config::AppConfig;
use meguri_core::error::{FetchError, MeguriError};
use meguri_core::models::Entry;
use meguri_core::pool::PoolState;
use meguri_core::wheel::{cap_candidates, AudioCues, SelectionNotifier, SpinRejected, Wheel};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::pick::Draw;
use crate::terminal::{display_title, format_entry, TerminalCues};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Meguri(#[from] MeguriError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Spin(#[from] SpinRejected),

    #[error("opening lookup failed: {0}")]
    Themes(#[from] AnimeThemesError),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meguri=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Fetch(e)) if e.is_retryable() => {
            eprintln!("meguri: {e}");
            eprintln!("AniList may be unavailable or rate limiting; try again shortly.");
            ExitCode::FAILURE
        }
        Err(CliError::Fetch(e)) => {
            eprintln!("meguri: {e}");
            eprintln!("Check the spelling of \"{}\".", e.username());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("meguri: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    args.apply_overrides(&mut config);

    let anilist = AniListClient::with_endpoint(config.api.anilist_url.clone());
    let mut pool = PoolState::new();
    pool.refresh(&args.usernames, args.status, &anilist).await;
    if let Some(e) = pool.error() {
        return Err(e.clone().into());
    }

    let entries = pool.entries();
    println!(
        "{} title(s) in common under \"{}\":",
        entries.len(),
        pool.status()
    );
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", format_entry(i + 1, entry));
    }

    if args.list || entries.is_empty() {
        return Ok(());
    }

    let narrowed = pick::narrow(&args, pool.status(), entries);
    if narrowed.hidden_picks > 0 {
        println!(
            "{} picked title(s) are hidden by the filters.",
            narrowed.hidden_picks
        );
    }
    if narrowed.entries.len() < entries.len() {
        println!("{} title(s) match the filters.", narrowed.entries.len());
    }

    let candidates = cap_candidates(
        &narrowed.entries,
        config.wheel.candidate_limit,
        &mut rand::rng(),
    );
    if candidates.len() < narrowed.entries.len() {
        println!(
            "Spinning over {} of them, picked at random.",
            candidates.len()
        );
    }

    let winner = match Draw::from_candidates(candidates) {
        Draw::Nothing => {
            println!("Nothing left to put on the wheel.");
            return Ok(());
        }
        Draw::Only(entry) => {
            println!("Only one title left, no spin needed: {}", display_title(&entry));
            entry
        }
        Draw::Spin(candidates) => match spin(&config, candidates).await? {
            Some(entry) => entry,
            None => return Ok(()),
        },
    };

    if args.opening {
        announce_opening(&config, &winner).await?;
    }
    Ok(())
}

async fn spin(config: &AppConfig, candidates: Vec<Entry>) -> Result<Option<Entry>, CliError> {
    let mut wheel = Wheel::from_config(&config.wheel);
    let mut observer = (
        AudioCues::new(
            TerminalCues::new(std::io::stdout()),
            config.audio.play_clicks,
            config.audio.play_fanfare,
        ),
        SelectionNotifier(|winner: Option<&Entry>| {
            if let Some(entry) = winner {
                println!("\nThe wheel picked: {}", display_title(entry));
            }
        }),
    );

    Ok(driver::spin_to_rest(&mut wheel, candidates, &mut observer).await?)
}

async fn announce_opening(config: &AppConfig, entry: &Entry) -> Result<(), CliError> {
    let themes = AnimeThemesClient::with_base_url(config.api.animethemes_url.clone());
    match themes.opening_for(entry.id).await? {
        Some(opening) if opening.name.is_empty() => println!("Opening: {}", opening.audio_url),
        Some(opening) => println!("Opening: {} ({})", opening.name, opening.audio_url),
        None => println!("No opening theme found for {}.", display_title(entry)),
    }
    Ok(())
}
