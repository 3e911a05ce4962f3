//! Narrowing the common pool down to what goes on the wheel.

use meguri_core::filter::{EntryFilter, FilterOptions};
use meguri_core::models::{Entry, MediaListStatus};
use meguri_core::selection::UserSelection;
use meguri_core::wheel::MIN_CANDIDATES;

use crate::cli::Args;

/// Titles left after the filters and picks, plus picks the filters hid.
#[derive(Debug, Default)]
pub struct Narrowed {
    pub entries: Vec<Entry>,
    pub hidden_picks: usize,
}

/// What to do with the final candidates.
#[derive(Debug, PartialEq)]
pub enum Draw {
    Nothing,
    /// A single title: no spin needed.
    Only(Entry),
    Spin(Vec<Entry>),
}

impl Draw {
    pub fn from_candidates(mut candidates: Vec<Entry>) -> Self {
        match candidates.len() {
            0 => Self::Nothing,
            n if n < MIN_CANDIDATES => Self::Only(candidates.remove(0)),
            _ => Self::Spin(candidates),
        }
    }
}

/// Build the filter the flags describe, starting from the pool's defaults.
pub fn filter_for(args: &Args, pool: &[Entry]) -> EntryFilter {
    let options = FilterOptions::from_entries(pool);
    let mut filter = EntryFilter::for_entries(pool);

    filter.text = args.search.clone().unwrap_or_default();
    // Genre names are matched exactly; map user input onto the pool's casing.
    filter.genres = args
        .genres
        .iter()
        .map(|g| {
            options
                .genres
                .iter()
                .find(|known| known.eq_ignore_ascii_case(g))
                .cloned()
                .unwrap_or_else(|| g.clone())
        })
        .collect();
    filter.seasons = args.seasons.iter().copied().collect();
    filter.years = args.years.iter().copied().collect();
    if args.unreleased {
        filter.statuses.clear();
    }
    filter
}

pub fn narrow(args: &Args, status: MediaListStatus, pool: &[Entry]) -> Narrowed {
    let filter = filter_for(args, pool);

    let mut selection = UserSelection::new(args.usernames.clone());
    selection.watch_status = status;
    for &id in &args.picks {
        if !selection.selected_ids().contains(&id) {
            selection.toggle(id);
        }
    }
    let selected = selection.selected_ids();

    let visible: Vec<Entry> = filter.apply(pool, selected).into_iter().cloned().collect();
    if selected.is_empty() {
        return Narrowed {
            entries: visible,
            hidden_picks: 0,
        };
    }

    tracing::debug!(group = %selection.key(), picks = selected.len(), "Spinning over picked titles");
    Narrowed {
        entries: selection.candidates(&visible),
        hidden_picks: filter.selected_outside(pool, selected),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use meguri_core::models::{MediaSeason, MediaStatus};

    use super::*;

    fn entry(id: u64, title: &str, genres: &[&str], status: MediaStatus) -> Entry {
        Entry {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            status,
            season: MediaSeason::Spring,
            season_year: 2024,
            ..Entry::new(id, title)
        }
    }

    fn pool() -> Vec<Entry> {
        vec![
            entry(1, "Dungeon Meshi", &["Adventure", "Comedy"], MediaStatus::Finished),
            entry(2, "Kaijuu 8-gou", &["Action"], MediaStatus::Finished),
            entry(3, "Dandadan", &["Action", "Comedy"], MediaStatus::Releasing),
            entry(4, "Chainsaw Man Movie", &["Action"], MediaStatus::NotYetReleased),
        ]
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["meguri", "alice", "bob"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn ids(narrowed: &Narrowed) -> Vec<u64> {
        narrowed.entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_no_flags_hides_unreleased() {
        let narrowed = narrow(&args(&[]), MediaListStatus::Current, &pool());
        assert_eq!(ids(&narrowed), vec![1, 2, 3]);
    }

    #[test]
    fn test_unreleased_flag_keeps_everything() {
        let narrowed = narrow(&args(&["--unreleased"]), MediaListStatus::Current, &pool());
        assert_eq!(ids(&narrowed), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_genres_ignore_case() {
        let narrowed = narrow(
            &args(&["--genre", "action", "--genre", "COMEDY"]),
            MediaListStatus::Current,
            &pool(),
        );
        assert_eq!(ids(&narrowed), vec![3]);
    }

    #[test]
    fn test_search_and_season() {
        let narrowed = narrow(
            &args(&["--search", "dan", "--season", "spring", "--year", "2024"]),
            MediaListStatus::Current,
            &pool(),
        );
        assert_eq!(ids(&narrowed), vec![3]);

        let none = narrow(&args(&["--season", "winter"]), MediaListStatus::Current, &pool());
        assert!(none.entries.is_empty());
    }

    #[test]
    fn test_picks_limit_the_wheel() {
        let narrowed = narrow(
            &args(&["--pick", "3", "--pick", "1", "--pick", "3"]),
            MediaListStatus::Planning,
            &pool(),
        );
        assert_eq!(ids(&narrowed), vec![1, 3]);
        assert_eq!(narrowed.hidden_picks, 0);
    }

    #[test]
    fn test_filtered_out_picks_are_counted() {
        let narrowed = narrow(
            &args(&["--pick", "1", "--pick", "2", "--genre", "Comedy"]),
            MediaListStatus::Current,
            &pool(),
        );
        assert_eq!(ids(&narrowed), vec![1]);
        assert_eq!(narrowed.hidden_picks, 1);
    }

    #[test]
    fn test_draw_needs_two_to_spin() {
        assert_eq!(Draw::from_candidates(Vec::new()), Draw::Nothing);

        let single = Entry::new(7, "Frieren");
        assert_eq!(
            Draw::from_candidates(vec![single.clone()]),
            Draw::Only(single)
        );

        let pair = vec![Entry::new(1, "A"), Entry::new(2, "B")];
        assert_eq!(Draw::from_candidates(pair.clone()), Draw::Spin(pair));
    }
}
