//! Narrowing the common pool before picking wheel candidates.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryId, MediaSeason, MediaStatus};

/// Distinct attribute values present in a pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub genres: BTreeSet<String>,
    pub seasons: BTreeSet<MediaSeason>,
    pub years: BTreeSet<u32>,
    pub episode_counts: BTreeSet<u32>,
    pub statuses: BTreeSet<MediaStatus>,
    pub scores: BTreeSet<u32>,
}

impl FilterOptions {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut options = Self::default();
        for entry in entries {
            options.genres.extend(entry.genres.iter().cloned());
            options.seasons.insert(entry.season);
            options.years.insert(entry.season_year);
            options.episode_counts.insert(entry.episode_count);
            options.statuses.insert(entry.status);
            options.scores.insert(entry.average_score);
        }
        options
    }

    fn episode_range(&self) -> RangeInclusive<u32> {
        span(&self.episode_counts)
    }

    fn score_range(&self) -> RangeInclusive<u32> {
        span(&self.scores)
    }
}

fn span(values: &BTreeSet<u32>) -> RangeInclusive<u32> {
    match (values.first(), values.last()) {
        (Some(&lo), Some(&hi)) => lo..=hi,
        _ => 0..=u32::MAX,
    }
}

/// Filter criteria. Empty sets place no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFilter {
    pub text: String,
    pub genres: BTreeSet<String>,
    pub seasons: BTreeSet<MediaSeason>,
    pub years: BTreeSet<u32>,
    pub statuses: BTreeSet<MediaStatus>,
    pub episode_range: RangeInclusive<u32>,
    pub score_range: RangeInclusive<u32>,
    pub selected_only: bool,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            text: String::new(),
            genres: BTreeSet::new(),
            seasons: BTreeSet::new(),
            years: BTreeSet::new(),
            statuses: BTreeSet::new(),
            episode_range: 0..=u32::MAX,
            score_range: 0..=u32::MAX,
            selected_only: false,
        }
    }
}

impl EntryFilter {
    /// Starting filter for a pool: ranges span the observed values, and
    /// unreleased titles are hidden when anything else is present.
    pub fn for_entries(entries: &[Entry]) -> Self {
        let options = FilterOptions::from_entries(entries);
        let released: BTreeSet<MediaStatus> = options
            .statuses
            .iter()
            .copied()
            .filter(|s| *s != MediaStatus::NotYetReleased)
            .collect();

        let statuses = if options.statuses.contains(&MediaStatus::NotYetReleased)
            && !released.is_empty()
        {
            released
        } else {
            BTreeSet::new()
        };

        Self {
            episode_range: options.episode_range(),
            score_range: options.score_range(),
            statuses,
            ..Self::default()
        }
    }

    pub fn matches(&self, entry: &Entry, selected: &[EntryId]) -> bool {
        let needle = self.text.to_lowercase();

        (!self.selected_only || selected.contains(&entry.id))
            && entry.title.to_lowercase().contains(&needle)
            && self.genres.iter().all(|g| entry.genres.contains(g))
            && (self.seasons.is_empty() || self.seasons.contains(&entry.season))
            && self.episode_range.contains(&entry.episode_count)
            && self.score_range.contains(&entry.average_score)
            && (self.statuses.is_empty() || self.statuses.contains(&entry.status))
            && (self.years.is_empty() || self.years.contains(&entry.season_year))
    }

    pub fn apply<'a>(&self, entries: &'a [Entry], selected: &[EntryId]) -> Vec<&'a Entry> {
        entries
            .iter()
            .filter(|e| self.matches(e, selected))
            .collect()
    }

    /// Number of selected ids the filter currently hides.
    pub fn selected_outside(&self, entries: &[Entry], selected: &[EntryId]) -> usize {
        let visible: BTreeSet<EntryId> = self
            .apply(entries, selected)
            .into_iter()
            .map(|e| e.id)
            .collect();
        selected.iter().filter(|id| !visible.contains(id)).count()
    }
}
