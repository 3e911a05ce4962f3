//! Upstream services used by the picker.
//!
//! [`anilist`] supplies user lists through [`meguri_core::source::ListSource`];
//! [`animethemes`] looks up the opening theme of a picked title.

pub mod anilist;
pub mod animethemes;

#[cfg(test)]
mod test_server;

pub use anilist::{AniListClient, AniListError};
pub use animethemes::{AnimeThemesClient, AnimeThemesError, OpeningTheme};
