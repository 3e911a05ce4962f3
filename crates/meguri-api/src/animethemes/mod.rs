pub mod client;
pub mod error;
pub mod types;

pub use client::AnimeThemesClient;
pub use error::AnimeThemesError;
pub use types::OpeningTheme;
