pub mod client;
pub mod error;

pub use client::AniListClient;
pub use error::AniListError;
