mod entry;
mod status;

pub use entry::{resolve_title, Entry, EntryId, EntryMap};
pub use status::{MediaListStatus, MediaSeason, MediaStatus};
