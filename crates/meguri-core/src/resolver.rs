//! Common-pool resolution across a group of users.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{Entry, EntryId, EntryMap, MediaListStatus};
use crate::normalize::normalize;
use crate::source::ListSource;

/// Fetch every user's list and return the entries present in all of them.
///
/// Blank usernames are skipped without a fetch. Fetches run one at a time in
/// input order and the first failure aborts the whole resolution. Entries come
/// back in ascending id order.
pub async fn resolve_common<S, U>(
    usernames: &[U],
    status: MediaListStatus,
    source: &S,
) -> Result<Vec<Entry>, FetchError>
where
    S: ListSource,
    U: AsRef<str>,
{
    let mut id_sets: Vec<BTreeSet<EntryId>> = Vec::new();
    let mut details = EntryMap::new();

    for username in usernames.iter().map(|u| u.as_ref().trim()) {
        if username.is_empty() {
            continue;
        }

        debug!(username, status = %status, "Fetching user list");
        let raw = source.fetch_list(username, status).await;
        let entries = normalize(username, raw)?;

        id_sets.push(entries.keys().copied().collect());
        merge_details(&mut details, entries);
    }

    let common = intersect(id_sets).unwrap_or_default();
    let pool: Vec<Entry> = common
        .into_iter()
        .filter_map(|id| details.remove(&id))
        .collect();

    info!(users = usernames.len(), common = pool.len(), status = %status, "Resolved common pool");
    Ok(pool)
}

/// Intersect id sets in order, starting from the first one.
///
/// Returns `None` when there are no sets at all.
pub fn intersect<I>(sets: I) -> Option<BTreeSet<EntryId>>
where
    I: IntoIterator<Item = BTreeSet<EntryId>>,
{
    sets.into_iter().reduce(|acc, set| acc.intersection(&set).copied().collect())
}

/// Later users overwrite earlier details for the same id.
fn merge_details(details: &mut EntryMap, entries: EntryMap) {
    for (id, entry) in entries {
        if let Some(previous) = details.get(&id) {
            if *previous != entry {
                debug!(id, title = %entry.title, "Entry details differ between users, keeping latest");
            }
        }
        details.insert(id, entry);
    }
}
