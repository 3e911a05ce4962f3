use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryId, MediaListStatus};

/// Stable key for a group of usernames: order, case, surrounding whitespace
/// and blank names do not matter.
pub fn group_key<U: AsRef<str>>(usernames: &[U]) -> String {
    let mut names: Vec<String> = usernames
        .iter()
        .map(|u| u.as_ref().trim().to_lowercase())
        .filter(|u| !u.is_empty())
        .collect();
    names.sort();
    names.join(",")
}

/// Which entries a group picked for the wheel, per watch status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSelection {
    pub usernames: Vec<String>,
    pub watch_status: MediaListStatus,
    pub selections: HashMap<MediaListStatus, Vec<EntryId>>,
}

impl UserSelection {
    pub fn new(usernames: Vec<String>) -> Self {
        Self {
            usernames,
            ..Self::default()
        }
    }

    pub fn key(&self) -> String {
        group_key(&self.usernames)
    }

    /// Ids picked under the active watch status, in pick order.
    pub fn selected_ids(&self) -> &[EntryId] {
        self.selections
            .get(&self.watch_status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Select `id` under the active watch status, or deselect it if it was
    /// already selected.
    pub fn toggle(&mut self, id: EntryId) {
        let ids = self.selections.entry(self.watch_status).or_default();
        match ids.iter().position(|&i| i == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id),
        }
    }

    pub fn clear(&mut self) {
        self.selections.remove(&self.watch_status);
    }

    /// Entries of `pool` that are selected, in pool order.
    pub fn candidates(&self, pool: &[Entry]) -> Vec<Entry> {
        let selected = self.selected_ids();
        pool.iter()
            .filter(|e| selected.contains(&e.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key_normalizes() {
        assert_eq!(group_key(&["Bob ", "alice", "", "  "]), "alice,bob");
        assert_eq!(group_key(&["alice", "BOB"]), group_key(&["bob", "Alice"]));
        let empty: [&str; 0] = [];
        assert_eq!(group_key(&empty), "");
    }

    #[test]
    fn test_toggle_is_per_status() {
        let mut selection = UserSelection::new(vec!["alice".into()]);
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(selection.selected_ids(), &[1, 2]);

        selection.watch_status = MediaListStatus::Planning;
        assert!(selection.selected_ids().is_empty());
        selection.toggle(9);

        selection.watch_status = MediaListStatus::Current;
        selection.toggle(1);
        assert_eq!(selection.selected_ids(), &[2]);
        assert_eq!(selection.selections[&MediaListStatus::Planning], vec![9]);
    }

    #[test]
    fn test_candidates_come_from_pool() {
        let pool = vec![Entry::new(1, "A"), Entry::new(2, "B"), Entry::new(3, "C")];
        let mut selection = UserSelection::new(vec!["alice".into(), "bob".into()]);
        selection.toggle(3);
        selection.toggle(1);
        // Not in the pool: ignored.
        selection.toggle(42);

        let ids: Vec<_> = selection.candidates(&pool).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);

        selection.clear();
        assert!(selection.candidates(&pool).is_empty());
    }
}
