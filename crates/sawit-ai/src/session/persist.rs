//! Best-effort persistence of the two session logs.
//!
//! Reads that fail or do not parse count as "nothing stored". Writes that
//! fail are logged and dropped; the in-memory session stays authoritative.

use sawit_common::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::Turn;

use super::types::DisplayEntry;

fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<Vec<T>> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, "failed to read stored chat log: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(e) => {
            debug!(key, "ignoring unreadable chat log: {e}");
            None
        }
    }
}

/// Write the most recent `limit` items of `items` under `key`.
fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T], limit: usize) {
    let start = items.len().saturating_sub(limit);
    let json = match serde_json::to_string(&items[start..]) {
        Ok(json) => json,
        Err(e) => {
            warn!(key, "failed to serialize chat log: {e}");
            return;
        }
    };
    if let Err(e) = store.set(key, &json) {
        warn!(key, "failed to persist chat log: {e}");
    }
}

/// Stored display log, if present and non-empty.
pub(crate) fn load_display(store: &dyn KeyValueStore, key: &str) -> Option<Vec<DisplayEntry>> {
    load(store, key).filter(|entries: &Vec<DisplayEntry>| !entries.is_empty())
}

/// Stored conversation history, if it holds at least the seed pair.
pub(crate) fn load_history(store: &dyn KeyValueStore, key: &str) -> Option<Vec<Turn>> {
    load(store, key).filter(|turns: &Vec<Turn>| turns.len() >= 2)
}

pub(crate) fn save_display(
    store: &dyn KeyValueStore,
    key: &str,
    entries: &[DisplayEntry],
    limit: usize,
) {
    save(store, key, entries, limit);
}

pub(crate) fn save_history(store: &dyn KeyValueStore, key: &str, turns: &[Turn], limit: usize) {
    save(store, key, turns, limit);
}

pub(crate) fn clear(store: &dyn KeyValueStore, keys: [&str; 2]) {
    for key in keys {
        if let Err(e) = store.remove(key) {
            warn!(key, "failed to clear chat log: {e}");
        }
    }
}
