//! Per-user target-language overrides
//!
//! A process-wide map of user id → preferred target language, mutated only
//! by the /setlang command. Lives for the lifetime of the process: no
//! persistence, no expiry. A missing entry means "no override" and selects
//! the default translation rule; it is never an error state.

use dashmap::DashMap;

/// In-memory preference store.
///
/// The narrow get/set interface keeps the pipeline independent of the
/// backing structure, so a persistent store can replace this one without
/// touching pipeline logic.
#[derive(Default)]
pub struct PrefStore {
    prefs: DashMap<u64, String>,
}

impl PrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored preference for a user, if any.
    pub fn get(&self, user_id: u64) -> Option<String> {
        self.prefs.get(&user_id).map(|entry| entry.value().clone())
    }

    /// Stores a preference. Last write wins.
    pub fn set(&self, user_id: u64, code: String) {
        self.prefs.insert(user_id, code);
    }
}
