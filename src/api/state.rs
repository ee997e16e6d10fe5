//! Application state for the tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::roster::Roster;
use crate::rules::{EntryRecorder, LeaveRuleEngine};
use crate::store::{DocumentStore, InMemoryStore, RecordStore};

/// Shared application state.
///
/// Holds the roster, the rule engine and the record store. The document
/// store is injected so the handlers never touch process-wide globals.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    roster: Arc<Roster>,
    records: RecordStore,
    leaves: Arc<LeaveRuleEngine>,
    entries: Arc<EntryRecorder>,
}

impl AppState {
    /// Creates the state over the given store and clock.
    pub fn new(config: ServerConfig, store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        let roster = Arc::new(Roster::standard());
        let records = RecordStore::new(store, config.store.list_limit);
        let leaves = LeaveRuleEngine::new(
            roster.clone(),
            config.leave_policy.clone(),
            records.clone(),
            clock.clone(),
        );
        let entries = EntryRecorder::new(roster.clone(), records.clone(), clock);

        Self {
            config: Arc::new(config),
            roster,
            records,
            leaves: Arc::new(leaves),
            entries: Arc::new(entries),
        }
    }

    /// Creates the state over a fresh in-memory store and the wall clock.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryStore::new()),
            Arc::new(SystemClock::new()),
        )
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the record store.
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Returns the leave rule engine.
    pub fn leaves(&self) -> &LeaveRuleEngine {
        &self.leaves
    }

    /// Returns the overtime and typed-leave recorder.
    pub fn entries(&self) -> &EntryRecorder {
        &self.entries
    }

    /// Releases the document store.
    pub async fn shutdown(&self) {
        self.records.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_shutdown_releases_store() {
        let state = AppState::in_memory(ServerConfig::default());
        state.shutdown().await;
        let result = state.records().list_leaves(None).await;
        assert!(matches!(result, Err(TrackerError::Store { .. })));
    }
}
