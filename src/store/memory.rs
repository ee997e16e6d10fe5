//! In-process document store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::{Collection, Document, DocumentStore, Filter, INTERNAL_ID_FIELD};

/// A [`DocumentStore`] held in memory.
///
/// Documents keep insertion order. Each insert is stamped with an internal
/// `_id` the way a document database would.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    next_internal_id: AtomicU64,
    closed: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> TrackerResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TrackerError::store("store connection is closed"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: Collection, mut document: Document) -> TrackerResult<()> {
        self.ensure_open()?;
        let internal_id = self.next_internal_id.fetch_add(1, Ordering::Relaxed);
        document.insert(
            INTERNAL_ID_FIELD.to_string(),
            Value::String(format!("{internal_id:024x}")),
        );

        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(document);
        debug!(collection = %collection, "document inserted");
        Ok(())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: Option<usize>,
    ) -> TrackerResult<Vec<Document>> {
        self.ensure_open()?;
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };
        Ok(documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> TrackerResult<usize> {
        self.ensure_open()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| documents.iter().filter(|doc| filter.matches(doc)).count())
            .unwrap_or(0))
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> TrackerResult<bool> {
        self.ensure_open()?;
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        match documents.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                documents.remove(index);
                debug!(collection = %collection, "document deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        debug!("in-memory store closed");
    }
}
