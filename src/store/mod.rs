//! Document store collaborator and the typed record facade over it.
//!
//! The tracker persists flat JSON documents in three logical collections.
//! [`DocumentStore`] is the seam to the persistence technology;
//! [`RecordStore`] layers typed create/list/delete on top of it.

mod memory;
mod records;

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::TrackerResult;

pub use memory::InMemoryStore;
pub use records::{Record, RecordStore};

/// A stored document: a flat JSON object.
pub type Document = Map<String, Value>;

/// Field holding the store's internal identifier. Never exposed by the API.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// The logical collections the tracker writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Leave entries.
    Leaves,
    /// Overtime entries.
    Overtime,
    /// Typed leave entries.
    LeaveTypes,
}

impl Collection {
    /// The collection name as stored.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Leaves => "leaves",
            Collection::Overtime => "overtime",
            Collection::LeaveTypes => "leave_types",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A conjunction of field-equality conditions. The empty filter matches
/// every document.
///
/// # Example
///
/// ```
/// use leave_tracker::store::Filter;
/// use serde_json::json;
///
/// let filter = Filter::new().eq("employee_id", "rabia").eq("date", "2025-03-10");
/// let doc = json!({"employee_id": "rabia", "date": "2025-03-10", "slot": 1});
/// assert!(filter.matches(doc.as_object().unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// The empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `field == value` condition.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Returns true if every condition holds for the document.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// Returns true if the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Per-collection document operations.
///
/// Implementations serialize individual writes but give no isolation across
/// a read followed by a write; callers that need that hold their own lock.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document.
    async fn insert(&self, collection: Collection, document: Document) -> TrackerResult<()>;

    /// Returns matching documents in store order, at most `limit` when given.
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: Option<usize>,
    ) -> TrackerResult<Vec<Document>>;

    /// Counts matching documents.
    async fn count(&self, collection: Collection, filter: &Filter) -> TrackerResult<usize>;

    /// Deletes the first matching document. Returns false if none matched.
    async fn delete_one(&self, collection: Collection, filter: &Filter) -> TrackerResult<bool>;

    /// Releases the underlying connection. Later operations fail.
    async fn close(&self);
}
