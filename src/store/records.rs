//! Typed record operations over a [`DocumentStore`].

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RecordKind, TrackerError, TrackerResult};
use crate::models::{LeaveEntry, LeaveTypeEntry, OvertimeEntry};

use super::{Collection, DocumentStore, Filter, INTERNAL_ID_FIELD};

/// A record kind persisted in its own collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// The collection records of this kind live in.
    const COLLECTION: Collection;
    /// The kind reported in not-found errors.
    const KIND: RecordKind;

    /// The record's generated identifier.
    fn id(&self) -> &str;
}

impl Record for LeaveEntry {
    const COLLECTION: Collection = Collection::Leaves;
    const KIND: RecordKind = RecordKind::Leave;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for OvertimeEntry {
    const COLLECTION: Collection = Collection::Overtime;
    const KIND: RecordKind = RecordKind::Overtime;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LeaveTypeEntry {
    const COLLECTION: Collection = Collection::LeaveTypes;
    const KIND: RecordKind = RecordKind::LeaveType;

    fn id(&self) -> &str {
        &self.id
    }
}

/// ISO day string used as the stored form of dates.
pub(crate) fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Uniform create/list/delete over the three record kinds.
///
/// Cloning is cheap; clones share the underlying store.
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn DocumentStore>,
    list_limit: usize,
}

impl RecordStore {
    /// Wraps a document store. List results are capped at `list_limit`.
    pub fn new(store: Arc<dyn DocumentStore>, list_limit: usize) -> Self {
        Self { store, list_limit }
    }

    /// Persists a record.
    pub async fn insert<R: Record>(&self, record: &R) -> TrackerResult<()> {
        let document = match serde_json::to_value(record).map_err(TrackerError::store)? {
            Value::Object(document) => document,
            other => {
                return Err(TrackerError::store(format!(
                    "{} record did not serialize to an object: {other}",
                    R::COLLECTION
                )));
            }
        };
        self.store.insert(R::COLLECTION, document).await
    }

    /// Lists records matching the filter, internal identifiers stripped.
    pub async fn list<R: Record>(&self, filter: &Filter) -> TrackerResult<Vec<R>> {
        let documents = self
            .store
            .find(R::COLLECTION, filter, Some(self.list_limit))
            .await?;
        decode_all(documents)
    }

    /// Lists leave entries, optionally only those whose stored `week_start`
    /// equals the given text.
    pub async fn list_leaves(&self, week_start: Option<&str>) -> TrackerResult<Vec<LeaveEntry>> {
        let filter = match week_start {
            Some(week_start) => Filter::new().eq("week_start", week_start),
            None => Filter::new(),
        };
        self.list(&filter).await
    }

    /// Every leave entry on the given day, unbounded.
    pub async fn leaves_on(&self, date: NaiveDate) -> TrackerResult<Vec<LeaveEntry>> {
        let filter = Filter::new().eq("date", day_key(date));
        let documents = self.store.find(Collection::Leaves, &filter, None).await?;
        decode_all(documents)
    }

    /// Deletes the record with the given id.
    pub async fn delete_by_id<R: Record>(&self, id: &str) -> TrackerResult<()> {
        let filter = Filter::new().eq("id", id);
        self.delete_matching::<R>(&filter).await
    }

    /// Deletes the leave entry for an employee on a day.
    pub async fn delete_leave_by_criteria(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> TrackerResult<()> {
        let filter = Filter::new()
            .eq("employee_id", employee_id)
            .eq("date", day_key(date));
        self.delete_matching::<LeaveEntry>(&filter).await
    }

    /// Releases the underlying store.
    pub async fn close(&self) {
        self.store.close().await;
    }

    async fn delete_matching<R: Record>(&self, filter: &Filter) -> TrackerResult<()> {
        if self.store.delete_one(R::COLLECTION, filter).await? {
            Ok(())
        } else {
            Err(TrackerError::NotFound { kind: R::KIND })
        }
    }
}

fn decode_all<R: Record>(documents: Vec<super::Document>) -> TrackerResult<Vec<R>> {
    documents
        .into_iter()
        .map(|mut document| {
            document.remove(INTERNAL_ID_FIELD);
            serde_json::from_value(Value::Object(document)).map_err(TrackerError::store)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveType;
    use crate::store::InMemoryStore;
    use chrono::{TimeZone, Utc};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn leave(id: &str, employee_id: &str, day: &str, week_start: &str) -> LeaveEntry {
        LeaveEntry {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date: date(day),
            week_start: date(week_start),
            slot: 0,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    fn records() -> (Arc<InMemoryStore>, RecordStore) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), RecordStore::new(store, 1000))
    }

    #[tokio::test]
    async fn test_insert_then_list_strips_internal_id() {
        let (store, records) = records();
        let entry = leave("l1", "busra", "2025-03-10", "2025-03-10");
        records.insert(&entry).await.unwrap();

        let raw = store
            .find(Collection::Leaves, &Filter::new(), None)
            .await
            .unwrap();
        assert!(raw[0].contains_key(INTERNAL_ID_FIELD));

        let listed: Vec<LeaveEntry> = records.list(&Filter::new()).await.unwrap();
        assert_eq!(listed, vec![entry]);
        let json = serde_json::to_value(&listed[0]).unwrap();
        assert!(json.get(INTERNAL_ID_FIELD).is_none());
    }

    #[tokio::test]
    async fn test_list_leaves_filters_by_week_start() {
        let (_, records) = records();
        records
            .insert(&leave("l1", "busra", "2025-03-10", "2025-03-10"))
            .await
            .unwrap();
        records
            .insert(&leave("l2", "sila", "2025-03-18", "2025-03-17"))
            .await
            .unwrap();

        let week = records.list_leaves(Some("2025-03-17")).await.unwrap();
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].id, "l2");
        assert!(records.list_leaves(Some("next-week")).await.unwrap().is_empty());
        assert_eq!(records.list_leaves(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_is_bounded_by_limit() {
        let store = Arc::new(InMemoryStore::new());
        let records = RecordStore::new(store, 2);
        for i in 0..5 {
            records
                .insert(&leave(&format!("l{i}"), "busra", "2025-03-10", "2025-03-10"))
                .await
                .unwrap();
        }

        assert_eq!(records.list_leaves(None).await.unwrap().len(), 2);
        // the rule engine's day view is not truncated
        assert_eq!(records.leaves_on(date("2025-03-10")).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_not_found() {
        let (_, records) = records();
        records
            .insert(&leave("l1", "busra", "2025-03-10", "2025-03-10"))
            .await
            .unwrap();

        records.delete_by_id::<LeaveEntry>("l1").await.unwrap();
        let err = records.delete_by_id::<LeaveEntry>("l1").await.unwrap_err();
        assert!(matches!(
            err,
            TrackerError::NotFound {
                kind: RecordKind::Leave
            }
        ));
    }

    #[tokio::test]
    async fn test_delete_by_id_is_scoped_to_collection() {
        let (_, records) = records();
        records
            .insert(&leave("shared", "busra", "2025-03-10", "2025-03-10"))
            .await
            .unwrap();

        let err = records
            .delete_by_id::<OvertimeEntry>("shared")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TrackerError::NotFound {
                kind: RecordKind::Overtime
            }
        ));
        assert_eq!(records.list_leaves(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_leave_by_criteria() {
        let (_, records) = records();
        records
            .insert(&leave("l1", "busra", "2025-03-10", "2025-03-10"))
            .await
            .unwrap();

        let missing = records
            .delete_leave_by_criteria("busra", date("2025-03-11"))
            .await;
        assert!(matches!(missing, Err(TrackerError::NotFound { .. })));

        records
            .delete_leave_by_criteria("busra", date("2025-03-10"))
            .await
            .unwrap();
        assert!(records.list_leaves(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leave_type_hours_round_trip() {
        let (_, records) = records();
        let entry = LeaveTypeEntry {
            id: "t1".to_string(),
            employee_id: "kader".to_string(),
            date: date("2025-03-12"),
            leave_type: LeaveType::Compensatory,
            hours: Some(2.5),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        };
        records.insert(&entry).await.unwrap();

        let listed: Vec<LeaveTypeEntry> = records.list(&Filter::new()).await.unwrap();
        assert_eq!(listed[0].leave_type, LeaveType::Compensatory);
        assert_eq!(listed[0].hours, Some(2.5));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let (store, records) = records();
        store.close().await;
        let result = records.list_leaves(None).await;
        assert!(matches!(result, Err(TrackerError::Store { .. })));
    }
}
