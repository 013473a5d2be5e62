//! Trip history store.

use storage::{json, keys, Database};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::record::{record_matches, sample_trips, TripFilter, TripRecord, TripStats, SAMPLE_TRIP_IDS};

/// Finished trips, in insertion order.
///
/// Starts from the built-in sample trips followed by whatever was persisted
/// under [`keys::TRIP_HISTORY`]. Only trips created by the user are written
/// back, so the samples are always present after a reload.
pub struct TripHistory {
    database: Database,
    trips: RwLock<Vec<TripRecord>>,
}

impl TripHistory {
    /// Load the history: samples first, then persisted trips, keeping the
    /// first record seen for each id.
    pub async fn load(database: Database) -> Result<Self> {
        let history = Self {
            database,
            trips: RwLock::new(Vec::new()),
        };
        history.reload().await?;
        Ok(history)
    }

    /// Re-read persisted trips, discarding in-memory state.
    pub async fn reload(&self) -> Result<()> {
        let persisted: Vec<TripRecord> = json::load_json(self.database.pool(), keys::TRIP_HISTORY)
            .await?
            .unwrap_or_default();

        let mut merged: Vec<TripRecord> = Vec::new();
        for record in sample_trips().into_iter().chain(persisted) {
            if merged.iter().any(|existing| existing.id == record.id) {
                debug!("Skipping duplicate trip {}", record.id);
                continue;
            }
            merged.push(record);
        }

        info!("Loaded {} trips", merged.len());
        *self.trips.write().await = merged;
        Ok(())
    }

    /// Append a finished trip and persist.
    ///
    /// In-memory state only changes once the write has succeeded.
    pub async fn append(&self, record: TripRecord) -> Result<()> {
        let mut trips = self.trips.write().await;
        if trips.iter().any(|t| t.id == record.id) {
            return Err(PlannerError::DuplicateTrip(record.id));
        }

        let mut updated = trips.clone();
        updated.push(record);
        self.persist(&updated).await?;

        if let Some(added) = updated.last() {
            info!("Added trip {} ({})", added.id, added.name);
        }
        *trips = updated;
        Ok(())
    }

    /// Trips matching `filter` and `search`, in insertion order.
    pub async fn list(&self, filter: TripFilter, search: &str) -> Vec<TripRecord> {
        self.trips
            .read()
            .await
            .iter()
            .filter(|record| record_matches(record, filter, search))
            .cloned()
            .collect()
    }

    /// All trips, in insertion order.
    pub async fn all(&self) -> Vec<TripRecord> {
        self.list(TripFilter::All, "").await
    }

    pub async fn get(&self, id: &str) -> Option<TripRecord> {
        self.trips.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.trips.read().await.iter().any(|t| t.id == id)
    }

    /// Remove a trip by id. Removing an unknown id is a no-op.
    ///
    /// Returns whether a trip was removed.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let mut trips = self.trips.write().await;
        if !trips.iter().any(|t| t.id == id) {
            debug!("remove: no trip with id {}", id);
            return Ok(false);
        }

        let updated: Vec<TripRecord> = trips.iter().filter(|t| t.id != id).cloned().collect();
        self.persist(&updated).await?;

        info!("Removed trip {}", id);
        *trips = updated;
        Ok(true)
    }

    pub async fn stats(&self) -> TripStats {
        TripStats::from_records(self.trips.read().await.iter())
    }

    pub async fn len(&self) -> usize {
        self.trips.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.trips.read().await.is_empty()
    }

    async fn persist(&self, trips: &[TripRecord]) -> Result<()> {
        let user_trips: Vec<&TripRecord> = trips
            .iter()
            .filter(|t| !SAMPLE_TRIP_IDS.contains(&t.id.as_str()))
            .collect();
        json::save_json(self.database.pool(), keys::TRIP_HISTORY, &user_trips).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TripStatus;
    use chrono::NaiveDate;
    use storage::kv;

    fn trip(id: &str, name: &str, destination: &str) -> TripRecord {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        TripRecord {
            id: id.to_string(),
            name: name.to_string(),
            destination: destination.to_string(),
            start_date: date,
            end_date: date,
            status: TripStatus::Upcoming,
            budget: 1_000,
            spent: 0,
            travelers: 1,
            duration: "1 day".to_string(),
            image: "🧳".to_string(),
            activities: Vec::new(),
            accommodation: "Hostel".to_string(),
            transportation: "Bus".to_string(),
            created_date: date,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_fresh_history_has_samples() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db).await.unwrap();

        let names: Vec<_> = history.all().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Goa Beach Adventure", "Kerala Backwaters"]);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db).await.unwrap();

        // Later trip dates first; order must still follow insertion.
        history.append(trip("300", "Zanskar", "Ladakh, India")).await.unwrap();
        history.append(trip("100", "Alibaug", "Maharashtra, India")).await.unwrap();

        let ids: Vec<_> = history.all().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "300", "100"]);
    }

    #[tokio::test]
    async fn test_persisted_trips_survive_reload() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db.clone()).await.unwrap();
        history.append(trip("42", "Hampi", "Karnataka, India")).await.unwrap();

        let reloaded = TripHistory::load(db).await.unwrap();
        assert_eq!(reloaded.len().await, 3);
        assert_eq!(reloaded.get("42").await.unwrap().name, "Hampi");
    }

    #[tokio::test]
    async fn test_duplicate_ids_first_wins() {
        let db = Database::in_memory().await.unwrap();
        let persisted = vec![trip("1", "Imposter", "Nowhere"), trip("7", "A", "B"), trip("7", "C", "D")];
        json::save_json(db.pool(), keys::TRIP_HISTORY, &persisted).await.unwrap();

        let history = TripHistory::load(db).await.unwrap();
        assert_eq!(history.len().await, 3);
        assert_eq!(history.get("1").await.unwrap().name, "Goa Beach Adventure");
        assert_eq!(history.get("7").await.unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_append_rejects_existing_id() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db).await.unwrap();

        let result = history.append(trip("2", "Again", "Kerala")).await;
        assert!(matches!(result, Err(PlannerError::DuplicateTrip(id)) if id == "2"));
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db).await.unwrap();
        let before = history.all().await;

        assert!(!history.remove("does-not-exist").await.unwrap());
        assert_eq!(history.all().await, before);
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db.clone()).await.unwrap();
        history.append(trip("9", "Coorg", "Karnataka, India")).await.unwrap();

        assert!(history.remove("9").await.unwrap());
        let reloaded = TripHistory::load(db).await.unwrap();
        assert!(reloaded.get("9").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_writes_leave_memory_unchanged() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db.clone()).await.unwrap();
        db.close().await;

        assert!(history.append(trip("99", "Gokarna", "Karnataka, India")).await.is_err());
        assert_eq!(history.len().await, 2);
        assert!(!history.contains("99").await);

        assert!(history.remove("2").await.is_err());
        assert_eq!(history.len().await, 2);
        assert!(history.contains("2").await);
    }

    #[tokio::test]
    async fn test_search_without_match_is_empty() {
        let db = Database::in_memory().await.unwrap();
        let history = TripHistory::load(db).await.unwrap();

        assert!(history.list(TripFilter::All, "antarctica").await.is_empty());
        assert_eq!(history.list(TripFilter::Ongoing, "KERALA").await.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_history_falls_back_to_samples() {
        let db = Database::in_memory().await.unwrap();
        kv::put_entry(db.pool(), keys::TRIP_HISTORY, "[{\"id\": 1").await.unwrap();

        let history = TripHistory::load(db).await.unwrap();
        assert_eq!(history.len().await, 2);
    }
}
