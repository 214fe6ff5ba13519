use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::track::{HealthRecord, TrackPayload};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the requested id or date range. Benign outcome,
    /// never logged as a fault.
    #[error("no matching health record")]
    NotFound,
    /// The underlying database could not complete the operation. Statements
    /// are atomic per record, so callers may safely retry.
    #[error("storage unavailable")]
    Unavailable(#[from] sqlx::Error),
}

const RECORD_COLUMNS: &str = "id, date, steps, calories_burned, distance_covered, weight, activity";

/// Owns the persisted record collection. Constructed once at startup and
/// shared with the handlers; the pool enforces bounded acquire timeouts so
/// store calls fail with `Unavailable` instead of hanging.
#[derive(Clone)]
pub struct HealthRecordStore {
    pool: SqlitePool,
}

impl HealthRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Assigns a fresh id, defaults `date` to now when the payload omits it,
    /// and persists the record. Returns the record as stored.
    #[tracing::instrument(name = "Insert health record", skip(self, payload))]
    pub async fn insert(&self, payload: &TrackPayload) -> Result<HealthRecord, StoreError> {
        let record = HealthRecord {
            id: Uuid::new_v4(),
            date: payload.date.unwrap_or_else(Utc::now),
            steps: payload.steps,
            calories_burned: payload.calories_burned,
            distance_covered: payload.distance_covered,
            weight: payload.weight,
            activity: payload.activity.clone(),
        };

        sqlx::query(
            r#"
            INSERT INTO health_records (id, date, steps, calories_burned, distance_covered, weight, activity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(record.id)
        .bind(record.date)
        .bind(record.steps)
        .bind(record.calories_burned)
        .bind(record.distance_covered)
        .bind(record.weight)
        .bind(record.activity.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Every stored record. Retrieval order is not part of the contract;
    /// callers that need chronological order must sort.
    #[tracing::instrument(name = "Fetch all health records", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<HealthRecord>, StoreError> {
        let records = sqlx::query_as::<_, HealthRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM health_records"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Records whose date falls in the half-open interval `[start, end)`.
    /// An empty match is an empty vec, not an error.
    #[tracing::instrument(name = "Fetch health records by date range", skip(self))]
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HealthRecord>, StoreError> {
        let records = sqlx::query_as::<_, HealthRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM health_records WHERE date >= ?1 AND date < ?2"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    #[tracing::instrument(name = "Fetch health record by id", skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<HealthRecord, StoreError> {
        sqlx::query_as::<_, HealthRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM health_records WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Overwrites the mutable fields of the first record in `[start, end)`.
    /// "First" is deterministic: lowest date, then lowest id. The stored date
    /// is kept when `fields.date` is absent. Concurrent updates against
    /// overlapping windows are last-write-wins; SQLite serializes the writes.
    #[tracing::instrument(name = "Update health record by date range", skip(self, fields))]
    pub async fn update_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        fields: &TrackPayload,
    ) -> Result<HealthRecord, StoreError> {
        sqlx::query_as::<_, HealthRecord>(&format!(
            r#"
            UPDATE health_records
            SET date = COALESCE(?1, date),
                steps = ?2,
                calories_burned = ?3,
                distance_covered = ?4,
                weight = ?5,
                activity = ?6
            WHERE id = (
                SELECT id FROM health_records
                WHERE date >= ?7 AND date < ?8
                ORDER BY date ASC, id ASC
                LIMIT 1
            )
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(fields.date)
        .bind(fields.steps)
        .bind(fields.calories_burned)
        .bind(fields.distance_covered)
        .bind(fields.weight)
        .bind(fields.activity.as_deref())
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Permanent removal. Returns whether a record existed; deleting an
    /// unknown id is a valid outcome, not an error.
    #[tracing::instrument(name = "Delete health record", skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM health_records WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
