use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// A single health-activity record. `id` is assigned by the store and
/// immutable; the wire format is camelCase to match the frontend.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub steps: i64,
    pub calories_burned: i64,
    pub distance_covered: f64,
    pub weight: f64,
    #[serde(default)]
    pub activity: Option<String>,
}

/// Request body for creating a record or replacing one via the by-day update.
/// `date` is optional on create (defaults to "now") and, on update, keeps the
/// stored date when omitted. There are no partial-patch semantics: all other
/// mutable fields are written as given.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPayload {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub steps: i64,
    pub calories_burned: i64,
    pub distance_covered: f64,
    pub weight: f64,
    #[serde(default)]
    pub activity: Option<String>,
}

#[derive(Debug, Error)]
pub enum TrackValidationError {
    #[error("steps must be a non-negative integer")]
    NegativeSteps,
    #[error("caloriesBurned must be a non-negative integer")]
    NegativeCalories,
    #[error("distanceCovered must be a non-negative number")]
    NegativeDistance,
    #[error("weight must be a positive number")]
    NonPositiveWeight,
    #[error("distanceCovered and weight must be finite numbers")]
    NonFiniteNumber,
}

impl TrackPayload {
    pub fn validate(&self) -> Result<(), TrackValidationError> {
        if !self.distance_covered.is_finite() || !self.weight.is_finite() {
            return Err(TrackValidationError::NonFiniteNumber);
        }
        if self.steps < 0 {
            return Err(TrackValidationError::NegativeSteps);
        }
        if self.calories_burned < 0 {
            return Err(TrackValidationError::NegativeCalories);
        }
        if self.distance_covered < 0.0 {
            return Err(TrackValidationError::NegativeDistance);
        }
        if self.weight <= 0.0 {
            return Err(TrackValidationError::NonPositiveWeight);
        }
        Ok(())
    }
}
