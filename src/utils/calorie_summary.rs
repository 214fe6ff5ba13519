use std::collections::HashMap;

use crate::models::track::HealthRecord;

/// Label used for records without an activity tag. Aggregation-only: the
/// stored value is never rewritten.
pub const UNKNOWN_ACTIVITY: &str = "Unknown";

/// Groups total calories burned by activity label. Pure function over the
/// record slice; an empty input yields an empty map. Output order carries no
/// meaning, consumers sort if they need stable presentation.
pub fn calories_by_activity(records: &[HealthRecord]) -> HashMap<String, i64> {
    let mut totals: HashMap<String, i64> = HashMap::new();

    for record in records {
        let label = match record.activity.as_deref() {
            Some(activity) if !activity.trim().is_empty() => activity,
            _ => UNKNOWN_ACTIVITY,
        };
        *totals.entry(label.to_string()).or_insert(0) += record.calories_burned;
    }

    totals
}
