use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// The half-open 24-hour UTC window `[midnight, midnight + 1 day)` for a
/// calendar day. Both the read and update by-day paths use this so "all
/// records on a day" means the same thing everywhere.
pub fn day_range(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}
