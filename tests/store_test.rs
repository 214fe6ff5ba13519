use chrono::{TimeZone, Utc};
use uuid::Uuid;

mod common;
use common::utils::configure_db;

use healthtrack_backend::db::tracks::{HealthRecordStore, StoreError};
use healthtrack_backend::models::track::TrackPayload;
use healthtrack_backend::utils::date_range::day_range;

fn payload(date: Option<chrono::DateTime<Utc>>, steps: i64) -> TrackPayload {
    TrackPayload {
        date,
        steps,
        calories_burned: 250,
        distance_covered: 2.0,
        weight: 71.0,
        activity: Some("Walking".to_string()),
    }
}

#[tokio::test]
async fn insert_then_find_by_id_round_trips() {
    let store = HealthRecordStore::new(configure_db().await);

    let inserted = store
        .insert(&payload(None, 1234))
        .await
        .expect("Insert failed");

    let fetched = store
        .find_by_id(inserted.id)
        .await
        .expect("Lookup failed");

    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.steps, 1234);
    assert_eq!(fetched.activity.as_deref(), Some("Walking"));
}

#[tokio::test]
async fn find_by_id_signals_not_found_for_unknown_id() {
    let store = HealthRecordStore::new(configure_db().await);

    let result = store.find_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn update_by_date_range_picks_earliest_record_in_window() {
    let store = HealthRecordStore::new(configure_db().await);

    let later = Utc.with_ymd_and_hms(2024, 5, 10, 10, 0, 0).unwrap();
    let earlier = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
    // Later record inserted first; the tie-break is by date, not insertion
    store
        .insert(&payload(Some(later), 1))
        .await
        .expect("Insert failed");
    let target = store
        .insert(&payload(Some(earlier), 2))
        .await
        .expect("Insert failed");

    let (start, end) = day_range(earlier.date_naive());
    let updated = store
        .update_by_date_range(start, end, &payload(None, 7777))
        .await
        .expect("Update failed");

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.steps, 7777);
    // No date in the replacement fields, so the stored date survives
    assert_eq!(updated.date, earlier);
}

#[tokio::test]
async fn update_by_date_range_signals_not_found_on_empty_window() {
    let store = HealthRecordStore::new(configure_db().await);

    let day = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
    let (start, end) = day_range(day.date_naive());

    let result = store.update_by_date_range(start, end, &payload(None, 1)).await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn delete_by_id_reports_whether_a_record_existed() {
    let store = HealthRecordStore::new(configure_db().await);

    let inserted = store
        .insert(&payload(None, 10))
        .await
        .expect("Insert failed");

    assert!(store.delete_by_id(inserted.id).await.expect("Delete failed"));
    assert!(!store.delete_by_id(inserted.id).await.expect("Delete failed"));
    assert!(matches!(
        store.find_by_id(inserted.id).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn operations_surface_unavailable_after_pool_shutdown() {
    let pool = configure_db().await;
    let store = HealthRecordStore::new(pool.clone());
    pool.close().await;

    let result = store.find_all().await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
