use actix_web::{web, HttpResponse};

use crate::db::tracks::HealthRecordStore;
use crate::models::common::ApiResponse;
use crate::models::track::TrackPayload;

#[tracing::instrument(
    name = "Create health record",
    skip(payload, store),
    fields(
        steps = %payload.steps,
        activity = ?payload.activity
    )
)]
pub async fn create_track(
    payload: web::Json<TrackPayload>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    // Validation happens here so invalid payloads never reach the store.
    if let Err(e) = payload.validate() {
        tracing::warn!("Rejected health record payload: {}", e);
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()));
    }

    match store.insert(&payload).await {
        Ok(record) => {
            tracing::info!("Created health record {}", record.id);
            HttpResponse::Created().json(record)
        }
        Err(e) => {
            tracing::error!("Failed to insert health record: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}
