use actix_web::{web, HttpResponse};
use chrono::NaiveDate;

use crate::db::tracks::{HealthRecordStore, StoreError};
use crate::models::common::ApiResponse;
use crate::models::track::TrackPayload;
use crate::utils::date_range::day_range;

#[tracing::instrument(name = "Update health record for day", skip(payload, store))]
pub async fn update_track_for_day(
    date: web::Path<String>,
    payload: web::Json<TrackPayload>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    let day = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(day) => day,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Invalid date, expected YYYY-MM-DD"))
        }
    };

    if let Err(e) = payload.validate() {
        tracing::warn!("Rejected health record payload: {}", e);
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()));
    }

    let (start, end) = day_range(day);
    match store.update_by_date_range(start, end, &payload).await {
        Ok(record) => {
            tracing::info!("Updated health record {}", record.id);
            HttpResponse::Ok().json(record)
        }
        Err(StoreError::NotFound) => HttpResponse::NotFound().json(ApiResponse::<()>::error(
            format!("No health record found for {}", day),
        )),
        Err(e) => {
            tracing::error!("Failed to update health record for {}: {}", day, e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}
