use actix_web::{web, HttpResponse};
use chrono::NaiveDate;

use crate::db::tracks::HealthRecordStore;
use crate::models::common::ApiResponse;
use crate::utils::date_range::day_range;

#[tracing::instrument(name = "Get all health records", skip(store))]
pub async fn get_all_tracks(store: web::Data<HealthRecordStore>) -> HttpResponse {
    match store.find_all().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            tracing::error!("Failed to fetch health records: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}

#[tracing::instrument(name = "Get health records for day", skip(store))]
pub async fn get_tracks_for_day(
    date: web::Path<String>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    let day = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(day) => day,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Invalid date, expected YYYY-MM-DD"))
        }
    };

    let (start, end) = day_range(day);
    match store.find_by_date_range(start, end).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            tracing::error!("Failed to fetch health records for {}: {}", day, e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}
