use actix_web::{web, HttpResponse};

use crate::db::tracks::HealthRecordStore;
use crate::models::common::ApiResponse;
use crate::utils::calorie_summary::calories_by_activity;

/// Calorie totals grouped by activity label, computed on read from the full
/// record set. Never persisted.
#[tracing::instrument(name = "Get activity calorie summary", skip(store))]
pub async fn get_activity_summary(store: web::Data<HealthRecordStore>) -> HttpResponse {
    match store.find_all().await {
        Ok(records) => HttpResponse::Ok().json(calories_by_activity(&records)),
        Err(e) => {
            tracing::error!("Failed to compute activity summary: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}
