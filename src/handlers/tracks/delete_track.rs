use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::db::tracks::HealthRecordStore;
use crate::models::common::ApiResponse;

#[tracing::instrument(name = "Delete health record", skip(store))]
pub async fn delete_track(id: web::Path<String>, store: web::Data<HealthRecordStore>) -> HttpResponse {
    let record_id = match Uuid::parse_str(&id) {
        Ok(record_id) => record_id,
        Err(_) => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid record id"))
        }
    };

    match store.delete_by_id(record_id).await {
        // Deleting twice is idempotent: the second call lands in the
        // "nothing to delete" branch rather than failing.
        Ok(true) => HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("Record deleted successfully")),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Record not found")),
        Err(e) => {
            tracing::error!("Failed to delete health record {}: {}", record_id, e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal Server Error"))
        }
    }
}
