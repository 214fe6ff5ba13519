use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::db::tracks::HealthRecordStore;
use crate::handlers::tracks::activity_summary::get_activity_summary;
use crate::handlers::tracks::create_track::create_track;
use crate::handlers::tracks::delete_track::delete_track;
use crate::handlers::tracks::get_tracks::{get_all_tracks, get_tracks_for_day};
use crate::handlers::tracks::update_track::update_track_for_day;
use crate::models::track::TrackPayload;

#[post("/tracks")]
async fn add_track(
    payload: web::Json<TrackPayload>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    create_track(payload, store).await
}

#[get("/tracks")]
async fn get_tracks(store: web::Data<HealthRecordStore>) -> HttpResponse {
    get_all_tracks(store).await
}

#[get("/tracks/summary")]
async fn get_activity_sum(store: web::Data<HealthRecordStore>) -> HttpResponse {
    get_activity_summary(store).await
}

#[get("/tracks/{date}")]
async fn get_tracks_by_date(
    date: web::Path<String>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    get_tracks_for_day(date, store).await
}

#[put("/tracks/{date}")]
async fn update_tracks_by_date(
    date: web::Path<String>,
    payload: web::Json<TrackPayload>,
    store: web::Data<HealthRecordStore>,
) -> HttpResponse {
    update_track_for_day(date, payload, store).await
}

#[delete("/tracks/{id}")]
async fn remove_track(id: web::Path<String>, store: web::Data<HealthRecordStore>) -> HttpResponse {
    delete_track(id, store).await
}
