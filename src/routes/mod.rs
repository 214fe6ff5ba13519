use actix_web::web;

pub mod backend_health;
pub mod tracks;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // `/tracks/summary` is registered ahead of `/tracks/{date}` so the
    // literal segment is not parsed as a calendar day.
    cfg.service(tracks::add_track)
        .service(tracks::get_tracks)
        .service(tracks::get_activity_sum)
        .service(tracks::get_tracks_by_date)
        .service(tracks::update_tracks_by_date)
        .service(tracks::remove_track);
}
