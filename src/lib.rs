use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod utils;
pub mod db;
pub mod telemetry;

use crate::db::tracks::HealthRecordStore;
use crate::routes::init_routes;

/// Assembles the HTTP server around an already-opened record store. The store
/// is constructed by the caller (opened once, closed on shutdown) and shared
/// with the handlers through application state; handlers themselves keep no
/// state between requests.
pub fn run(
    listener: TcpListener,
    store: HealthRecordStore,
    cors_allowed_origin: String,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data = web::Data::new(store);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(store_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
