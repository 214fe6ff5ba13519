use std::net::TcpListener;
use std::str::FromStr;
use std::time::Duration;
use secrecy::ExposeSecret;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use healthtrack_backend::run;
use healthtrack_backend::config::settings::get_config;
use healthtrack_backend::db::run_migrations;
use healthtrack_backend::db::tracks::HealthRecordStore;
use healthtrack_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "healthtrack-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let connect_options = SqliteConnectOptions::from_str(
            config.database.connection_string().expose_secret()
        )
        .expect("Invalid database connection string")
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Bounded timeouts: store operations surface an error instead of hanging
    let connection_pool = SqlitePoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(connect_options);

    run_migrations(&connection_pool)
        .await
        .expect("Failed to run database migrations");

    let store = HealthRecordStore::new(connection_pool);

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Starting server on {}", address);

    run(listener, store, config.application.cors_allowed_origin)?.await
}
