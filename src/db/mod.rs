use sqlx::sqlite::SqlitePool;

pub mod tracks;

/// Applies the embedded migrations. Called once at startup and by the test
/// harness against throwaway databases.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
