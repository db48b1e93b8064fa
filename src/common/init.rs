use crate::common::state::AppState;
use crate::repositories;
use crate::settings::AppSettings;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = initialize_db(settings).await?;
    initialize_schema(&db).await?;
    Ok(AppState { db })
}

pub fn initialize_db(settings: &AppSettings) -> impl Future<Output = sqlx::Result<Pool<Sqlite>>> {
    SqlitePoolOptions::new()
        .acquire_timeout(settings.db_wait_timeout)
        .max_connections(settings.db_max_connections as _)
        .connect(&settings.database_url)
}

/// The schema is idempotent DDL owned by the repositories; running it at
/// every startup keeps a fresh database usable without a migration step.
pub async fn initialize_schema(db: &Pool<Sqlite>) -> sqlx::Result<()> {
    sqlx::query(repositories::users::CREATE_TABLE).execute(db).await?;
    sqlx::query(repositories::sessions::CREATE_TABLE).execute(db).await?;
    sqlx::query(repositories::messages::CREATE_TABLE).execute(db).await?;
    Ok(())
}
