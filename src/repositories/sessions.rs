use crate::common::context::Context;
use crate::entities::sessions::Session;
use chrono::Utc;
use uuid::Uuid;

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sessions (
    token TEXT PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users (id),
    created_at TEXT NOT NULL
)"#;

const TABLE_NAME: &str = "sessions";
const READ_FIELDS: &str = "token, user_id, created_at";

pub async fn create<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Session> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (token, user_id, created_at) VALUES (?, ?, ?)"
    );
    let session = Session {
        token: Uuid::new_v4().to_string(),
        user_id,
        created_at: Utc::now(),
    };
    sqlx::query(QUERY)
        .bind(session.token.as_str())
        .bind(session.user_id)
        .bind(session.created_at)
        .execute(ctx.db())
        .await?;
    Ok(session)
}

pub async fn fetch_one<C: Context>(ctx: &C, token: &str) -> sqlx::Result<Session> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE token = ?"
    );
    sqlx::query_as(QUERY).bind(token).fetch_one(ctx.db()).await
}

pub async fn delete<C: Context>(ctx: &C, token: &str) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE token = ?");
    sqlx::query(QUERY).bind(token).execute(ctx.db()).await?;
    Ok(())
}
