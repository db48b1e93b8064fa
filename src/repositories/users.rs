use crate::common::context::Context;
use crate::entities::users::User;
use chrono::Utc;

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
)"#;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, username, created_at";

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_one(ctx.db()).await
}

pub async fn fetch_one_by_username<C: Context>(ctx: &C, username: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE username = ?"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

/// Inserts the username if it is not taken yet; existing rows are left
/// untouched.
pub async fn create<C: Context>(ctx: &C, username: &str) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT OR IGNORE INTO ",
        TABLE_NAME,
        " (username, created_at) VALUES (?, ?)"
    );
    sqlx::query(QUERY)
        .bind(username)
        .bind(Utc::now())
        .execute(ctx.db())
        .await?;
    Ok(())
}
