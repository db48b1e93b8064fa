use crate::common::context::Context;
use crate::entities::messages::Message;
use chrono::Utc;

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    content TEXT,
    creator_id INTEGER REFERENCES users (id),
    created_at TEXT NOT NULL
)"#;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = const_str::concat!(
    "m.id, m.name, m.content, m.creator_id, ",
    "u.username AS creator_name, m.created_at"
);
const JOINED_TABLES: &str =
    const_str::concat!(TABLE_NAME, " m LEFT JOIN users u ON m.creator_id = u.id");

// Names are not unique; a reused name resolves to the newest message,
// with id breaking exact timestamp ties.
const ORDERING: &str = "ORDER BY m.created_at DESC, m.id DESC";

pub async fn fetch_one_by_name<C: Context>(ctx: &C, name: &str) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        JOINED_TABLES,
        " WHERE m.name = ? ",
        ORDERING,
        " LIMIT 1"
    );
    sqlx::query_as(QUERY).bind(name).fetch_one(ctx.db()).await
}

pub async fn fetch_one_by_id<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        JOINED_TABLES,
        " WHERE m.id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(message_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        JOINED_TABLES,
        " ",
        ORDERING
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn create<C: Context>(
    ctx: &C,
    name: &str,
    content: &str,
    creator_id: Option<i64>,
) -> sqlx::Result<Message> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, content, creator_id, created_at) VALUES (?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(name)
        .bind(content)
        .bind(creator_id)
        .bind(Utc::now())
        .execute(ctx.db())
        .await?;
    fetch_one_by_id(ctx, result.last_insert_rowid()).await
}

pub async fn update<C: Context>(
    ctx: &C,
    message_id: i64,
    name: &str,
    content: &str,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET name = ?, content = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(name)
        .bind(content)
        .bind(message_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, message_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE id = ?");
    sqlx::query(QUERY)
        .bind(message_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
