use chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub content: Option<String>,
    pub creator_id: Option<i64>,
    pub creator_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
