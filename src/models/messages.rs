use crate::entities::messages::Message as MessageEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub name: String,
    pub content: String,
    pub creator_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            message_id: value.id,
            name: value.name,
            content: value.content.unwrap_or_default(),
            creator_name: value.creator_name,
            created_at: value.created_at,
        }
    }
}
