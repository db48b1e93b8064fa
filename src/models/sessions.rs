use crate::entities::sessions::Session as SessionEntity;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<SessionEntity> for Session {
    fn from(value: SessionEntity) -> Self {
        Self {
            token: value.token,
            user_id: value.user_id,
            created_at: value.created_at,
        }
    }
}
