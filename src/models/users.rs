use crate::entities::users::User as UserEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.id,
            username: value.username,
            created_at: value.created_at,
        }
    }
}
