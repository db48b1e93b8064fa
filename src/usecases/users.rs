use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::users::User;
use crate::repositories::users;

pub async fn get_or_create<C: Context>(ctx: &C, username: &str) -> ServiceResult<User> {
    if username.is_empty() {
        return Err(AppError::UsersNameEmpty);
    }
    if let Err(e) = users::create(ctx, username).await {
        return unexpected(e);
    }
    match users::fetch_one_by_username(ctx, username).await {
        Ok(user) => Ok(User::from(user)),
        Err(e) => unexpected(e),
    }
}
