use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::sessions::Session;
use crate::models::users::User;
use crate::repositories::{sessions, users};

pub async fn login<C: Context>(ctx: &C, user: &User) -> ServiceResult<Session> {
    match sessions::create(ctx, user.user_id).await {
        Ok(session) => Ok(Session::from(session)),
        Err(e) => unexpected(e),
    }
}

pub async fn logout<C: Context>(ctx: &C, token: &str) -> ServiceResult<()> {
    match sessions::delete(ctx, token).await {
        Ok(()) => Ok(()),
        Err(e) => unexpected(e),
    }
}

/// Resolves a session token to its user. Stale or unknown tokens mean an
/// anonymous request, not an error.
pub async fn fetch_user<C: Context>(ctx: &C, token: &str) -> ServiceResult<Option<User>> {
    let session = match sessions::fetch_one(ctx, token).await {
        Ok(session) => session,
        Err(sqlx::Error::RowNotFound) => return Ok(None),
        Err(e) => return unexpected(e),
    };
    match users::fetch_one(ctx, session.user_id).await {
        Ok(user) => Ok(Some(User::from(user))),
        Err(sqlx::Error::RowNotFound) => Ok(None),
        Err(e) => unexpected(e),
    }
}
