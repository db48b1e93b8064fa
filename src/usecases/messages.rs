use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messages::Message;
use crate::models::users::User;
use crate::repositories::messages;

/// Fetches the message a name currently resolves to. A miss is not part
/// of the user-facing flow and surfaces as an unexpected fault.
pub async fn fetch_one<C: Context>(ctx: &C, name: &str) -> ServiceResult<Message> {
    match messages::fetch_one_by_name(ctx, name).await {
        Ok(message) => Ok(Message::from(message)),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Message>> {
    match messages::fetch_all(ctx).await {
        Ok(messages) => Ok(messages.into_iter().map(Message::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    name: &str,
    content: &str,
    creator: Option<&User>,
) -> ServiceResult<Message> {
    if name.is_empty() {
        return Err(AppError::MessagesNameEmpty);
    }
    let creator_id = creator.map(|user| user.user_id);
    match messages::create(ctx, name, content, creator_id).await {
        Ok(message) => Ok(Message::from(message)),
        Err(e) => unexpected(e),
    }
}

/// Rewrites name and content in place; creator and creation time stay as
/// they were.
pub async fn update<C: Context>(
    ctx: &C,
    message: &Message,
    name: &str,
    content: &str,
) -> ServiceResult<()> {
    match messages::update(ctx, message.message_id, name, content).await {
        Ok(()) => Ok(()),
        Err(e) => unexpected(e),
    }
}

pub async fn destroy<C: Context>(ctx: &C, message: &Message) -> ServiceResult<()> {
    match messages::delete(ctx, message.message_id).await {
        Ok(()) => Ok(()),
        Err(e) => unexpected(e),
    }
}
