use crate::api::{RequestContext, views};
use crate::common::error::ServiceResponse;
use crate::common::website;
use crate::models::actions::Action;
use crate::usecases::messages;
use axum::Form;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Redirect};
use serde::Deserialize;
use std::borrow::Cow;

#[derive(Deserialize, Default)]
pub struct MessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "_verb")]
    pub verb: Option<String>,
}

pub async fn index() -> Redirect {
    Redirect::to(website::MESSAGES_URL)
}

pub async fn controller_get(ctx: RequestContext, method: Method, uri: Uri) -> ServiceResponse {
    handle(ctx, method, uri, MessageForm::default()).await
}

pub async fn controller_post(
    ctx: RequestContext,
    method: Method,
    uri: Uri,
    Form(form): Form<MessageForm>,
) -> ServiceResponse {
    handle(ctx, method, uri, form).await
}

async fn handle(
    ctx: RequestContext,
    method: Method,
    uri: Uri,
    form: MessageForm,
) -> ServiceResponse {
    let url_data = decode_url_data(&uri);
    match Action::resolve(&method, &url_data, form.verb.as_deref())? {
        Action::List => list(&ctx).await,
        Action::New => new(&ctx).await,
        Action::Show(name) => show(&ctx, name).await,
        Action::Edit(name) => edit(&ctx, name).await,
        Action::Create => create(&ctx, &form.name, &form.content).await,
        Action::Update(name) => update(&ctx, name, &form.name, &form.content).await,
        Action::Destroy(name) => destroy(&ctx, name).await,
    }
}

/// Path remainder after the `/messages` prefix, percent-decoded.
fn decode_url_data(uri: &Uri) -> Cow<'_, str> {
    let path = uri.path();
    let url_data = path.strip_prefix("/messages").unwrap_or(path);
    match urlencoding::decode(url_data) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(url_data),
    }
}

async fn list(ctx: &RequestContext) -> ServiceResponse {
    let messages = messages::fetch_all(ctx).await?;
    Ok(views::render_page(ctx, "index.html", None, Some(&messages))?.into_response())
}

async fn new(ctx: &RequestContext) -> ServiceResponse {
    Ok(views::render_page(ctx, "new.html", None, None)?.into_response())
}

async fn show(ctx: &RequestContext, name: &str) -> ServiceResponse {
    let message = messages::fetch_one(ctx, name).await?;
    Ok(views::render_page(ctx, "show.html", Some(&message), None)?.into_response())
}

async fn edit(ctx: &RequestContext, name: &str) -> ServiceResponse {
    let message = messages::fetch_one(ctx, name).await?;
    Ok(views::render_page(ctx, "edit.html", Some(&message), None)?.into_response())
}

async fn create(ctx: &RequestContext, name: &str, content: &str) -> ServiceResponse {
    let message = messages::create(ctx, name, content, ctx.current_user.as_ref()).await?;
    Ok(Redirect::to(&website::get_message_url(&message.name)).into_response())
}

async fn update(
    ctx: &RequestContext,
    name: &str,
    new_name: &str,
    content: &str,
) -> ServiceResponse {
    let message = messages::fetch_one(ctx, name).await?;
    messages::update(ctx, &message, new_name, content).await?;
    Ok(Redirect::to(&website::get_message_url(new_name)).into_response())
}

async fn destroy(ctx: &RequestContext, name: &str) -> ServiceResponse {
    let message = messages::fetch_one(ctx, name).await?;
    messages::destroy(ctx, &message).await?;
    Ok(Redirect::to(website::MESSAGES_URL).into_response())
}
