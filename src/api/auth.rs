use crate::api::{RequestContext, views};
use crate::common::error::ServiceResponse;
use crate::common::website;
use crate::usecases::{sessions, users};
use axum::Form;
use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use serde::Deserialize;

pub const SESSION_COOKIE: &str = "microblog_session";

fn default_next() -> String {
    website::MESSAGES_URL.to_owned()
}

#[derive(Deserialize)]
pub struct NextParams {
    #[serde(default = "default_next")]
    pub next: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_next")]
    pub next: String,
}

pub async fn login_form(ctx: RequestContext, Query(params): Query<NextParams>) -> ServiceResponse {
    Ok(views::render_login(&ctx, &params.next)?.into_response())
}

pub async fn login(ctx: RequestContext, Form(form): Form<LoginForm>) -> ServiceResponse {
    let user = users::get_or_create(&ctx, &form.username).await?;
    let session = sessions::login(&ctx, &user).await?;
    let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", session.token);
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(&form.next)).into_response())
}

pub async fn logout(ctx: RequestContext, Query(params): Query<NextParams>) -> ServiceResponse {
    if let Some(token) = &ctx.session_token {
        sessions::logout(&ctx, token).await?;
    }
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(&params.next)).into_response())
}
