use crate::common::context::Context;
use crate::common::error::AppError;
use crate::common::init;
use crate::common::state::AppState;
use crate::models::users::User;
use crate::settings::AppSettings;
use crate::usecases::sessions;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use axum::routing::get;
use sqlx::{Pool, Sqlite};
use tokio::net::TcpListener;

pub mod auth;
pub mod messages;
pub mod views;

pub struct RequestContext {
    pub db: Pool<Sqlite>,
    pub current_user: Option<User>,
    pub session_token: Option<String>,
    pub request_path: String,
}

pub fn router() -> Router<AppState> {
    let controller = get(messages::controller_get).post(messages::controller_post);
    Router::new()
        .route("/", get(messages::index))
        .route("/messages", controller.clone())
        .route("/messages/", controller.clone())
        .route("/messages/{*url_data}", controller)
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);
    let listener = TcpListener::bind((settings.app_host, settings.app_port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_token = read_session_cookie(parts);
        let current_user = match &session_token {
            Some(token) => sessions::fetch_user(state, token).await?,
            None => None,
        };
        Ok(Self {
            db: state.db.clone(),
            current_user,
            session_token,
            request_path: parts.uri.path().to_owned(),
        })
    }
}

fn read_session_cookie(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == auth::SESSION_COOKIE).then(|| value.to_owned())
    })
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}

impl Context for AppState {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}
