use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse = ServiceResult<Response>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,

    MessagesNameEmpty,

    UsersNameEmpty,

    /// The action or `_verb` token that failed to resolve.
    ActionNotFound(String),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",

            AppError::MessagesNameEmpty => "messages.name_empty",

            AppError::UsersNameEmpty => "users.name_empty",

            AppError::ActionNotFound(_) => "actions.not_found",
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Unexpected => "an unexpected error has occurred.".to_owned(),

            AppError::MessagesNameEmpty => "message name is empty.".to_owned(),

            AppError::UsersNameEmpty => "user name is empty.".to_owned(),

            AppError::ActionNotFound(action) => {
                format!("action={} does not exists.", tera::escape_html(action))
            }
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            // User-input errors render inline in place of the page,
            // leaving the status code untouched.
            AppError::MessagesNameEmpty
            | AppError::UsersNameEmpty
            | AppError::ActionNotFound(_) => StatusCode::OK,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response_parts(&self) -> (StatusCode, Html<String>) {
        let status = self.http_status_code();
        let snippet = format!(
            "<div class=\"message\"><b>ERROR:</b> {}</div>",
            self.message()
        );
        (status, Html(snippet))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
