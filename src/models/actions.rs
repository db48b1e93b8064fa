use crate::common::error::{AppError, ServiceResult};
use axum::http::Method;

/// One of the seven message operations. Name-carrying variants borrow
/// from the decoded path remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    List,
    New,
    Show(&'a str),
    Edit(&'a str),
    Create,
    Update(&'a str),
    Destroy(&'a str),
}

impl<'a> Action<'a> {
    /// Resolves the action for a request under the messages namespace.
    ///
    /// `url_data` is the decoded path remainder after `/messages`, either
    /// empty or starting with `/`. `verb` is the hidden `_verb` form field
    /// POST bodies carry to emulate PUT and DELETE.
    pub fn resolve(
        method: &Method,
        url_data: &'a str,
        verb: Option<&'a str>,
    ) -> ServiceResult<Action<'a>> {
        match *method {
            Method::GET => Self::resolve_get(url_data),
            Method::POST => Self::resolve_post(url_data, verb),
            _ => Err(AppError::ActionNotFound(
                method.as_str().to_ascii_lowercase(),
            )),
        }
    }

    fn resolve_get(url_data: &'a str) -> ServiceResult<Action<'a>> {
        let suffix = url_data.strip_prefix('/').unwrap_or(url_data);
        match suffix.split_once('/') {
            None => match suffix {
                "" => Ok(Action::List),
                "new" => Ok(Action::New),
                name => Ok(Action::Show(name)),
            },
            Some((name, "edit")) => Ok(Action::Edit(name)),
            Some((_, trailing)) => Err(AppError::ActionNotFound(trailing.to_owned())),
        }
    }

    fn resolve_post(url_data: &'a str, verb: Option<&'a str>) -> ServiceResult<Action<'a>> {
        let name = url_data.strip_prefix('/').unwrap_or(url_data);
        match verb.unwrap_or("") {
            "" => Ok(Action::Create),
            "put" => Ok(Action::Update(name)),
            "delete" => Ok(Action::Destroy(name)),
            other => Err(AppError::ActionNotFound(other.to_owned())),
        }
    }
}
