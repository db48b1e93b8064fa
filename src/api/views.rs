use crate::api::RequestContext;
use crate::common::error::{ServiceResult, unexpected};
use crate::common::website;
use crate::models::messages::Message;
use axum::response::Html;
use std::sync::LazyLock;
use tera::Tera;

static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates([
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
        ("show.html", include_str!("../../templates/show.html")),
        ("new.html", include_str!("../../templates/new.html")),
        ("edit.html", include_str!("../../templates/edit.html")),
        ("login.html", include_str!("../../templates/login.html")),
    ])
    .expect("Failed to load templates");
    tera
});

/// Renders a message page. Every template receives the same four values:
/// `message`, `messages`, `url` and `url_linktext`.
pub fn render_page(
    ctx: &RequestContext,
    template_name: &str,
    message: Option<&Message>,
    messages: Option<&[Message]>,
) -> ServiceResult<Html<String>> {
    let mut values = base_context(ctx);
    values.insert("message", &message);
    values.insert("messages", &messages);
    render(template_name, &values)
}

pub fn render_login(ctx: &RequestContext, next: &str) -> ServiceResult<Html<String>> {
    let mut values = base_context(ctx);
    values.insert("next", next);
    render("login.html", &values)
}

fn base_context(ctx: &RequestContext) -> tera::Context {
    let mut values = tera::Context::new();
    match ctx.current_user {
        Some(_) => {
            values.insert("url", &website::get_logout_url(&ctx.request_path));
            values.insert("url_linktext", "Logout");
        }
        None => {
            values.insert("url", &website::get_login_url(&ctx.request_path));
            values.insert("url_linktext", "Login");
        }
    }
    values
}

fn render(template_name: &str, values: &tera::Context) -> ServiceResult<Html<String>> {
    match TEMPLATES.render(template_name, values) {
        Ok(body) => Ok(Html(body)),
        Err(e) => unexpected(e),
    }
}
