use anyhow::Result;
use microblog_service::api;
use microblog_service::common::init;
use microblog_service::common::state::AppState;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

// Binds the full router on an ephemeral port over a fresh in-memory
// database. The client does not follow redirects so their targets can be
// asserted directly.
async fn spawn_app() -> Result<(String, reqwest::Client)> {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    init::initialize_schema(&db).await?;

    let app = api::router().with_state(AppState { db });
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;
    Ok((base, client))
}

#[tokio::test]
async fn the_root_redirects_to_the_message_list() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client.get(format!("{base}/")).send().await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/messages");
    Ok(())
}

#[tokio::test]
async fn messages_can_be_created_shown_updated_and_destroyed() -> Result<()> {
    let (base, client) = spawn_app().await?;

    let response = client
        .post(format!("{base}/messages"))
        .form(&[("name", "hello"), ("content", "first post")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/messages/hello");

    let body = client
        .get(format!("{base}/messages"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("hello"));

    let body = client
        .get(format!("{base}/messages/hello"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("first post"));

    let body = client
        .get(format!("{base}/messages/hello/edit"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("first post"));
    assert!(body.contains("_verb"));

    let response = client
        .post(format!("{base}/messages/hello"))
        .form(&[("_verb", "put"), ("name", "hello"), ("content", "edited post")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/messages/hello");

    let body = client
        .get(format!("{base}/messages/hello"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("edited post"));

    let response = client
        .post(format!("{base}/messages/hello"))
        .form(&[("_verb", "delete")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/messages");

    let response = client.get(format!("{base}/messages/hello")).send().await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn the_new_form_is_served() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let body = client
        .get(format!("{base}/messages/new"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains(r#"<form method="post" action="/messages">"#));
    Ok(())
}

#[tokio::test]
async fn the_list_also_answers_with_a_trailing_slash() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client.get(format!("{base}/messages/")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn creating_with_a_blank_name_renders_an_inline_error() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client
        .post(format!("{base}/messages"))
        .form(&[("name", ""), ("content", "x")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains("<b>ERROR:</b> message name is empty."));
    Ok(())
}

#[tokio::test]
async fn an_unknown_verb_renders_an_inline_error() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client
        .post(format!("{base}/messages/hello"))
        .form(&[("_verb", "patch"), ("name", "x")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains("action=patch does not exists."));
    Ok(())
}

#[tokio::test]
async fn an_unknown_trailing_action_renders_an_inline_error() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client
        .get(format!("{base}/messages/hello/fly"))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await?;
    assert!(body.contains("action=fly does not exists."));
    Ok(())
}

#[tokio::test]
async fn updating_without_a_target_name_is_a_fault() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client
        .post(format!("{base}/messages"))
        .form(&[("_verb", "put"), ("name", "x"), ("content", "y")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn names_with_spaces_round_trip_through_the_urls() -> Result<()> {
    let (base, client) = spawn_app().await?;
    let response = client
        .post(format!("{base}/messages"))
        .form(&[("name", "hello world"), ("content", "spaced")])
        .send()
        .await?;
    assert_eq!(response.headers()["location"], "/messages/hello%20world");

    let body = client
        .get(format!("{base}/messages/hello%20world"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("spaced"));
    Ok(())
}

#[tokio::test]
async fn login_stamps_the_creator_and_logout_clears_it() -> Result<()> {
    let (base, client) = spawn_app().await?;

    let body = client
        .get(format!("{base}/login?next=/messages"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains(r#"name="username""#));

    let response = client
        .post(format!("{base}/login"))
        .form(&[("username", ""), ("next", "/messages")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await?.contains("user name is empty."));

    let response = client
        .post(format!("{base}/login"))
        .form(&[("username", "alice"), ("next", "/messages")])
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/messages");
    let set_cookie = response.headers()["set-cookie"].to_str()?.to_owned();
    let cookie = set_cookie.split(';').next().unwrap().to_owned();
    assert!(cookie.starts_with("microblog_session="));

    let body = client
        .get(format!("{base}/messages"))
        .header("Cookie", &cookie)
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("Logout"));

    client
        .post(format!("{base}/messages"))
        .header("Cookie", &cookie)
        .form(&[("name", "signed"), ("content", "hi")])
        .send()
        .await?;
    let body = client
        .get(format!("{base}/messages/signed"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("alice"));

    let response = client
        .get(format!("{base}/logout?next=/messages"))
        .header("Cookie", &cookie)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = client
        .get(format!("{base}/messages"))
        .header("Cookie", &cookie)
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("Login"));
    Ok(())
}
