// tests/support/helpers.rs
use super::mocks::{SteppingClock, fixed_now};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use blogdesk::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use blogdesk::domain::blog::{BlogReadRepository, BlogWriteRepository};
use blogdesk::infrastructure::{
    repositories::InMemoryBlogRepository, util::DefaultSlugGenerator,
};
use blogdesk::presentation::http::state::HttpState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(clock: Arc<SteppingClock>) -> HttpState {
    let repo = Arc::new(InMemoryBlogRepository::new());
    let write_repo: Arc<dyn BlogWriteRepository> = repo.clone();
    let read_repo: Arc<dyn BlogReadRepository> = repo;
    let clock: Arc<dyn Clock> = clock;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo, read_repo, clock, slugger,
    ));
    HttpState { services }
}

/// Router over a fresh in-memory store plus the clock driving `created_at`.
pub fn make_test_app() -> (axum::Router, Arc<SteppingClock>) {
    let clock = Arc::new(SteppingClock::starting_at(fixed_now()));
    let state = build_test_state(Arc::clone(&clock));
    let router =
        blogdesk::presentation::http::routes::build_router_with_rate_limiter(state, false);
    (router, clock)
}

pub fn make_test_router() -> axum::Router {
    make_test_app().0
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Sends one request through a clone of `app`, returning status and JSON body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

pub fn blog_payload(title: &str, author: &str, tags: &str) -> Value {
    json!({
        "title": title,
        "content": format!("{title} body"),
        "author": author,
        "tags": tags,
    })
}

/// Creates a blog and returns the stored representation.
pub async fn create_blog(app: &axum::Router, payload: Value) -> Value {
    let (status, body) = send(app, json_request(Method::POST, "/api/blog/", &payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
