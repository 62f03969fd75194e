use axum::http::{Method, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

mod support;

use support::{blog_payload, create_blog, empty_request, fixed_now, json_request, send};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn row_titles(listing: &Value) -> Vec<String> {
    listing["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect()
}

async fn listing(app: &axum::Router, uri: &str) -> Value {
    let (status, body) = send(app, empty_request(Method::GET, uri)).await;
    assert_eq!(status, StatusCode::OK, "{uri}: {body}");
    body
}

/// One blog per date bucket; "now" is 2024-06-15T12:00Z.
async fn dated_app() -> axum::Router {
    let (app, clock) = support::make_test_app();

    clock.set(at("2023-12-31T23:00:00Z"));
    create_blog(&app, blog_payload("Last year", "Ada", "x")).await;
    clock.set(at("2024-06-01T08:00:00Z"));
    create_blog(&app, blog_payload("Early June", "Bob", "x")).await;
    clock.set(at("2024-06-10T09:00:00Z"));
    create_blog(&app, blog_payload("Last week", "Ada", "x")).await;
    clock.set(fixed_now());
    create_blog(&app, blog_payload("Today", "Carol", "x")).await;

    app
}

#[tokio::test]
async fn listing_is_newest_first_with_configured_columns() {
    let app = support::make_test_router();
    create_blog(&app, blog_payload("First", "Ada", "x")).await;
    create_blog(&app, blog_payload("Second", "Bob", "x")).await;
    create_blog(&app, blog_payload("Third", "Ada", "x")).await;

    let body = listing(&app, "/admin/blogs").await;

    assert_eq!(row_titles(&body), ["Third", "Second", "First"]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["ordering"], "-created_at");
    assert_eq!(body["search_fields"], json!(["title", "author", "content"]));
    let columns: Vec<_> = body["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["field"].as_str().unwrap())
        .collect();
    assert_eq!(columns, ["title", "author", "created_at"]);
    assert!(body.get("search").is_none());

    let row = &body["rows"][0];
    assert_eq!(row["id"], 3);
    assert_eq!(row["author"], "Ada");
    assert!(row.get("content").is_none());
}

#[tokio::test]
async fn admin_search_covers_content() {
    let app = support::make_test_router();
    create_blog(&app, blog_payload("Alpha", "Ada", "x")).await;
    create_blog(
        &app,
        json!({ "title": "Beta", "content": "mentions ferris", "author": "Bob", "tags": "x" }),
    )
    .await;

    let body = listing(&app, "/admin/blogs?q=Ferris").await;
    assert_eq!(row_titles(&body), ["Beta"]);
    assert_eq!(body["search"], "Ferris");
}

#[tokio::test]
async fn author_filter_lists_distinct_authors() {
    let app = dated_app().await;

    let body = listing(&app, "/admin/blogs?author=Ada").await;
    assert_eq!(row_titles(&body), ["Last week", "Last year"]);

    let author_filter = &body["filters"][1];
    assert_eq!(author_filter["parameter"], "author");
    let choices: Vec<(Value, bool)> = author_filter["choices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["value"].clone(), c["selected"].as_bool().unwrap()))
        .collect();
    assert_eq!(
        choices,
        [
            (Value::Null, false),
            (json!("Ada"), true),
            (json!("Bob"), false),
            (json!("Carol"), false),
        ]
    );
}

#[tokio::test]
async fn created_filter_buckets_by_calendar() {
    let app = dated_app().await;

    let cases = [
        ("today", vec!["Today"]),
        ("past_7_days", vec!["Today", "Last week"]),
        ("this_month", vec!["Today", "Last week", "Early June"]),
        ("this_year", vec!["Today", "Last week", "Early June"]),
        ("any", vec!["Today", "Last week", "Early June", "Last year"]),
    ];
    for (value, expected) in cases {
        let body = listing(&app, &format!("/admin/blogs?created={value}")).await;
        assert_eq!(row_titles(&body), expected, "created={value}");
    }

    let body = listing(&app, "/admin/blogs?created=this_month").await;
    let created_filter = &body["filters"][0];
    assert_eq!(created_filter["parameter"], "created");
    let selected: Vec<_> = created_filter["choices"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["selected"] == json!(true))
        .map(|c| c["value"].clone())
        .collect();
    assert_eq!(selected, [json!("this_month")]);
}

#[tokio::test]
async fn unknown_created_filter_is_rejected() {
    let app = support::make_test_router();
    let (status, body) = send(
        &app,
        empty_request(Method::GET, "/admin/blogs?created=yesterday"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn delete_selected_removes_known_ids() {
    let app = support::make_test_router();
    for title in ["One", "Two", "Three"] {
        create_blog(&app, blog_payload(title, "Ada", "x")).await;
    }

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/admin/blogs/delete",
            &json!({ "ids": [1, 3, 3, 99, -4] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 2);

    let remaining = listing(&app, "/admin/blogs").await;
    assert_eq!(row_titles(&remaining), ["Two"]);
}

#[tokio::test]
async fn delete_selected_requires_a_selection() {
    let app = support::make_test_router();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/admin/blogs/delete", &json!({ "ids": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());
}
