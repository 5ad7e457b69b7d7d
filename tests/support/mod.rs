#![allow(dead_code)]

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use todoz::api::TodoApi;
use todoz::server::{build_router, AppState};
use todoz::store::fs::FileStore;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_BODY_LIMIT: usize = 16 * 1024;

/// Serve `router` on an ephemeral loopback port and return its address.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// The real todo service backed by `data_file`.
pub async fn spawn_todo_service(data_file: &std::path::Path) -> String {
    let state = AppState::new(TodoApi::new(FileStore::new(data_file)));
    let addr = spawn(build_router(state, TEST_BODY_LIMIT)).await;
    format!("http://{}", addr)
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

fn user(id: u64, first: &str, last: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": email,
        "avatar": format!("https://img.example/{}.jpg", id),
    })
}

async fn users(headers: HeaderMap, Query(query): Query<PageQuery>) -> Response {
    let key = headers.get("x-api-key").and_then(|v| v.to_str().ok());
    if key != Some(TEST_API_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Missing API key" })))
            .into_response();
    }

    let page = query.page.unwrap_or(1);
    let data = match page {
        1 => vec![
            user(1, "Bob", "Stone", "b@x.com"),
            user(2, "Amy", "Reed", "a@y.com"),
        ],
        2 => vec![user(3, "Cara", "Lind", "c@x.com")],
        _ => vec![],
    };
    Json(json!({ "page": page, "total_pages": 2, "data": data })).into_response()
}

async fn broken() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/json")],
        "{\"data\": [",
    )
        .into_response()
}

async fn sparse() -> Response {
    Json(json!({ "page": 1 })).into_response()
}

/// Local stand-in for the remote user directory:
///
/// - `/api/users`: two pages, requires `x-api-key: test-key`
/// - `/api/broken`: 200 with a truncated JSON body
/// - `/api/sparse`: 200 with neither `data` nor `total_pages`
pub async fn spawn_fake_users_api() -> String {
    let router = Router::new()
        .route("/api/users", get(users))
        .route("/api/broken", get(broken))
        .route("/api/sparse", get(sparse));
    let addr = spawn(router).await;
    format!("http://{}", addr)
}
