#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use groups_server::{db, routes::create_router, DbPool};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DbPool,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = db::create_pool("sqlite::memory:", 1).await.unwrap();
        db::run_migrations(&db).await.unwrap();
        Self {
            router: create_router(db.clone()),
            db,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db)
            .await
            .unwrap();
        count
    }

    pub async fn insert_group(&self, title: &str) -> i64 {
        sqlx::query("INSERT INTO groups (title) VALUES (?1)")
            .bind(title)
            .execute(&self.db)
            .await
            .unwrap()
            .last_insert_rowid()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// The full `Set-Cookie` header `response` sends for the flash cookie.
pub fn flash_set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap())
        .find(|value| value.starts_with("flash="))
        .unwrap()
        .to_string()
}

/// The `name=value` pair of the flash cookie set by `response`.
pub fn flash_cookie(response: &Response<Body>) -> String {
    let set_cookie = flash_set_cookie(response);
    match set_cookie.split_once(';') {
        Some((pair, _)) => pair.to_string(),
        None => set_cookie,
    }
}

pub fn assert_redirect(response: &Response<Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), target);
}
