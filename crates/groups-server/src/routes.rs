use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::handlers::{groups as group_handlers, users as user_handlers};
use crate::services::{GroupService, UserService};
use crate::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub groups: GroupService,
    pub users: UserService,
}

pub fn create_router(db: DbPool) -> Router {
    let state = AppState {
        groups: GroupService::new(db.clone()),
        users: UserService::new(db),
    };

    let group_routes = Router::new()
        .route("/", get(group_handlers::index))
        .route("/Index", get(group_handlers::index))
        .route("/Details/:id", get(group_handlers::details))
        .route(
            "/Create",
            get(group_handlers::create_form).post(group_handlers::create),
        )
        .route("/Edit/:id", get(group_handlers::edit_form))
        .route("/Edit", post(group_handlers::edit))
        .route("/Delete/:id", get(group_handlers::delete));

    let user_routes = Router::new()
        .route("/", get(user_handlers::index))
        .route("/Index", get(user_handlers::index))
        .route("/Details/:id", get(user_handlers::details))
        .route(
            "/Create",
            get(user_handlers::create_form).post(user_handlers::create),
        )
        .route("/Edit/:id", get(user_handlers::edit_form))
        .route("/Edit", post(user_handlers::edit))
        .route("/Delete/:id", get(user_handlers::delete));

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .nest("/Group", group_routes)
        .nest("/User", user_routes)
        .fallback(not_found)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn home() -> Redirect {
    Redirect::to("/Group")
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> AppError {
    AppError::NotFound
}
