// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, publishers, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, patch, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    // permissive cross-origin access for every route, as the original had
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/newpublisher", post(publishers::register_publisher))
        .route("/publishers", get(publishers::list_publishers))
        .route("/publication-stats", get(publishers::publication_stats))
        .route("/article", post(articles::submit_article))
        .route("/articles", get(articles::list_articles))
        .route("/adminallarticles", get(articles::admin_list_articles))
        .route("/articles/{id}", get(articles::get_article))
        .route("/trending", get(articles::trending))
        .route("/premium-articles", get(articles::premium_articles))
        .route("/myarticles/{email}", get(articles::my_articles))
        .route("/articlestats", get(articles::article_stats))
        .route("/approve-article/{id}", patch(articles::approve_article))
        .route("/decline-article/{id}", patch(articles::decline_article))
        .route("/toggle-premium/{id}", patch(articles::toggle_premium))
        .route("/users", get(users::list_users).post(users::register_user))
        .route("/user/{email}", get(users::get_user))
        .route("/userstats", get(users::user_stats))
        .route("/subscribe/{email}/{plan}", patch(users::subscribe))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
