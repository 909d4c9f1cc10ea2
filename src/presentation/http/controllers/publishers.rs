// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::RegisterPublisherCommand,
    dto::{InsertReceiptDto, PublicationStatsDto, PublisherDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterPublisherRequest {
    pub name: String,
    /// Anything beyond the name (logo etc.) rides along untouched.
    #[serde(flatten)]
    pub metadata: serde_json::Value,
}

pub async fn register_publisher(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterPublisherRequest>,
) -> HttpResult<Json<InsertReceiptDto>> {
    let command = RegisterPublisherCommand {
        name: payload.name,
        metadata: payload.metadata,
    };

    state
        .services
        .publisher_commands
        .register_publisher(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers()
        .await
        .into_http()
        .map(Json)
}

pub async fn publication_stats(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublicationStatsDto>>> {
    state
        .services
        .publisher_queries
        .publication_stats()
        .await
        .into_http()
        .map(Json)
}
