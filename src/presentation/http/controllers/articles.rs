// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeclineArticleCommand, SubmitArticleCommand},
    dto::{ArticleDto, ArticleStatsDto, Page},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitArticleRequest {
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineRequest {
    pub decline_message: String,
}

pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubmitArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SubmitArticleCommand {
        title: payload.title,
        body: payload.body,
        writer_email: payload.writer_email,
        publisher: payload.publisher,
        is_premium: payload.is_premium,
    };

    state
        .services
        .article_commands
        .submit_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_approved(ListArticlesQuery {
            page: params.page,
            title: params.title,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn admin_list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_all(params.page)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn trending(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .trending()
        .await
        .into_http()
        .map(Json)
}

pub async fn premium_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .premium_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn my_articles(
    Extension(state): Extension<HttpState>,
    Path(email): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .articles_by_writer(&email)
        .await
        .into_http()
        .map(Json)
}

pub async fn article_stats(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleStatsDto>> {
    state
        .services
        .article_queries
        .article_stats()
        .await
        .into_http()
        .map(Json)
}

pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .approve_article(id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "approved" })))
}

pub async fn decline_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<DeclineRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .decline_article(DeclineArticleCommand {
            id,
            message: payload.decline_message,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "declined" })))
}

pub async fn toggle_premium(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .toggle_premium(id)
        .await
        .into_http()
        .map(Json)
}
