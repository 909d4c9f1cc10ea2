// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{RegisterUserCommand, SubscribeCommand},
    dto::{InsertReceiptDto, UpdateReceiptDto, UserDto, UserStatsDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
}

pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserRequest>,
) -> HttpResult<Json<InsertReceiptDto>> {
    let command = RegisterUserCommand {
        email: payload.email,
        name: payload.name,
    };

    state
        .services
        .user_commands
        .register_user(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(email): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(&email)
        .await
        .into_http()
        .map(Json)
}

pub async fn user_stats(Extension(state): Extension<HttpState>) -> HttpResult<Json<UserStatsDto>> {
    state
        .services
        .user_queries
        .user_stats()
        .await
        .into_http()
        .map(Json)
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Path((email, plan)): Path<(String, String)>,
) -> HttpResult<Json<UpdateReceiptDto>> {
    state
        .services
        .user_commands
        .subscribe(SubscribeCommand { email, plan })
        .await
        .into_http()
        .map(Json)
}
