use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::user::CreateUserRequest, models::User};
use validator::Validate;

use crate::error::{ErrorResponse, WebError, WebResult};
use crate::features::parse_id;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List all users successfully", body = Vec<User>)
    ),
    tag = "users"
)]
pub async fn list_users(State(db): State<Database>) -> WebResult<Response> {
    let users = services::list_users(db.pool()).await?;

    Ok(Json(users).into_response())
}

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 204, description = "No user with this ID"),
        (status = 400, description = "Invalid ID or lookup failure", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id("user", &id)?;

    let user = services::get_user(db.pool(), id)
        .await
        .map_err(|e| WebError::storage("Error while looking up a user", e))?;

    Ok(match user {
        Some(user) => Json(user).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[utoipa::path(
    post,
    path = "/api/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Blank first name or insert failure", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;

    req.validate()?;

    let id = services::create_user(db.pool(), &req)
        .await
        .map_err(|e| WebError::storage("Error while adding a user", e))?;
    tracing::info!(id, "user created");

    Ok((StatusCode::CREATED, Json(req.into_user(id))).into_response())
}
