use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, models::Score};

use crate::error::{ErrorResponse, WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/scores",
    responses(
        (status = 200, description = "List all scores successfully", body = Vec<Score>)
    ),
    tag = "scores"
)]
pub async fn list_scores(State(db): State<Database>) -> WebResult<Response> {
    let scores = services::list_scores(db.pool()).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    post,
    path = "/api/score",
    request_body = Score,
    responses(
        (status = 201, description = "Score recorded successfully", body = Score),
        (status = 400, description = "Validation or insert failure", body = ErrorResponse)
    ),
    tag = "scores"
)]
pub async fn create_score(
    State(db): State<Database>,
    payload: Result<Json<Score>, JsonRejection>,
) -> WebResult<Response> {
    let Json(mut score) = payload?;

    score.validate()?;

    score.id = services::create_score(db.pool(), &score)
        .await
        .map_err(|e| WebError::storage("Error while adding new score", e))?;
    tracing::info!(id = score.id, "score recorded");

    Ok((StatusCode::CREATED, Json(score)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/score",
    request_body = Score,
    responses(
        (status = 201, description = "Score updated successfully", body = Score),
        (status = 400, description = "Validation or update failure", body = ErrorResponse)
    ),
    tag = "scores"
)]
pub async fn update_score(
    State(db): State<Database>,
    payload: Result<Json<Score>, JsonRejection>,
) -> WebResult<Response> {
    let Json(mut score) = payload?;

    score.validate()?;

    let updated = services::update_score(db.pool(), &score)
        .await
        .map_err(|e| WebError::storage("Error while updating score", e))?;

    if !updated {
        tracing::warn!(id = score.id, "score update matched no row");
    }

    Ok((StatusCode::CREATED, Json(score)).into_response())
}
