use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::game::CreateGameRequest, models::Game};
use validator::Validate;

use crate::error::{ErrorResponse, WebError, WebResult};
use crate::features::parse_id;

use super::services;

#[utoipa::path(
    get,
    path = "/api/games",
    responses(
        (status = 200, description = "List all games successfully", body = Vec<Game>)
    ),
    tag = "games"
)]
pub async fn list_games(State(db): State<Database>) -> WebResult<Response> {
    let games = services::list_games(db.pool()).await?;

    Ok(Json(games).into_response())
}

#[utoipa::path(
    get,
    path = "/api/game/{id}",
    params(
        ("id" = i64, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game found", body = Game),
        (status = 204, description = "No game with this ID"),
        (status = 400, description = "Invalid ID or lookup failure", body = ErrorResponse)
    ),
    tag = "games"
)]
pub async fn get_game(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id("game", &id)?;

    let game = services::get_game(db.pool(), id)
        .await
        .map_err(|e| WebError::storage("Error while looking up a game", e))?;

    Ok(match game {
        Some(game) => Json(game).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[utoipa::path(
    post,
    path = "/api/game",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created successfully", body = Game),
        (status = 400, description = "Blank name or insert failure", body = ErrorResponse)
    ),
    tag = "games"
)]
pub async fn create_game(
    State(db): State<Database>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;

    req.validate()?;

    let id = services::create_game(db.pool(), &req)
        .await
        .map_err(|e| WebError::storage("Error while adding a game", e))?;
    tracing::info!(id, "game created");

    Ok((StatusCode::CREATED, Json(req.into_game(id))).into_response())
}
