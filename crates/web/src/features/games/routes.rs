use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_game, get_game, list_games};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/games", get(list_games))
        .route("/game", post(create_game))
        .route("/game/:id", get(get_game))
}
