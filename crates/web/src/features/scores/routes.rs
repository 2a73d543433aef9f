use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_score, list_scores, update_score};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/scores", get(list_scores))
        .route("/score", post(create_score).put(update_score))
}
