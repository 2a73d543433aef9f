use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_user, get_user, list_users};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route("/user/:id", get(get_user))
}
