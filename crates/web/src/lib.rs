use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;
pub mod routes;

use features::{games, scores, users};

#[derive(OpenApi)]
#[openapi(
    paths(
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        games::handlers::list_games,
        games::handlers::get_game,
        games::handlers::create_game,
        scores::handlers::list_scores,
        scores::handlers::create_score,
        scores::handlers::update_score,
    ),
    components(
        schemas(
            storage::dto::user::CreateUserRequest,
            storage::dto::game::CreateGameRequest,
            storage::models::User,
            storage::models::Game,
            storage::models::Score,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "users", description = "Player endpoints"),
        (name = "games", description = "Game endpoints"),
        (name = "scores", description = "Score endpoints"),
    )
)]
pub struct ApiDoc;
