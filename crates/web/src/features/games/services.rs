use sqlx::SqlitePool;
use storage::{
    dto::game::CreateGameRequest, error::Result, models::Game,
    repository::game::GameRepository,
};

/// List all games
pub async fn list_games(pool: &SqlitePool) -> Result<Vec<Game>> {
    let repo = GameRepository::new(pool);
    repo.list().await
}

/// Get game by ID
pub async fn get_game(pool: &SqlitePool, id: i64) -> Result<Option<Game>> {
    let repo = GameRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new game
pub async fn create_game(pool: &SqlitePool, request: &CreateGameRequest) -> Result<i64> {
    let repo = GameRepository::new(pool);
    repo.create(request).await
}
