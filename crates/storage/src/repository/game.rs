use sqlx::SqlitePool;

use crate::dto::game::CreateGameRequest;
use crate::error::Result;
use crate::models::Game;

pub struct GameRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GameRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all games
    pub async fn list(&self) -> Result<Vec<Game>> {
        tracing::debug!("listing games");

        let games = sqlx::query_as::<_, Game>("SELECT id, name FROM game ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(games)
    }

    /// Find game by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Game>> {
        tracing::debug!(id, "looking up game");

        let game = sqlx::query_as::<_, Game>("SELECT id, name FROM game WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(game)
    }

    pub async fn create(&self, req: &CreateGameRequest) -> Result<i64> {
        tracing::debug!(name = %req.name, "creating game");

        let result = sqlx::query("INSERT INTO game (name) VALUES (?)")
            .bind(&req.name)
            .execute(self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}
