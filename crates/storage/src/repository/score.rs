use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Score;

/// Data access for the `score` table.
///
/// Callers are expected to run [`Score::validate`] before `insert` or
/// `update`; nothing here checks the record.
pub struct ScoreRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all scores
    pub async fn list(&self) -> Result<Vec<Score>> {
        tracing::debug!("listing scores");

        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT id, user_id, game_id, date_played, score
            FROM score
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Insert a new score, returning its generated ID. `score.id` is ignored.
    pub async fn insert(&self, score: &Score) -> Result<i64> {
        tracing::debug!(
            user_id = score.user_id,
            game_id = score.game_id,
            "inserting score"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO score (user_id, game_id, date_played, score)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(score.user_id)
        .bind(score.game_id)
        .bind(&score.date_played)
        .bind(score.score)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace every column of the score with `score.id`.
    ///
    /// Returns `false` when no row has that ID.
    pub async fn update(&self, score: &Score) -> Result<bool> {
        tracing::debug!(id = score.id, "updating score");

        let result = sqlx::query(
            r#"
            UPDATE score
            SET user_id = ?, game_id = ?, date_played = ?, score = ?
            WHERE id = ?
            "#,
        )
        .bind(score.user_id)
        .bind(score.game_id)
        .bind(&score.date_played)
        .bind(score.score)
        .bind(score.id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
