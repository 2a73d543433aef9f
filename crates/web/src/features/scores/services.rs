use sqlx::SqlitePool;
use storage::{error::Result, models::Score, repository::score::ScoreRepository};

/// List all scores
pub async fn list_scores(pool: &SqlitePool) -> Result<Vec<Score>> {
    let repo = ScoreRepository::new(pool);
    repo.list().await
}

/// Record a validated score
pub async fn create_score(pool: &SqlitePool, score: &Score) -> Result<i64> {
    let repo = ScoreRepository::new(pool);
    repo.insert(score).await
}

/// Replace a validated score, `false` when its ID is unknown
pub async fn update_score(pool: &SqlitePool, score: &Score) -> Result<bool> {
    let repo = ScoreRepository::new(pool);
    repo.update(score).await
}
