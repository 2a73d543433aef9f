use sqlx::SqlitePool;

use crate::dto::user::CreateUserRequest;
use crate::error::Result;
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>> {
        tracing::debug!("listing users");

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, active
            FROM user
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Find user by ID, `None` when no row matches
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        tracing::debug!(id, "looking up user");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, active
            FROM user
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new active user, returning its generated ID
    pub async fn create(&self, req: &CreateUserRequest) -> Result<i64> {
        tracing::debug!(first_name = %req.first_name, "creating user");

        let result = sqlx::query(
            r#"
            INSERT INTO user (first_name, last_name, active)
            VALUES (?, ?, 1)
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
