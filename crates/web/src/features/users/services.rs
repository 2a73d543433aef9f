use sqlx::SqlitePool;
use storage::{
    dto::user::CreateUserRequest, error::Result, models::User,
    repository::user::UserRepository,
};

/// List all users
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

/// Get user by ID
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new user
pub async fn create_user(pool: &SqlitePool, request: &CreateUserRequest) -> Result<i64> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}
