use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;

/// Request payload for creating a new user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(length(min = 1, message = "firstname can not be blank"))]
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    /// The record as stored once the insert assigned `id`.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            active: 1,
        }
    }
}
