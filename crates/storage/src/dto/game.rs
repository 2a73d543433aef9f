use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Game;

/// Request payload for creating a new game
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGameRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(length(min = 1, message = "Game name can not be blank"))]
    pub name: String,
}

impl CreateGameRequest {
    pub fn into_game(self, id: i64) -> Game {
        Game {
            id,
            name: self.name,
        }
    }
}
