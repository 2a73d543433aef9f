mod game;
mod score;
mod user;

pub use game::Game;
pub use score::{Score, ScoreValidationError};
pub use user::User;
