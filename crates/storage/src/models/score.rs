use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

use crate::dto::null_as_default;

const DATE_PLAYED_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const DATE_PLAYED_FORMAT: &str = "%Y-%m-%d";

static DATE_PLAYED_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(DATE_PLAYED_PATTERN));

/// A single result of a user playing a game.
///
/// Every field may be left out of a request body; missing values fall back to
/// zero or the empty string and are then caught by [`Score::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Score {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_id: i64,
    /// `YYYY-MM-DD`; defaults to the current date when empty.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "2020-01-01")]
    pub date_played: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
}

/// Every rule a [`Score`] broke, in the order the rules were checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("\n"))]
pub struct ScoreValidationError {
    messages: Vec<String>,
}

impl ScoreValidationError {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Score {
    /// Checks the record before it is written, filling in today's date when
    /// `date_played` is empty.
    pub fn validate(&mut self) -> Result<(), ScoreValidationError> {
        self.validate_at(Local::now().date_naive())
    }

    /// Same as [`Score::validate`] with `today` used as the default date.
    pub fn validate_at(&mut self, today: NaiveDate) -> Result<(), ScoreValidationError> {
        let mut messages = Vec::new();

        if self.date_played.is_empty() {
            self.date_played = today.format(DATE_PLAYED_FORMAT).to_string();
        } else {
            match &*DATE_PLAYED_RE {
                Ok(re) if re.is_match(&self.date_played) => {}
                Ok(_) => messages
                    .push("Date Played needs to be in the correct format: YYYY-MM-DD".to_string()),
                Err(e) => messages.push(format!(
                    "Unrecoverable error while validating date played information: {e}"
                )),
            }
        }

        if self.game_id == 0 {
            messages.push("Game ID needs to be provided".to_string());
        }

        if self.user_id == 0 {
            messages.push("User ID needs to be provided".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ScoreValidationError { messages })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(user_id: i64, game_id: i64, date_played: &str) -> Score {
        Score {
            id: 123,
            user_id,
            game_id,
            date_played: date_played.to_string(),
            score: 5,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 5, 11).unwrap()
    }

    #[test]
    fn test_valid_score_passes() {
        let mut s = score(123, 123, "2020-01-01");
        assert_eq!(s.validate_at(today()), Ok(()));
        assert_eq!(s.date_played, "2020-01-01");
    }

    #[test]
    fn test_missing_user_id() {
        let err = score(0, 123, "2020-01-01").validate_at(today()).unwrap_err();
        assert!(err.to_string().contains("User ID needs"));
        assert_eq!(err.messages().len(), 1);
    }

    #[test]
    fn test_missing_game_id() {
        let err = score(123, 0, "2020-01-01").validate_at(today()).unwrap_err();
        assert!(err.to_string().contains("Game ID needs"));
        assert_eq!(err.messages().len(), 1);
    }

    #[test]
    fn test_malformed_date() {
        let err = score(123, 123, "20-01-01").validate_at(today()).unwrap_err();
        assert!(err.to_string().contains("Date Played needs"));
    }

    #[test]
    fn test_date_with_trailing_text_is_rejected() {
        let err = score(123, 123, "2020-01-01T10:00")
            .validate_at(today())
            .unwrap_err();
        assert!(err.to_string().contains("Date Played needs"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let err = score(123, 123, "٢٠٢٠-01-01").validate_at(today()).unwrap_err();
        assert!(err.to_string().contains("Date Played needs"));
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        let mut s = score(123, 123, "");
        assert_eq!(s.validate_at(today()), Ok(()));
        assert_eq!(s.date_played, "2021-05-11");
    }

    #[test]
    fn test_validate_uses_current_date() {
        let mut s = score(1, 1, "");
        s.validate().unwrap();
        assert!(DATE_PLAYED_RE.as_ref().unwrap().is_match(&s.date_played));
    }

    #[test]
    fn test_all_failures_are_reported_in_order() {
        let err = score(0, 0, "01/01/2020").validate_at(today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Date Played needs to be in the correct format: YYYY-MM-DD\n\
             Game ID needs to be provided\n\
             User ID needs to be provided"
        );
        assert_eq!(err.messages().len(), 3);
    }

    #[test]
    fn test_null_fields_deserialize_to_defaults() {
        let mut s: Score =
            serde_json::from_str(r#"{"user_id": null, "game_id": 3, "date_played": null}"#)
                .unwrap();
        assert_eq!(s.user_id, 0);
        assert_eq!(s.date_played, "");

        let err = s.validate_at(today()).unwrap_err();
        assert_eq!(err.to_string(), "User ID needs to be provided");
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let s: Score = serde_json::from_str(r#"{"score": 10}"#).unwrap();
        assert_eq!(s, Score { score: 10, ..Score::default() });
    }
}
