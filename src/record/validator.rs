//! Record validator
//!
//! Rules are checked in a fixed order and the first failure wins:
//! title, type, genre, year, status, rating.
//!
//! The validator never mutates its input. A payload that is not a JSON
//! object behaves like an empty object, so it fails on the title check.
//!
//! Year and rating accept integers, integral floats and integer strings.
//! Fractional numbers such as `2020.5` are rejected rather than truncated.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::RecordDraft;

/// Inclusive year bounds
pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2100;

/// Inclusive rating bounds
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 10;

/// Types accepted in strict mode
pub const ALLOWED_TYPES: [&str; 5] = ["Movie", "Show", "Anime", "Book", "Game"];

/// Statuses accepted in strict mode
pub const ALLOWED_STATUSES: [&str; 4] = ["Planned", "Watching", "Completed", "Dropped"];

/// Turns untyped request payloads into record drafts.
///
/// The default validator accepts any non-empty type and status. Strict mode
/// additionally restricts them to `ALLOWED_TYPES` and `ALLOWED_STATUSES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    strict_categories: bool,
}

impl Validator {
    /// Create a permissive validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that restricts type and status to the known sets
    pub fn strict() -> Self {
        Self {
            strict_categories: true,
        }
    }

    /// Whether type and status are restricted
    pub fn is_strict(&self) -> bool {
        self.strict_categories
    }

    /// Validates a payload and returns its trimmed, parsed fields.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` in rule order.
    pub fn validate(&self, payload: &Value) -> ValidationResult<RecordDraft> {
        let title = required_text(payload, "title", ValidationError::TitleRequired)?;

        let kind = required_text(payload, "type", ValidationError::TypeRequired)?;
        if self.strict_categories && !ALLOWED_TYPES.contains(&kind.as_str()) {
            return Err(ValidationError::InvalidType);
        }

        let genre = required_text(payload, "genre", ValidationError::GenreRequired)?;

        let year = payload
            .get("year")
            .and_then(parse_whole_number)
            .ok_or(ValidationError::YearNotWholeNumber)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange);
        }

        let status = required_text(payload, "status", ValidationError::StatusRequired)?;
        if self.strict_categories && !ALLOWED_STATUSES.contains(&status.as_str()) {
            return Err(ValidationError::InvalidStatus);
        }

        let rating = match payload.get("rating") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let rating =
                    parse_whole_number(value).ok_or(ValidationError::RatingNotWholeNumber)?;
                if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                    return Err(ValidationError::RatingOutOfRange);
                }
                Some(rating)
            }
        };

        Ok(RecordDraft {
            title,
            kind,
            genre,
            year,
            rating,
            status,
            notes: text(payload, "notes").to_string(),
        })
    }
}

/// Validate with the permissive rule set
pub fn validate(payload: &Value) -> ValidationResult<RecordDraft> {
    Validator::new().validate(payload)
}

/// Trimmed string value of a field; non-strings count as empty
fn text<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
}

fn required_text(
    payload: &Value,
    key: &str,
    missing: ValidationError,
) -> ValidationResult<String> {
    let value = text(payload, key);
    if value.is_empty() {
        return Err(missing);
    }
    Ok(value.to_string())
}

/// Integers, floats without a fractional part, and strings holding an integer
pub(crate) fn parse_whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "A",
            "type": "Movie",
            "genre": "Drama",
            "year": 2020,
            "status": "Planned"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = valid_payload();
        payload[field] = value;
        payload
    }

    fn without(field: &str) -> Value {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    #[test]
    fn test_valid_payload() {
        let draft = validate(&valid_payload()).unwrap();
        assert_eq!(draft.title, "A");
        assert_eq!(draft.kind, "Movie");
        assert_eq!(draft.year, 2020);
        assert_eq!(draft.rating, None);
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let payload = json!({
            "title": "  Spirited Away ",
            "type": " Anime",
            "genre": "Fantasy  ",
            "year": "2001",
            "status": " Completed ",
            "notes": "  loved it  "
        });
        let draft = validate(&payload).unwrap();

        assert_eq!(draft.title, "Spirited Away");
        assert_eq!(draft.kind, "Anime");
        assert_eq!(draft.genre, "Fantasy");
        assert_eq!(draft.year, 2001);
        assert_eq!(draft.status, "Completed");
        assert_eq!(draft.notes, "loved it");
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(validate(&without("title")), Err(ValidationError::TitleRequired));
        assert_eq!(
            validate(&with("title", json!("   "))),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(validate(&without("type")), Err(ValidationError::TypeRequired));
        assert_eq!(validate(&without("genre")), Err(ValidationError::GenreRequired));
        assert_eq!(validate(&without("status")), Err(ValidationError::StatusRequired));
        assert_eq!(
            validate(&with("status", json!(" "))),
            Err(ValidationError::StatusRequired)
        );
    }

    #[test]
    fn test_non_string_text_counts_as_missing() {
        assert_eq!(
            validate(&with("title", json!(42))),
            Err(ValidationError::TitleRequired)
        );
        assert_eq!(
            validate(&with("genre", Value::Null)),
            Err(ValidationError::GenreRequired)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let payload = json!({ "year": "nope", "rating": 99 });
        assert_eq!(validate(&payload), Err(ValidationError::TitleRequired));

        let payload = json!({ "title": "A", "type": "Movie", "genre": "Drama", "year": 1800 });
        assert_eq!(validate(&payload), Err(ValidationError::YearOutOfRange));
    }

    #[test]
    fn test_non_object_payload() {
        assert_eq!(validate(&json!([1, 2])), Err(ValidationError::TitleRequired));
        assert_eq!(validate(&Value::Null), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!(
            validate(&without("year")),
            Err(ValidationError::YearNotWholeNumber)
        );
        assert_eq!(
            validate(&with("year", json!("twenty"))),
            Err(ValidationError::YearNotWholeNumber)
        );
        assert_eq!(
            validate(&with("year", json!(2020.5))),
            Err(ValidationError::YearNotWholeNumber)
        );
        assert_eq!(
            validate(&with("year", json!(true))),
            Err(ValidationError::YearNotWholeNumber)
        );
        assert_eq!(validate(&with("year", json!(2020.0))).unwrap().year, 2020);
        assert_eq!(validate(&with("year", json!(" 1999 "))).unwrap().year, 1999);
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(
            validate(&with("year", json!(1899))),
            Err(ValidationError::YearOutOfRange)
        );
        assert!(validate(&with("year", json!(1900))).is_ok());
        assert!(validate(&with("year", json!(2100))).is_ok());
        assert_eq!(
            validate(&with("year", json!(2101))),
            Err(ValidationError::YearOutOfRange)
        );
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(
            validate(&with("rating", json!(0))),
            Err(ValidationError::RatingOutOfRange)
        );
        assert_eq!(validate(&with("rating", json!(1))).unwrap().rating, Some(1));
        assert_eq!(validate(&with("rating", json!(10))).unwrap().rating, Some(10));
        assert_eq!(
            validate(&with("rating", json!(11))),
            Err(ValidationError::RatingOutOfRange)
        );
        assert_eq!(validate(&with("rating", Value::Null)).unwrap().rating, None);
    }

    #[test]
    fn test_rating_parsing() {
        assert_eq!(
            validate(&with("rating", json!("great"))),
            Err(ValidationError::RatingNotWholeNumber)
        );
        assert_eq!(
            validate(&with("rating", json!(7.5))),
            Err(ValidationError::RatingNotWholeNumber)
        );
        assert_eq!(validate(&with("rating", json!("8"))).unwrap().rating, Some(8));
    }

    #[test]
    fn test_permissive_categories() {
        let mut payload = with("type", json!("Podcast"));
        payload["status"] = json!("Someday");
        let draft = validate(&payload).unwrap();
        assert_eq!(draft.kind, "Podcast");
        assert_eq!(draft.status, "Someday");
    }

    #[test]
    fn test_strict_categories() {
        let validator = Validator::strict();
        assert!(validator.is_strict());
        assert!(validator.validate(&valid_payload()).is_ok());
        assert_eq!(
            validator.validate(&with("type", json!("Podcast"))),
            Err(ValidationError::InvalidType)
        );
        assert_eq!(
            validator.validate(&with("status", json!("Someday"))),
            Err(ValidationError::InvalidStatus)
        );
        // Presence is still checked first
        assert_eq!(
            validator.validate(&with("type", json!(""))),
            Err(ValidationError::TypeRequired)
        );
    }
}
