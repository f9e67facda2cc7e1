//! Checks applied to the raw text a model returns for a comparison prompt.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::comparison::models::{value_to_rating, value_to_text, ComparisonResult};

/// Keys the model must echo back. `result` is derived locally and not listed.
pub const REQUIRED_KEYS: [&str; 15] = [
    "questionId",
    "tag",
    "model",
    "question",
    "answer1",
    "answer2",
    "answer3",
    "better_question",
    "why_better",
    "rating_Answer1",
    "explanation_for_rating1",
    "rating_Answer2",
    "explanation_for_rating2",
    "rating_Answer3",
    "explanation_for_rating3",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response is missing keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

/// True when `text` is any well-formed JSON document, objects or not.
pub fn is_parsable_json(text: &str) -> bool {
    serde_json::from_str::<Value>(text).is_ok()
}

/// Presence-only shape check: every required key exists, whatever its value.
pub fn has_required_shape(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => REQUIRED_KEYS.iter().all(|key| obj.contains_key(*key)),
        None => false,
    }
}

fn missing_keys(obj: &Map<String, Value>) -> Vec<String> {
    REQUIRED_KEYS
        .iter()
        .filter(|key| !obj.contains_key(**key))
        .map(|key| key.to_string())
        .collect()
}

impl ComparisonResult {
    /// Parses a model answer into a typed result, reporting every missing key.
    /// Values are not range-checked; a non-numeric rating becomes `None`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing = missing_keys(obj);
        if !missing.is_empty() {
            return Err(ValidationError::MissingKeys(missing));
        }

        let text = |key: &str| value_to_text(&obj[key]);
        let rating = |key: &str| value_to_rating(&obj[key]);

        Ok(ComparisonResult {
            question_id: text("questionId"),
            question: text("question"),
            tag: text("tag"),
            model: text("model"),
            answer1: text("answer1"),
            answer2: text("answer2"),
            answer3: text("answer3"),
            better_question: text("better_question"),
            why_better: text("why_better"),
            rating_answer1: rating("rating_Answer1"),
            explanation_for_rating1: text("explanation_for_rating1"),
            rating_answer2: rating("rating_Answer2"),
            explanation_for_rating2: text("explanation_for_rating2"),
            rating_answer3: rating("rating_Answer3"),
            explanation_for_rating3: text("explanation_for_rating3"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_answer() -> Value {
        json!({
            "questionId": "101",
            "question": "How to sort?, Need a stable sort.",
            "tag": "rust",
            "model": "gpt-4",
            "answer1": "use sort()",
            "answer2": "use sort_unstable()",
            "answer3": "write quicksort",
            "better_question": "1",
            "why_better": "stable and idiomatic",
            "rating_Answer1": "9",
            "explanation_for_rating1": "correct",
            "rating_Answer2": 6,
            "explanation_for_rating2": "not stable",
            "rating_Answer3": "low",
            "explanation_for_rating3": "reinvents the wheel"
        })
    }

    #[test]
    fn test_parsable_json_accepts_any_document() {
        assert!(is_parsable_json(r#"{"a": 1}"#));
        assert!(is_parsable_json("5"));
        assert!(is_parsable_json("\"text\""));
        assert!(is_parsable_json("[1, 2]"));
    }

    #[test]
    fn test_parsable_json_rejects_malformed() {
        assert!(!is_parsable_json(r#"{"questionId": "1", "tag": "ru"#));
        assert!(!is_parsable_json("Sure! Here is the JSON:"));
        assert!(!is_parsable_json(""));
    }

    #[test]
    fn test_shape_requires_every_key() {
        let full = complete_answer();
        assert!(has_required_shape(&full));

        for key in REQUIRED_KEYS {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(key);
            assert!(!has_required_shape(&partial), "{key} should be required");
        }
    }

    #[test]
    fn test_shape_ignores_value_types() {
        let mut nonsense = serde_json::Map::new();
        for key in REQUIRED_KEYS {
            nonsense.insert(key.to_string(), Value::Null);
        }
        assert!(has_required_shape(&Value::Object(nonsense)));
    }

    #[test]
    fn test_shape_rejects_non_objects() {
        assert!(!has_required_shape(&json!(5)));
        assert!(!has_required_shape(&json!(["questionId"])));
    }

    #[test]
    fn test_from_value_coerces_ratings() {
        let result = ComparisonResult::from_value(&complete_answer()).unwrap();
        assert_eq!(result.ratings(), [Some(9.0), Some(6.0), None]);
        assert_eq!(result.question_id, "101");
        assert_eq!(result.model, "gpt-4");
    }

    #[test]
    fn test_from_value_lists_missing_keys() {
        let mut answer = complete_answer();
        let obj = answer.as_object_mut().unwrap();
        obj.remove("why_better");
        obj.remove("rating_Answer3");

        let err = ComparisonResult::from_value(&answer).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingKeys(vec![
                "why_better".to_string(),
                "rating_Answer3".to_string()
            ])
        );
        assert_eq!(
            err.to_string(),
            "response is missing keys: why_better, rating_Answer3"
        );
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        assert_eq!(
            ComparisonResult::from_value(&json!("5")),
            Err(ValidationError::NotAnObject)
        );
    }
}
