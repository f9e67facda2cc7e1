use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::comparison::models::ComparisonResult;
use crate::comparison::rating::Verdict;

/// One row of `gpt_responses`. Column names are camelCase in the table and
/// in the JSON returned by `/api/results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct StoredRecord {
    pub question_id: Option<String>,
    pub tag: Option<String>,
    pub model: Option<String>,
    pub full_message: Option<String>,
    pub answer1: Option<String>,
    pub rating_answer1: Option<i32>,
    pub explanation_for_rating1: Option<String>,
    pub answer2: Option<String>,
    pub rating_answer2: Option<i32>,
    pub explanation_for_rating2: Option<String>,
    pub answer3: Option<String>,
    pub rating_answer3: Option<i32>,
    pub explanation_for_rating3: Option<String>,
    pub result: Option<String>,
}

impl StoredRecord {
    /// Maps a validated comparison onto the table's columns. `question` is
    /// stored as `fullMessage`; ratings are truncated to whole numbers.
    pub fn from_comparison(comparison: &ComparisonResult, verdict: Option<Verdict>) -> Self {
        Self {
            question_id: Some(comparison.question_id.clone()),
            tag: Some(comparison.tag.clone()),
            model: Some(comparison.model.clone()),
            full_message: Some(comparison.question.clone()),
            answer1: Some(comparison.answer1.clone()),
            rating_answer1: to_column_int(comparison.rating_answer1),
            explanation_for_rating1: Some(comparison.explanation_for_rating1.clone()),
            answer2: Some(comparison.answer2.clone()),
            rating_answer2: to_column_int(comparison.rating_answer2),
            explanation_for_rating2: Some(comparison.explanation_for_rating2.clone()),
            answer3: Some(comparison.answer3.clone()),
            rating_answer3: to_column_int(comparison.rating_answer3),
            explanation_for_rating3: Some(comparison.explanation_for_rating3.clone()),
            result: verdict.map(|v| v.as_str().to_string()),
        }
    }
}

fn to_column_int(rating: Option<f64>) -> Option<i32> {
    rating
        .filter(|r| r.is_finite() && *r >= i32::MIN as f64 && *r <= i32::MAX as f64)
        .map(|r| r.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> ComparisonResult {
        ComparisonResult {
            question_id: "77".to_string(),
            question: "Title, Body".to_string(),
            tag: "go".to_string(),
            model: "gpt-4".to_string(),
            answer1: "a1".to_string(),
            answer2: "a2".to_string(),
            answer3: "a3".to_string(),
            better_question: "1".to_string(),
            why_better: "because".to_string(),
            rating_answer1: Some(8.0),
            explanation_for_rating1: "e1".to_string(),
            rating_answer2: Some(6.7),
            explanation_for_rating2: "e2".to_string(),
            rating_answer3: None,
            explanation_for_rating3: "e3".to_string(),
        }
    }

    #[test]
    fn test_question_stored_as_full_message() {
        let record = StoredRecord::from_comparison(&comparison(), Some(Verdict::Good));
        assert_eq!(record.full_message.as_deref(), Some("Title, Body"));
        assert_eq!(record.result.as_deref(), Some("good"));
    }

    #[test]
    fn test_ratings_truncated_and_nullable() {
        let record = StoredRecord::from_comparison(&comparison(), None);
        assert_eq!(record.rating_answer1, Some(8));
        assert_eq!(record.rating_answer2, Some(6));
        assert_eq!(record.rating_answer3, None);
        assert_eq!(record.result, None);
    }

    #[test]
    fn test_serializes_with_column_names() {
        let record = StoredRecord::from_comparison(&comparison(), Some(Verdict::Mid));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["questionId"], "77");
        assert_eq!(value["fullMessage"], "Title, Body");
        assert_eq!(value["ratingAnswer1"], 8);
        assert_eq!(value["explanationForRating3"], "e3");
        assert_eq!(value["result"], "mid");
    }
}
