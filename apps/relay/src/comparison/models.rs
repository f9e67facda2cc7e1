use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A Stack Overflow question with three candidate answers.
///
/// Fields are loosely typed: exporters send ids as numbers, and missing or
/// null values are interpolated into the prompt rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QaPayload {
    #[serde(default, deserialize_with = "present")]
    pub question_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub question_title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub question_text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub tag: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub max_score_answer_content: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub closest_answer_content: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub min_score_answer_content: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRequest {
    pub message: QaPayload,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
}

/// Keeps an explicit `null` distinct from an absent key: absent stays `None`
/// through `#[serde(default)]`, anything present (null included) is `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The model's structured verdict on the three answers, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub question_id: String,
    pub question: String,
    pub tag: String,
    pub model: String,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
    pub better_question: String,
    pub why_better: String,
    pub rating_answer1: Option<f64>,
    pub explanation_for_rating1: String,
    pub rating_answer2: Option<f64>,
    pub explanation_for_rating2: String,
    pub rating_answer3: Option<f64>,
    pub explanation_for_rating3: String,
}

impl ComparisonResult {
    pub fn ratings(&self) -> [Option<f64>; 3] {
        [self.rating_answer1, self.rating_answer2, self.rating_answer3]
    }
}

/// Renders a JSON scalar the way it reads inside a prompt or a text column:
/// strings without quotes, everything else in its JSON form.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders an optional request field into prompt text. An absent field
/// reads as `undefined`, an explicit null as `null`.
pub fn interpolate(value: Option<&Value>) -> String {
    match value {
        Some(v) => value_to_text(v),
        None => "undefined".to_string(),
    }
}

/// Coerces a rating to a number. Models answer the `"{rating}"` template with
/// either a JSON number or a numeric string.
pub fn value_to_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
