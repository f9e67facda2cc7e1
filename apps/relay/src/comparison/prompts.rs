//! Prompt construction for the answer comparison endpoint.
//!
//! Wording and line order of the template are fixed, since rows already in
//! `gpt_responses` were produced with it. Whitespace is normalized: lines
//! carry no leading indentation or trailing spaces.

use crate::comparison::models::{interpolate, QaPayload};

/// Builds the exact system prompt sent upstream for a comparison.
///
/// The model is asked to echo the payload back inside a flat JSON object,
/// filling in its choice, reasoning and a 1-10 rating per answer.
pub fn build_comparison_prompt(payload: &QaPayload, model: &str) -> String {
    let question_id = interpolate(payload.question_id.as_ref());
    let title = interpolate(payload.question_title.as_ref());
    let text = interpolate(payload.question_text.as_ref());
    let tag = interpolate(payload.tag.as_ref());
    let answer1 = interpolate(payload.max_score_answer_content.as_ref());
    let answer2 = interpolate(payload.closest_answer_content.as_ref());
    let answer3 = interpolate(payload.min_score_answer_content.as_ref());

    format!(
        r#"I have this question: {title}, {text}.
And I have these three answers from Stack Overflow:
1. code number 1 - {answer1},
2. code number 2 - {answer2},
3. code number 3 - {answer3}.

Tell me which of these three answers best answers the question I provided and explain why. Also, rate each answer on a scale of 1-10 with a brief explanation for each rating. Ensure that the answer does address the question and not just based on the level of extraction.

Respond ONLY in JSON format as follows (do not nest any fields):

{{
    "questionId": "{question_id}",
    "question": "{title}, {text}",
    "tag": "{tag}",
    "model": "{model}",
    "answer1": "{answer1}",
    "answer2": "{answer2}",
    "answer3": "{answer3}",
    "better_question": "{{answer}}",
    "why_better": "{{explanation}}",
    "rating_Answer1": "{{rating}}",
    "explanation_for_rating1": "{{explanation}}",
    "rating_Answer2": "{{rating}}",
    "explanation_for_rating2": "{{explanation}}",
    "rating_Answer3": "{{rating}}",
    "explanation_for_rating3": "{{explanation}}"
}}"#
    )
}
