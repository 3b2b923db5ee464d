//! Server-computed response statistics consumed by the results viewer.
//!
//! All aggregation happens on the backend; these types only carry the
//! precomputed figures.

use std::collections::HashMap;

use opina_types::ItemKind;
use serde::Deserialize;

use crate::wire;

/// Aggregated statistics over all submitted answer batches of a company.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total number of submitted answers.
    pub total_responses: u64,

    /// Mean over all scale answers.
    pub average_satisfaction: f64,

    /// Per-question breakdown, in questionnaire order.
    pub question_statistics: Vec<QuestionStatistics>,

    /// Submission volume per calendar day.
    pub responses_by_date: Vec<DailyCount>,

    /// Number of free-text answers.
    pub text_responses_count: u64,

    /// Number of scale answers.
    pub scale_responses_count: u64,
}

/// Aggregates for one questionnaire item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStatistics {
    /// The item this row aggregates.
    pub form_id: String,

    /// The question text, denormalized for display.
    pub question: String,

    /// The kind of question this row aggregates.
    #[serde(deserialize_with = "wire::item_kind_from_wire")]
    pub question_type: ItemKind,

    pub total_responses: u64,
    pub scale_responses: u64,
    pub text_responses: u64,

    /// Mean scale value; 0 for text-only questions.
    pub average: f64,

    /// Count per selected scale value.
    #[serde(default)]
    pub distribution: HashMap<u8, u64>,

    /// The individual free-text answers.
    #[serde(default)]
    pub text_responses_list: Vec<TextResponseEntry>,
}

/// One free-text answer in the statistics feed.
#[derive(Debug, Clone, Deserialize)]
pub struct TextResponseEntry {
    pub id: String,
    pub response: String,
    pub created_at: String,
}

/// Submission count for one calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

/// Every answer of one submitted batch, for the results drill-down.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponses {
    /// When the batch was submitted.
    pub session_date: String,

    /// The answers, in questionnaire order.
    pub responses: Vec<SessionAnswer>,
}

/// One answer within a session drill-down.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnswer {
    /// The question text, denormalized for display.
    pub question: String,

    #[serde(deserialize_with = "wire::item_kind_from_wire")]
    pub question_type: ItemKind,

    /// The rating, for scale questions.
    #[serde(default)]
    pub scale_value: Option<u8>,

    /// The opinion text, for free-text questions.
    #[serde(default)]
    pub text_response: Option<String>,
}
