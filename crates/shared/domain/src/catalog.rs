//! Logistics inventory and psychometric test records.
//!
//! These rows are loaded by the seeder; each carries a natural key used to
//! skip rows that already exist.

use serde::{Deserialize, Serialize};

/// Stocked item that staff can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsItem {
    /// Natural key
    pub sku: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Fulfilled => "fulfilled",
        }
    }
}

/// A staff request against an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsRequest {
    /// Natural key
    pub reference: String,
    pub item_sku: String,
    pub requested_by: String,
    pub quantity: i32,
    pub status: RequestStatus,
    pub reason: Option<String>,
}

/// A psychometric assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychometricTest {
    /// Natural key
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    Likert,
    FreeText,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single_choice",
            QuestionType::Likert => "likert",
            QuestionType::FreeText => "free_text",
        }
    }
}

/// One question of a psychometric test, keyed by `(test_slug, position)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychometricQuestion {
    pub test_slug: String,
    pub position: i32,
    pub prompt: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
}
