//! Questionnaire results attached to a transaction.

use serde::{Deserialize, Serialize};

/// Result of a compliance questionnaire answered during a transaction.
///
/// The questionnaire subsystem owns the shape of this data; this contract
/// only passes it through unchanged, preserving the order of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireResult(pub serde_json::Value);

impl From<serde_json::Value> for QuestionnaireResult {
    fn from(value: serde_json::Value) -> Self {
        QuestionnaireResult(value)
    }
}
