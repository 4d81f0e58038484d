use serde::{Deserialize, Serialize};

use crate::domain::{DifficultyLevel, WordId};

pub const VALIDATE_SENTENCE_ROUTE: &str = "/api/validate-sentence";

/// Body of `POST /api/validate-sentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSentenceRequest {
    pub word_id: WordId,
    pub sentence: String,
}

/// Successful scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub score: f64,
    pub level: String,
    pub suggestion: String,
    pub corrected_sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: WordId,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    pub difficulty_level: DifficultyLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub docs: String,
    pub api_endpoint: String,
}
