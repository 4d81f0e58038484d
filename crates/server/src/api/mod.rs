use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json};
use shared::{
    domain::WordId,
    error::ErrorBody,
    protocol::{ValidateSentenceRequest, ValidationResult, VocabularyEntry},
};
use tracing::info;

use crate::{scoring::assess, vocabulary::VocabularyCatalog};

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<VocabularyCatalog>,
}

/// A rejected request, answered as `{ "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiFailure {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorBody::new(self.detail))).into_response()
    }
}

pub fn validate_sentence(
    ctx: &ApiContext,
    request: &ValidateSentenceRequest,
) -> Result<ValidationResult, ApiFailure> {
    if request.sentence.trim().is_empty() {
        return Err(ApiFailure::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Sentence must not be empty",
        ));
    }

    let entry = lookup(ctx, request.word_id)?;
    let result = assess(&request.sentence, &entry.word, entry.difficulty_level);
    info!(
        word_id = request.word_id.0,
        word = %entry.word,
        score = result.score,
        "sentence scored"
    );
    Ok(result)
}

pub fn vocabulary_entry(ctx: &ApiContext, word_id: WordId) -> Result<VocabularyEntry, ApiFailure> {
    lookup(ctx, word_id).cloned()
}

fn lookup(ctx: &ApiContext, word_id: WordId) -> Result<&VocabularyEntry, ApiFailure> {
    ctx.catalog.get(word_id).ok_or_else(|| {
        ApiFailure::new(
            StatusCode::NOT_FOUND,
            format!("Vocabulary word with id {word_id} not found"),
        )
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
