//! Pre-network checks on raw form input.

use shared::{domain::WordId, protocol::ValidateSentenceRequest};

use crate::error::ValidationError;

/// A submission that passed [`validate`]. There is no other way to build one,
/// so the transport never serializes unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    word_id: WordId,
    sentence: String,
}

impl ValidationRequest {
    pub fn word_id(&self) -> WordId {
        self.word_id
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn to_wire(&self) -> ValidateSentenceRequest {
        ValidateSentenceRequest {
            word_id: self.word_id,
            sentence: self.sentence.clone(),
        }
    }
}

/// Validates raw field values. The sentence check runs first; the first failure wins.
pub fn validate(word_id: &str, sentence: &str) -> Result<ValidationRequest, ValidationError> {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        return Err(ValidationError::EmptySentence);
    }

    let word_id = parse_word_id(word_id).ok_or(ValidationError::InvalidWordId)?;

    Ok(ValidationRequest {
        word_id,
        sentence: sentence.to_string(),
    })
}

fn parse_word_id(raw: &str) -> Option<WordId> {
    let raw = raw.trim();
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            // Numeric form fields hand back values like "3.0".
            let value = raw.parse::<f64>().ok()?;
            if !value.is_finite() || value.fract() != 0.0 || value >= i64::MAX as f64 {
                return None;
            }
            value as i64
        }
    };

    (value >= 1).then_some(WordId(value))
}
