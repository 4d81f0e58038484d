//! Deterministic mock of the sentence scoring engine.

use shared::{domain::DifficultyLevel, protocol::ValidationResult};

const MISSING_WORD_SCORE: f64 = 30.0;
const MINOR_CORRECTION_THRESHOLD: f64 = 70.0;
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

pub fn assess(sentence: &str, word: &str, level: DifficultyLevel) -> ValidationResult {
    let sentence = sentence.trim();

    if !sentence.to_lowercase().contains(&word.to_lowercase()) {
        return ValidationResult {
            score: MISSING_WORD_SCORE,
            level: level.to_string(),
            suggestion: format!(
                "The word '{word}' is not found in your sentence. Please use it correctly."
            ),
            corrected_sentence: format!("Try using '{word}' in your sentence."),
        };
    }

    let (score, suggestion) = band(level, sentence.split_whitespace().count());
    let mut suggestion = suggestion.to_string();
    let mut corrected_sentence = sentence.to_string();

    if score > MINOR_CORRECTION_THRESHOLD && needs_minor_correction(sentence) {
        corrected_sentence = polish(sentence);
        suggestion.push_str(" Just a minor correction needed.");
    }

    ValidationResult {
        score: round2(score),
        level: level.to_string(),
        suggestion,
        corrected_sentence,
    }
}

/// Score and feedback by sentence length, relative to what each level expects.
fn band(level: DifficultyLevel, words: usize) -> (f64, &'static str) {
    match level {
        DifficultyLevel::Beginner => match words {
            5..=10 => (87.5, "Great job! Your sentence is clear and simple."),
            0..=4 => (
                67.5,
                "Good start! Try to make your sentence a bit longer and more descriptive.",
            ),
            _ => (
                77.5,
                "Good work! For beginner level, try to keep sentences simpler.",
            ),
        },
        DifficultyLevel::Intermediate => match words {
            8..=15 => (
                90.0,
                "Excellent! Your sentence shows good complexity and proper word usage.",
            ),
            0..=7 => (
                72.5,
                "Good job! Try adding more detail to match the intermediate level.",
            ),
            _ => (
                82.5,
                "Well done! Just be careful not to make the sentence too complex.",
            ),
        },
        DifficultyLevel::Advanced => match words {
            12.. => (
                91.5,
                "Outstanding! Your sentence demonstrates advanced language proficiency.",
            ),
            8..=11 => (
                77.5,
                "Good effort! For advanced level, try to create more sophisticated sentences.",
            ),
            _ => (
                67.5,
                "Nice try! Advanced level requires more complex sentence structures.",
            ),
        },
    }
}

fn needs_minor_correction(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_lowercase)
        || !sentence.ends_with(TERMINAL_PUNCTUATION)
}

fn polish(sentence: &str) -> String {
    let mut chars = sentence.chars();
    let mut polished: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !polished.ends_with(TERMINAL_PUNCTUATION) {
        polished.push('.');
    }
    polished
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
