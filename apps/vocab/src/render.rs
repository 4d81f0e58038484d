//! Plain-text view of a submission session.

use client_core::{classify, Accent, SubmissionState};

pub fn render(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Idle => String::new(),
        SubmissionState::Validating { .. } => "Validating...".to_string(),
        SubmissionState::Failed { message } => format!("Error: {message}"),
        SubmissionState::Succeeded { result } => {
            let tier = classify(result.score);
            format!(
                "Score: {score} [{tier} / {accent}]\nLevel: {level}\nSuggestion: {suggestion}\nCorrected sentence: {corrected}",
                score = result.score,
                tier = tier.label(),
                accent = accent_name(tier.accent()),
                level = result.level,
                suggestion = result.suggestion,
                corrected = result.corrected_sentence,
            )
        }
    }
}

fn accent_name(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => "green",
        Accent::Yellow => "yellow",
        Accent::Red => "red",
    }
}
