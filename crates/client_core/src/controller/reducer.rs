//! Pure state transitions for a submission session.

use shared::protocol::ValidationResult;

use crate::{
    controller::events::{Dispatch, Event, RequestTicket},
    validator::validate,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating {
        ticket: RequestTicket,
    },
    Succeeded {
        result: ValidationResult,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Validating { .. })
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        match self {
            Self::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating { .. } => "validating",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SubmissionState,
    pub effect: Option<Dispatch>,
}

impl Transition {
    fn settle(state: SubmissionState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

pub fn transition(state: &SubmissionState, event: Event) -> Transition {
    match (state, event) {
        (SubmissionState::Validating { .. }, Event::Submit { .. }) => {
            Transition::settle(state.clone())
        }
        (
            _,
            Event::Submit {
                ticket,
                word_id,
                sentence,
            },
        ) => match validate(&word_id, &sentence) {
            Ok(request) => Transition {
                state: SubmissionState::Validating { ticket },
                effect: Some(Dispatch { ticket, request }),
            },
            Err(error) => Transition::settle(SubmissionState::Failed {
                message: error.to_string(),
            }),
        },
        (SubmissionState::Validating { ticket: current }, Event::Completed { ticket, outcome })
            if *current == ticket =>
        {
            Transition::settle(match outcome {
                Ok(result) => SubmissionState::Succeeded { result },
                Err(error) => SubmissionState::Failed {
                    message: error.to_string(),
                },
            })
        }
        // Stale or unsolicited completion.
        (_, Event::Completed { .. }) => Transition::settle(state.clone()),
        (SubmissionState::Failed { .. }, Event::InputEdited) => {
            Transition::settle(SubmissionState::Idle)
        }
        (_, Event::InputEdited) => Transition::settle(state.clone()),
    }
}
