//! Inputs to the submission reducer and the effects it asks for.

use shared::protocol::ValidationResult;

use crate::{error::ValidationError, validator::ValidationRequest};

/// Tags one dispatched request so its completion can be matched to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

pub type Outcome = Result<ValidationResult, ValidationError>;

#[derive(Debug, Clone)]
pub enum Event {
    Submit {
        ticket: RequestTicket,
        word_id: String,
        sentence: String,
    },
    Completed {
        ticket: RequestTicket,
        outcome: Outcome,
    },
    InputEdited,
}

/// The one side effect the reducer can emit: send this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: RequestTicket,
    pub request: ValidationRequest,
}
