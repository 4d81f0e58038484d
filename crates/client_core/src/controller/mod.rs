//! Submission lifecycle: reducer-driven state plus the single-flight request runner.

pub mod events;
pub mod reducer;

use tracing::{debug, warn};

use crate::{
    error::ValidationError,
    transport::ScoringService,
};

use self::{
    events::{Dispatch, Event, Outcome, RequestTicket},
    reducer::{transition, SubmissionState, Transition},
};

/// Owns the one `SubmissionState` of a session. All mutation goes through
/// [`transition`].
#[derive(Debug, Default)]
pub struct RequestController {
    state: SubmissionState,
    next_ticket: u64,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Returns the request to send, or `None` when the input was rejected or a
    /// request is already in flight.
    pub fn submit(&mut self, word_id: &str, sentence: &str) -> Option<Dispatch> {
        let ticket = RequestTicket(self.next_ticket);
        let dispatch = self.apply(Event::Submit {
            ticket,
            word_id: word_id.to_string(),
            sentence: sentence.to_string(),
        });
        if dispatch.is_some() {
            self.next_ticket += 1;
        }
        dispatch
    }

    pub fn complete(&mut self, ticket: RequestTicket, outcome: Outcome) -> &SubmissionState {
        let error = outcome.as_ref().err().cloned();
        let previous = self.state.name();
        self.apply(Event::Completed { ticket, outcome });
        if let Some(error) = error {
            if previous != self.state.name() {
                debug!(ticket = ticket.0, %error, local = error.is_local(), "submission failed");
            }
        }
        &self.state
    }

    pub fn input_edited(&mut self) {
        self.apply(Event::InputEdited);
    }

    /// Validates, sends and settles one submission.
    ///
    /// If the returned future is dropped mid-flight the session still settles
    /// into `Failed`, so `Validating` never outlives its request.
    pub async fn run(
        &mut self,
        service: &dyn ScoringService,
        word_id: &str,
        sentence: &str,
    ) -> &SubmissionState {
        let Some(Dispatch { ticket, request }) = self.submit(word_id, sentence) else {
            return &self.state;
        };

        let in_flight = InFlight {
            controller: self,
            ticket,
            settled: false,
        };
        let outcome = service.validate(&request).await;
        in_flight.settle(outcome);

        &self.state
    }

    fn apply(&mut self, event: Event) -> Option<Dispatch> {
        let Transition { state, effect } = transition(&self.state, event);
        if state != self.state {
            debug!(from = self.state.name(), to = state.name(), "submission state changed");
        }
        self.state = state;
        effect
    }
}

struct InFlight<'a> {
    controller: &'a mut RequestController,
    ticket: RequestTicket,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Outcome) {
        self.settled = true;
        self.controller.complete(self.ticket, outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(ticket = self.ticket.0, "in-flight submission dropped before completion");
            self.controller
                .complete(self.ticket, Err(ValidationError::Cancelled));
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
