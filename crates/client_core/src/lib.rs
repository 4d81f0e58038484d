//! Client side of sentence scoring: input validation, the single-flight
//! submission controller, score classification and the HTTP transport.

pub mod classifier;
pub mod config;
pub mod controller;
pub mod error;
pub mod transport;
pub mod validator;

pub use classifier::{classify, Accent, Tier};
pub use config::{load_settings_from, ClientSettings};
pub use controller::{
    events::{Dispatch, Outcome, RequestTicket},
    reducer::SubmissionState,
    RequestController,
};
pub use error::ValidationError;
pub use shared::protocol::ValidationResult;
pub use transport::{HttpScoringService, ScoringService};
pub use validator::{validate, ValidationRequest};
