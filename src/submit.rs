//! Contact form submission controller
//!
//! One submission attempt = revalidate every field, and only if all pass,
//! issue exactly one POST and map its outcome to one of two fixed user
//! messages. The controller holds the in-flight guard: a trigger that arrives
//! while a prior request has not settled is refused without touching the form.

use crate::api::PortalApi;
use crate::state::ContactForm;

/// Message shown when the endpoint accepts the submission
pub const SUBMIT_SUCCESS_MSG: &str = "Form submitted successfully!";
/// Message shown for rejection, transport failure, or a bad response body
pub const SUBMIT_FAILURE_MSG: &str = "Failed to submit form.";

/// Controller phase: at most one submission may be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Terminal outcome of a settled submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(String),
    Failure(String),
}

impl SubmissionResult {
    pub fn message(&self) -> &str {
        match self {
            SubmissionResult::Success(msg) | SubmissionResult::Failure(msg) => msg,
        }
    }
}

/// What happened to one submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was issued. The field markers are the
    /// only observable effect.
    Rejected,
    /// A prior submission has not settled yet; this trigger was dropped.
    InFlight,
    /// A request was issued and settled.
    Settled(SubmissionResult),
}

/// Drives submission attempts against the portal API
#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: SubmitPhase,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Run one submission attempt. Awaiting the request is the single
    /// suspension point; the phase stays `Submitting` until it settles.
    pub async fn submit<A: PortalApi + ?Sized>(
        &mut self,
        form: &mut ContactForm,
        api: &mut A,
    ) -> SubmitOutcome {
        if self.phase == SubmitPhase::Submitting {
            tracing::warn!("submit trigger ignored: a submission is already in flight");
            return SubmitOutcome::InFlight;
        }

        // Fresh recompute of every field; stale markers are never trusted.
        if !form.validate_all() {
            return SubmitOutcome::Rejected;
        }

        self.phase = SubmitPhase::Submitting;
        let payload = form.payload();
        let result = match api.submit_contact(&payload).await {
            Ok(ack) if ack.accepted() => {
                SubmissionResult::Success(SUBMIT_SUCCESS_MSG.to_string())
            }
            Ok(_) => {
                tracing::warn!("submission rejected by the server");
                SubmissionResult::Failure(SUBMIT_FAILURE_MSG.to_string())
            }
            Err(err) => {
                tracing::error!("error submitting form: {err:#}");
                SubmissionResult::Failure(SUBMIT_FAILURE_MSG.to_string())
            }
        };
        self.phase = SubmitPhase::Idle;

        SubmitOutcome::Settled(result)
    }
}
