//! Form state tracking and submission gating
//!
//! [`FormState`] owns the draft [`Submission`]. Everything else it exposes
//! (completed fields, completion ratio, whether the form may be sent) is
//! derived from that draft plus the human-verification and in-flight flags.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::client::QuoteClient;
use crate::error::Result;
use crate::submission::{Field, FieldValue, Submission};
use crate::verify::HumanVerifier;
use crate::wire::RelayResponse;

/// Number of fields counted toward completion
pub const TOTAL_REQUIRED_FIELDS: usize = Field::REQUIRED.len();

/// Required fields currently holding a truthy value
pub fn completed_fields(submission: &Submission) -> BTreeSet<Field> {
    Field::REQUIRED
        .iter()
        .copied()
        .filter(|field| field.is_truthy(submission))
        .collect()
}

/// Gates that field-level `required` attributes cannot express.
///
/// Both the submit button and the submit handler go through this.
pub const fn can_submit(human_verified: bool, consent: bool) -> bool {
    human_verified && consent
}

/// Result of one submission round trip, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay delivered the email
    Sent,
    /// The relay answered with a failure; the error text is kept verbatim
    Rejected(String),
    /// The request failed or its response could not be read
    NetworkError,
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Sent => "Form sent successfully!".to_owned(),
            SubmitOutcome::Rejected(error) => format!("Error sending form: {error}"),
            SubmitOutcome::NetworkError => "Network error.".to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

impl From<Result<RelayResponse>> for SubmitOutcome {
    fn from(result: Result<RelayResponse>) -> Self {
        match result {
            Ok(response) if response.success => SubmitOutcome::Sent,
            Ok(response) => SubmitOutcome::Rejected(response.error.unwrap_or_default()),
            Err(e) => {
                warn!("Submission did not reach the relay: {}", e);
                SubmitOutcome::NetworkError
            }
        }
    }
}

/// Draft quote request plus its derived state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    submission: Submission,
    human_verified: bool,
    in_flight: bool,
    completed: BTreeSet<Field>,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft
    pub fn with_submission(submission: Submission) -> Self {
        let completed = completed_fields(&submission);
        Self {
            submission,
            completed,
            ..Self::default()
        }
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn human_verified(&self) -> bool {
        self.human_verified
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Apply one input event
    pub fn update_field(&mut self, field: Field, value: FieldValue) {
        self.submission.set(field, value);
        self.completed = completed_fields(&self.submission);
    }

    pub fn completed_fields(&self) -> &BTreeSet<Field> {
        &self.completed
    }

    pub fn is_completed(&self, field: Field) -> bool {
        self.completed.contains(&field)
    }

    /// Fraction of required fields filled in, within `[0, 1]`
    pub fn completion_ratio(&self) -> f64 {
        self.completed.len() as f64 / TOTAL_REQUIRED_FIELDS as f64
    }

    /// Completion as a whole percentage
    pub fn completion_percent(&self) -> u8 {
        (self.completion_ratio() * 100.0).round() as u8
    }

    /// How many of `steps` progress markers are lit; marker `i` lights once
    /// more than `i * 3` fields are complete.
    pub fn progress_steps(&self, steps: usize) -> usize {
        (0..steps).filter(|i| self.completed.len() > i * 3).count()
    }

    pub fn is_complete(&self) -> bool {
        self.completed.len() == TOTAL_REQUIRED_FIELDS
    }

    /// Record the verifier's verdict on `token`
    pub fn verify_human<V: HumanVerifier + ?Sized>(&mut self, verifier: &V, token: &str) -> bool {
        self.human_verified = verifier.verify(token);
        self.human_verified
    }

    pub fn clear_human_verification(&mut self) {
        self.human_verified = false;
    }

    pub fn can_submit(&self) -> bool {
        can_submit(self.human_verified, self.submission.consent)
    }

    /// Whether the submit control should be enabled
    pub fn submit_enabled(&self) -> bool {
        self.can_submit() && !self.in_flight
    }

    /// Claim the draft for sending.
    ///
    /// Returns `None`, with no side effects, when the gates fail or another
    /// submission is in flight. Otherwise marks the form in flight and hands
    /// back the payload to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.submit_enabled() {
            debug!(
                human_verified = self.human_verified,
                consent = self.submission.consent,
                in_flight = self.in_flight,
                "Submission blocked"
            );
            return None;
        }

        self.in_flight = true;
        Some(self.submission.clone())
    }

    /// Release the in-flight flag and turn the response into an outcome.
    ///
    /// The draft is kept as-is so it can be sent again.
    pub fn finish_submit(&mut self, result: Result<RelayResponse>) -> SubmitOutcome {
        self.in_flight = false;
        let outcome = SubmitOutcome::from(result);
        info!("Submission finished: {}", outcome.message());
        outcome
    }

    /// Send the draft through `client` if the gates allow it
    pub async fn submit<C: QuoteClient + ?Sized>(&mut self, client: &C) -> Option<SubmitOutcome> {
        let payload = self.begin_submit()?;
        let result = client.send(&payload).await;
        Some(self.finish_submit(result))
    }
}
