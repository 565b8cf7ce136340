//! Oneisok Core Library
//!
//! Quote-request form state, submission gating, and the mail relay that turns
//! a submitted quote request into an outbound email.

pub mod client;
pub mod error;
pub mod submission;
pub mod tracker;
pub mod verify;
pub mod wire;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod mail;
#[cfg(feature = "server")]
pub mod relay;

pub use client::QuoteClient;
pub use error::{RelayError, Result};
pub use submission::{Budget, Field, FieldValue, Priority, Service, Submission};
pub use tracker::{can_submit, completed_fields, FormState, SubmitOutcome, TOTAL_REQUIRED_FIELDS};
pub use verify::{CheckboxVerifier, HumanVerifier};
pub use wire::RelayResponse;

#[cfg(feature = "server")]
pub use config::MailConfig;
#[cfg(feature = "server")]
pub use mail::{compose_email, Email, MailTransport, SmtpMailTransport};
#[cfg(feature = "server")]
pub use relay::relay_submission;
