//! The mail relay: one submission in, one delivery attempt, one response out

use tracing::{debug, error, info};

use crate::config::MailConfig;
use crate::mail::{compose_email, MailTransport};
use crate::submission::Submission;
use crate::wire::RelayResponse;

/// Compose `submission` into an email and attempt delivery exactly once.
///
/// Never fails: delivery problems, including missing credentials, come back
/// as `success: false` with the error text.
pub async fn relay_submission<T: MailTransport + ?Sized>(
    submission: &Submission,
    config: &MailConfig,
    transport: &T,
) -> RelayResponse {
    info!("Relaying quote request");
    debug!(from = %submission.email, "Quote request sender");

    let result = match config.validate() {
        Ok(()) => {
            let email = compose_email(submission, config);
            transport.deliver(&email, config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            info!("Quote request delivered");
            RelayResponse::ok()
        }
        Err(e) => {
            error!("Quote request delivery failed: {}", e);
            RelayResponse::failed(e.to_string())
        }
    }
}
