//! Human verification

use tracing::warn;

/// Decides whether a verification token proves a human filled the form
pub trait HumanVerifier {
    fn verify(&self, token: &str) -> bool;
}

/// Stand-in for a real bot check: any non-empty token passes.
///
/// This offers no protection against automated submissions. Swap in a
/// verifier backed by a captcha service before relying on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxVerifier;

impl HumanVerifier for CheckboxVerifier {
    fn verify(&self, token: &str) -> bool {
        warn!("Checkbox human verification in use; it does not stop bots");
        !token.is_empty()
    }
}
