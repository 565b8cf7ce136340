//! Mail relay configuration

use std::fmt;
use std::time::Duration;

use crate::error::{RelayError, Result};

/// SMTP relay used when `MAIL_SMTP_HOST` is not set
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default timeout for one delivery attempt
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and relay host for outbound SMTP delivery.
///
/// The account doubles as the recipient of every quote request.
#[derive(Clone)]
pub struct MailConfig {
    /// Account identity (`EMAIL_USER`)
    pub account: String,

    /// Account secret (`EMAIL_PASS`)
    pub secret: String,

    /// SMTP relay host, reached over implicit TLS (`MAIL_SMTP_HOST`)
    pub smtp_host: String,

    /// Timeout for one delivery attempt (`MAIL_TIMEOUT_SECS`)
    pub timeout: Duration,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            secret: String::new(),
            smtp_host: DEFAULT_SMTP_HOST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("account", &self.account)
            .field("secret", &"[redacted]")
            .field("smtp_host", &self.smtp_host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MailConfig {
    /// Create a configuration with no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `EMAIL_USER`, `EMAIL_PASS`, `MAIL_SMTP_HOST`, and
    /// `MAIL_TIMEOUT_SECS`. Missing values stay empty; [`MailConfig::validate`]
    /// reports them when a delivery is attempted.
    pub fn from_env() -> Self {
        let timeout = std::env::var("MAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            account: std::env::var("EMAIL_USER").unwrap_or_default(),
            secret: std::env::var("EMAIL_PASS").unwrap_or_default(),
            smtp_host: std::env::var("MAIL_SMTP_HOST")
                .ok()
                .filter(|host| !host.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
            timeout,
        }
    }

    /// Set the account identity
    pub fn with_account<S: Into<String>>(mut self, account: S) -> Self {
        self.account = account.into();
        self
    }

    /// Set the account secret
    pub fn with_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.secret = secret.into();
        self
    }

    /// Set the SMTP relay host
    pub fn with_smtp_host<S: Into<String>>(mut self, smtp_host: S) -> Self {
        self.smtp_host = smtp_host.into();
        self
    }

    /// Set the delivery timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that everything needed for a delivery is present
    pub fn validate(&self) -> Result<()> {
        if self.account.is_empty() {
            return Err(RelayError::Configuration("EMAIL_USER is not set".to_owned()));
        }
        if self.secret.is_empty() {
            return Err(RelayError::Configuration("EMAIL_PASS is not set".to_owned()));
        }
        Ok(())
    }
}
