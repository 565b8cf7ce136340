//! Email composition and the outbound mail transport

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Serialize;
use tracing::debug;

use crate::config::MailConfig;
use crate::error::{RelayError, Result};
use crate::submission::{Field, Submission};

/// Subject of every quote-request email
pub const SUBJECT: &str = "New Quote Request";

/// Body lines, in order
const BODY_FIELDS: [(&str, Field); 9] = [
    ("Name", Field::Name),
    ("Email", Field::Email),
    ("Phone", Field::Phone),
    ("Address", Field::Address),
    ("Service", Field::Service),
    ("Budget", Field::Budget),
    ("Priority", Field::Priority),
    ("Launch Date", Field::LaunchDate),
    ("Comments", Field::Comments),
];

/// A plain-text email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(rename = "text")]
    pub body: String,
}

impl Email {
    /// Build the plain-text MIME message handed to the SMTP relay
    pub fn to_message(&self) -> Result<Message> {
        let from: Mailbox = self.from.parse().map_err(|e| {
            RelayError::Transport(format!("invalid sender address {:?}: {e}", self.from))
        })?;
        let to: Mailbox = self.to.parse().map_err(|e| {
            RelayError::Transport(format!("invalid recipient address {:?}: {e}", self.to))
        })?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())
            .map_err(|e| RelayError::Transport(e.to_string()))
    }
}

/// Turn a submission into the email sent to the configured account.
///
/// The sender is the submitter's address exactly as typed.
pub fn compose_email(submission: &Submission, config: &MailConfig) -> Email {
    let body = BODY_FIELDS
        .iter()
        .map(|(label, field)| format!("{label}: {}\n", submission.text(*field).unwrap_or_default()))
        .collect();

    Email {
        from: submission.email.clone(),
        to: config.account.clone(),
        subject: SUBJECT.to_owned(),
        body,
    }
}

/// Delivers composed emails
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Make one delivery attempt
    async fn deliver(&self, email: &Email, config: &MailConfig) -> Result<()>;
}

/// Delivers over SMTP through the configured relay (implicit TLS), logging
/// in with the account and secret. Each delivery opens its own session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpMailTransport;

impl SmtpMailTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(&self, email: &Email, config: &MailConfig) -> Result<()> {
        let message = email.to_message()?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.account.clone(),
                config.secret.clone(),
            ))
            .timeout(Some(config.timeout))
            .build();

        debug!(to = %email.to, "Sending email through {}", config.smtp_host);
        let response = mailer.send(message).await?;
        debug!("SMTP relay accepted the message ({})", response.code());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn body_follows_fixed_order() {
        let submission = Submission {
            name: "Asha".to_owned(),
            email: "asha@x.com".to_owned(),
            phone: "555".to_owned(),
            address: "1 Rd".to_owned(),
            service: "seo".to_owned(),
            budget: "under-5k".to_owned(),
            priority: "Urgent".to_owned(),
            launch_date: "2025-01-01".to_owned(),
            comments: "hi".to_owned(),
            consent: true,
        };
        let config = MailConfig::new().with_account("quotes@oneisok.co");

        let email = compose_email(&submission, &config);

        assert_eq!(email.subject, "New Quote Request");
        assert_eq!(email.from, "asha@x.com");
        assert_eq!(email.to, "quotes@oneisok.co");
        assert_eq!(
            email.body,
            "Name: Asha\n\
             Email: asha@x.com\n\
             Phone: 555\n\
             Address: 1 Rd\n\
             Service: seo\n\
             Budget: under-5k\n\
             Priority: Urgent\n\
             Launch Date: 2025-01-01\n\
             Comments: hi\n"
        );
    }

    #[test]
    fn missing_fields_leave_blank_sections() {
        let email = compose_email(&Submission::from_json_lenient(&serde_json::json!({})), &MailConfig::new());
        assert!(email.body.starts_with("Name: \nEmail: \n"));
        assert!(email.from.is_empty());
    }

    #[test]
    fn message_carries_headers_and_body() {
        let email = Email {
            from: "asha@x.com".to_owned(),
            to: "quotes@oneisok.co".to_owned(),
            subject: SUBJECT.to_owned(),
            body: "Name: Asha\n".to_owned(),
        };

        let raw = String::from_utf8(email.to_message().unwrap().formatted()).unwrap();

        assert!(raw.contains("From: asha@x.com"));
        assert!(raw.contains("To: quotes@oneisok.co"));
        assert!(raw.contains("Subject: New Quote Request"));
        assert!(raw.contains("Name: Asha"));
    }

    #[test]
    fn unparseable_sender_is_a_transport_error() {
        let email = compose_email(
            &Submission::from_json_lenient(&serde_json::json!({ "email": "not an address" })),
            &MailConfig::new().with_account("quotes@oneisok.co"),
        );

        let err = email.to_message().unwrap_err();
        assert!(matches!(err, RelayError::Transport(ref msg) if msg.contains("invalid sender address")));
    }

    #[tokio::test]
    async fn bad_sender_fails_before_connecting() {
        let config = MailConfig::new()
            .with_account("quotes@oneisok.co")
            .with_secret("secret")
            .with_smtp_host("smtp.invalid");
        let email = compose_email(&Submission::new(), &config);

        let err = SmtpMailTransport::new().deliver(&email, &config).await.unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[test]
    fn serializes_body_as_text() {
        let email = compose_email(&Submission::new(), &MailConfig::new());
        let json = serde_json::to_value(&email).unwrap();
        assert!(json.get("text").is_some());
        assert!(json.get("body").is_none());
    }
}
