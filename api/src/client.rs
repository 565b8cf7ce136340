use async_trait::async_trait;
use oneisok_core::{QuoteClient, RelayError, RelayResponse, Result, Submission};

use crate::SEND_MAIL_PATH;

/// Posts submissions to a relay server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQuoteClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpQuoteClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SEND_MAIL_PATH)
    }
}

#[async_trait(?Send)]
impl QuoteClient for HttpQuoteClient {
    async fn send(&self, submission: &Submission) -> Result<RelayResponse> {
        let endpoint = self.endpoint();
        tracing::debug!("Posting quote request to {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        // 200 and 500 both carry a RelayResponse body
        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| RelayError::Network(format!("unreadable relay response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_path() {
        assert_eq!(
            HttpQuoteClient::new("http://localhost:8080/").endpoint(),
            "http://localhost:8080/api/send-mail"
        );
        assert_eq!(
            HttpQuoteClient::new("https://oneisok.co").endpoint(),
            "https://oneisok.co/api/send-mail"
        );
    }
}
