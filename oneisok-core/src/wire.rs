//! JSON body returned by `POST /api/send-mail`

use serde::{Deserialize, Serialize};

/// Relay result: `{"success":true}` or `{"success":false,"error":"..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(error: S) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_omits_error() {
        let json = serde_json::to_string(&RelayResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn failure_carries_error() {
        let json = serde_json::to_string(&RelayResponse::failed("auth rejected")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"auth rejected"}"#);
    }
}
