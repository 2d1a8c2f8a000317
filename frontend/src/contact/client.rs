use gloo_net::http::Request;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config;
use crate::contact::error::ContactError;
use crate::contact::form::ContactSubmission;

/// The network seam of the contact form.
pub trait ContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(config::contact_endpoint())
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let request = Request::post(&self.endpoint)
            .json(submission)
            .map_err(|e| ContactError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Turns a finished HTTP exchange into the form's outcome.
///
/// The body must be a JSON object with a boolean `success`; every other key
/// is ignored.
pub fn interpret_response(status: u16, body: &str) -> Result<(), ContactError> {
    if !(200..300).contains(&status) {
        return Err(ContactError::Status(status));
    }

    let response: Map<String, Value> = serde_json::from_str(body)?;
    let success = match response.get("success") {
        Some(value) => bool::deserialize(value)?,
        None => return Err(serde_json::Error::missing_field("success").into()),
    };
    if success {
        Ok(())
    } else {
        Err(ContactError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_success_and_ignores_other_fields() {
        let outcome = interpret_response(200, r#"{"success":true,"message":"queued","id":42}"#);
        assert!(outcome.is_ok());
    }

    #[test]
    fn success_false_is_rejected() {
        let outcome = interpret_response(200, r#"{"success":false,"error":"smtp down"}"#);
        assert!(matches!(outcome, Err(ContactError::Rejected)));
    }

    #[test]
    fn non_2xx_fails_before_reading_body() {
        let outcome = interpret_response(502, r#"{"success":true}"#);
        assert!(matches!(outcome, Err(ContactError::Status(502))));
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let outcome = interpret_response(200, "<html>Bad Gateway</html>");
        assert!(matches!(outcome, Err(ContactError::Malformed(_))));
    }

    #[test]
    fn non_object_body_is_malformed() {
        for body in ["[true]", "[1]", "true", r#""success""#] {
            let outcome = interpret_response(200, body);
            assert!(matches!(outcome, Err(ContactError::Malformed(_))), "{body}");
        }
    }

    #[test]
    fn non_boolean_success_is_malformed() {
        let outcome = interpret_response(200, r#"{"success":"yes"}"#);
        assert!(matches!(outcome, Err(ContactError::Malformed(_))));
    }

    #[test]
    fn missing_success_field_is_malformed() {
        let outcome = interpret_response(201, r#"{"message":"ok"}"#);
        assert!(matches!(outcome, Err(ContactError::Malformed(_))));
    }

    #[test]
    fn default_transport_targets_contact_endpoint() {
        assert_eq!(HttpTransport::default(), HttpTransport::new(config::contact_endpoint()));
    }
}
