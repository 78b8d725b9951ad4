//! HTTP client for the portal API
//!
//! Two endpoints: `GET /data` for the account page and `POST /submit` for the
//! contact form. Both speak JSON.

use super::traits::PortalApi;
use crate::state::{ContactPayload, PageData};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Errors at the HTTP boundary. The app collapses all of these to one generic
/// user message; the variants exist so logs can name the cause.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid endpoint url: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// Acknowledgement returned by the submission endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub success: Value,
}

impl SubmitAck {
    /// The endpoint reports a "truthy" success flag, consumed the way the
    /// original web client did: false, 0, "", null and missing all count as
    /// rejection; everything else as acceptance.
    pub fn accepted(&self) -> bool {
        match &self.success {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Client for the portal HTTP API
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PortalClient {
    /// Create a new client. `PORTAL_API_URL` overrides the configured base URL.
    pub fn new(base_url: Option<String>) -> Result<Self, ApiError> {
        let address = std::env::var("PORTAL_API_URL")
            .ok()
            .or(base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(&address)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn fetch_page_data(&mut self) -> Result<PageData> {
        let url = self.endpoint("data")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }
        let data = response.json::<PageData>().await.map_err(ApiError::Decode)?;
        Ok(data)
    }

    async fn submit_contact(&mut self, payload: &ContactPayload) -> Result<SubmitAck> {
        let url = self.endpoint("submit")?;
        // .json() serializes the body and sets Content-Type: application/json
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }
        let ack = response.json::<SubmitAck>().await.map_err(ApiError::Decode)?;
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod submit_ack {
        use super::*;

        fn parse(json: &str) -> SubmitAck {
            serde_json::from_str(json).unwrap()
        }

        #[test]
        fn test_bool_true_is_accepted() {
            assert!(parse(r#"{"success": true}"#).accepted());
        }

        #[test]
        fn test_bool_false_is_rejected() {
            assert!(!parse(r#"{"success": false}"#).accepted());
        }

        #[test]
        fn test_missing_field_is_rejected() {
            assert!(!parse(r#"{}"#).accepted());
        }

        #[test]
        fn test_null_is_rejected() {
            assert!(!parse(r#"{"success": null}"#).accepted());
        }

        #[test]
        fn test_nonzero_number_is_accepted() {
            assert!(parse(r#"{"success": 1}"#).accepted());
        }

        #[test]
        fn test_zero_is_rejected() {
            assert!(!parse(r#"{"success": 0}"#).accepted());
        }

        #[test]
        fn test_nonempty_string_is_accepted() {
            assert!(parse(r#"{"success": "yes"}"#).accepted());
        }

        #[test]
        fn test_empty_string_is_rejected() {
            assert!(!parse(r#"{"success": ""}"#).accepted());
        }

        #[test]
        fn test_extra_fields_are_ignored() {
            assert!(parse(r#"{"success": true, "id": 7}"#).accepted());
        }
    }

    mod endpoints {
        use super::*;

        #[test]
        fn test_endpoint_joins_base_url() {
            let client = PortalClient::new(Some("https://portal.test".to_string())).unwrap();
            assert_eq!(
                client.endpoint("data").unwrap().as_str(),
                "https://portal.test/data"
            );
            assert_eq!(
                client.endpoint("submit").unwrap().as_str(),
                "https://portal.test/submit"
            );
        }

        #[test]
        fn test_invalid_base_url_is_rejected() {
            let result = PortalClient::new(Some("not a url".to_string()));
            assert!(matches!(result, Err(ApiError::BadUrl(_))));
        }
    }
}
