//! HTTP transport and authentication for the probe

use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Immutable probe settings, passed explicitly to every operation.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: String,
    pub email: String,
    pub password: String,
    /// Per-request timeout; bounds each scenario, not the whole battery.
    pub timeout: Duration,
    /// Maximum characters of an unparsable response body to report.
    pub body_preview: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/v1".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo".to_string(),
            timeout: Duration::from_secs(5),
            body_preview: 100,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// The server could not be reached at all.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other failure that kept the request from completing.
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("login failed: {0}")]
    Auth(String),
}

/// A captured HTTP response. Error statuses are data here, not errors:
/// a 400 or a 500 is exactly what the battery wants to look at.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

/// The probe's view of the API: one JSON POST at a time.
///
/// Production goes through [`UreqTransport`]; tests substitute a scripted
/// transport so batteries run against canned responses.
pub trait ApiTransport {
    fn post_json(
        &self,
        url: &str,
        token: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<ProbeResponse, TransportError>;
}

/// Blocking ureq transport with a fixed per-request timeout.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: ureq::builder().timeout(timeout).build(),
        }
    }
}

impl ApiTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        token: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<ProbeResponse, TransportError> {
        let mut req = self
            .agent
            .post(url)
            .set("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.set("Authorization", &format!("Bearer {token}"));
        }

        debug!("POST {}", url);
        match req.send_string(&payload.to_string()) {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| TransportError::Other(e.to_string()))?;
                Ok(ProbeResponse { status, body })
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Ok(ProbeResponse { status, body })
            }
            Err(ureq::Error::Transport(transport)) => Err(match transport.kind() {
                ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => {
                    TransportError::Connection(transport.to_string())
                }
                _ => TransportError::Other(transport.to_string()),
            }),
        }
    }
}

/// Log into the API and extract the bearer token.
///
/// Fatal on anything but a 200 carrying `data.access_token`: without a
/// token no scenario result means anything, so the battery never starts.
pub fn authenticate(
    transport: &dyn ApiTransport,
    config: &ProbeConfig,
) -> Result<String, ProbeError> {
    let url = format!("{}/auth/login", config.base_url);
    let payload = json!({"email": config.email, "password": config.password});

    let resp = transport
        .post_json(&url, None, &payload)
        .map_err(|e| ProbeError::Auth(e.to_string()))?;

    if resp.status != 200 {
        return Err(ProbeError::Auth(format!(
            "login returned HTTP {}",
            resp.status
        )));
    }

    let body: serde_json::Value = serde_json::from_str(&resp.body)
        .map_err(|e| ProbeError::Auth(format!("login response is not JSON: {e}")))?;

    body.pointer("/data/access_token")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ProbeError::Auth("login response has no data.access_token".to_string()))
}
