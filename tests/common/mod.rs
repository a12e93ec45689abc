//! Shared test utilities for the vars and probe integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use kambio_ops::probe::{ApiTransport, ProbeResponse, TransportError};

/// Writes an env file into a fresh temp dir and returns both.
pub fn write_env_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".env.railway");
    fs::write(&path, content).expect("Failed to write env file");
    (temp_dir, path)
}

/// One recorded request: (url, bearer token, payload).
pub type RecordedRequest = (String, Option<String>, serde_json::Value);

/// Transport that replays a canned response queue and records every
/// request it saw. Responses are consumed in order, one per request.
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ProbeResponse, TransportError>>>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<ProbeResponse, TransportError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Canned 200 with a JSON body.
    pub fn ok(body: &str) -> Result<ProbeResponse, TransportError> {
        Ok(ProbeResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    /// Canned non-200 status with a JSON error body.
    pub fn status(status: u16) -> Result<ProbeResponse, TransportError> {
        Ok(ProbeResponse {
            status,
            body: format!("{{\"success\":false,\"status\":{status}}}"),
        })
    }
}

impl ApiTransport for ScriptedTransport {
    fn post_json(
        &self,
        url: &str,
        token: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<ProbeResponse, TransportError> {
        self.requests.borrow_mut().push((
            url.to_string(),
            token.map(str::to_string),
            payload.clone(),
        ));

        self.responses
            .borrow_mut()
            .pop_front()
            .expect("ScriptedTransport ran out of responses")
    }
}
