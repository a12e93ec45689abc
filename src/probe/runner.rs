//! Sequential battery execution

use tracing::debug;

use super::client::{ApiTransport, ProbeConfig, TransportError};
use super::scenario::Scenario;
use super::verdict::{classify, Verdict};

/// Terminal state of one scenario. Every variant is reported; none
/// retries.
#[derive(Debug, Clone)]
pub enum ScenarioOutcome {
    /// A response arrived and was classified.
    Classified {
        status: u16,
        verdict: Verdict,
        /// Response body as shown in the report: compact JSON, or raw
        /// text truncated to the configured preview length.
        body: String,
    },
    /// The server was unreachable; the battery moves on.
    ConnectionFailed(String),
    /// The request failed for some other reason (timeout included).
    ScriptError(String),
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: ScenarioOutcome,
}

/// Fire one scenario at the conversion endpoint and classify the
/// response. Transport failures become per-scenario outcomes, never
/// errors: isolation between scenarios is the point of the battery.
pub fn run_scenario(
    transport: &dyn ApiTransport,
    config: &ProbeConfig,
    token: &str,
    scenario: &Scenario,
) -> ScenarioReport {
    let url = format!("{}/conversion", config.base_url);
    debug!(scenario = %scenario.name, "sending");

    let outcome = match transport.post_json(&url, Some(token), &scenario.payload) {
        Ok(resp) => ScenarioOutcome::Classified {
            status: resp.status,
            verdict: classify(scenario.expected, resp.status),
            body: render_body(&resp.body, config.body_preview),
        },
        Err(TransportError::Connection(msg)) => ScenarioOutcome::ConnectionFailed(msg),
        Err(TransportError::Other(msg)) => ScenarioOutcome::ScriptError(msg),
    };

    ScenarioReport {
        scenario: scenario.clone(),
        outcome,
    }
}

/// Run every scenario strictly in listed order.
///
/// No parallelism, no shared state beyond the read-only token; one
/// scenario failing never aborts the rest.
pub fn run_battery(
    transport: &dyn ApiTransport,
    config: &ProbeConfig,
    token: &str,
    scenarios: &[Scenario],
) -> Vec<ScenarioReport> {
    scenarios
        .iter()
        .map(|scenario| run_scenario(transport, config, token, scenario))
        .collect()
}

/// Response body as shown in reports.
///
/// JSON bodies are re-rendered compactly; anything unparsable degrades
/// to a truncated slice of the raw text. Classification never depends on
/// the body, only on the status code.
fn render_body(raw: &str, preview: usize) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => value.to_string(),
        Err(_) => truncate(raw, preview),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
