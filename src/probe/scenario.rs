//! Request scenarios for the validation battery

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use thiserror::Error;

/// What the API is expected to do with a scenario's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedOutcome {
    /// The payload is well-formed; the conversion should go through.
    Success,
    /// The payload is invalid; the API must reject it.
    Error,
}

/// One (payload, expected outcome) pair fired at the conversion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub payload: serde_json::Value,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Error)]
pub enum ScenarioFileError {
    #[error("failed to read scenario file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("scenario file {0} contains no scenarios")]
    Empty(String),
}

/// On-disk scenario list. Payloads are TOML tables and get converted to
/// JSON before being sent.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenario: Vec<ScenarioEntry>,
}

#[derive(Debug, Deserialize)]
struct ScenarioEntry {
    name: String,
    payload: toml::Value,
    expected: ExpectedOutcome,
}

/// Load an ordered scenario list from a TOML file.
///
/// ```toml
/// [[scenario]]
/// name = "negative amount"
/// expected = "error"
/// payload = { from = "USD", to = "AOA", amount = -100, market = "informal" }
/// ```
pub fn load_battery(path: &Path) -> Result<Vec<Scenario>, ScenarioFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScenarioFileError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let file: ScenarioFile = toml::from_str(&content).map_err(|source| ScenarioFileError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    if file.scenario.is_empty() {
        return Err(ScenarioFileError::Empty(path.display().to_string()));
    }

    Ok(file
        .scenario
        .into_iter()
        .map(|entry| Scenario {
            name: entry.name,
            // toml::Value serializes cleanly into JSON
            payload: serde_json::to_value(entry.payload)
                .unwrap_or(serde_json::Value::Null),
            expected: entry.expected,
        })
        .collect())
}

/// The built-in battery, in execution order.
///
/// Covers the validation surface of the conversion endpoint: business
/// rules on the amount, type confusion, unknown currencies, missing
/// fields, numeric overflow and an injection attempt in a string field.
pub fn default_battery() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "valid conversion (sanity check)".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "amount": 100, "market": "informal"}),
            expected: ExpectedOutcome::Success,
        },
        Scenario {
            name: "negative amount".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "amount": -100, "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "zero amount".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "amount": 0, "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "string where a number belongs".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "amount": "one hundred", "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "unknown source currency".to_string(),
            payload: json!({"from": "ZZZ", "to": "AOA", "amount": 100, "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "missing amount field".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "numeric overflow".to_string(),
            payload: json!({"from": "USD", "to": "AOA", "amount": 1e25, "market": "informal"}),
            expected: ExpectedOutcome::Error,
        },
        Scenario {
            name: "sql injection in currency field".to_string(),
            payload: json!({"from": "USD'; DROP TABLE users; --", "to": "AOA", "amount": 100}),
            expected: ExpectedOutcome::Error,
        },
    ]
}
