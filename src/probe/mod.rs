//! Black-box validation battery for the conversion API
//!
//! The probe logs in once, then replays an ordered list of request
//! scenarios against `POST /conversion`, classifying each response status
//! against the outcome the scenario expects. Scenarios are independent:
//! they share the bearer token (read-only after login) and nothing else,
//! so one failing request never stops the rest of the battery.

pub mod client;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod verdict;

pub use client::{
    authenticate, ApiTransport, ProbeConfig, ProbeError, ProbeResponse, TransportError,
    UreqTransport,
};
pub use report::print_report;
pub use runner::{run_battery, run_scenario, ScenarioOutcome, ScenarioReport};
pub use scenario::{default_battery, load_battery, ExpectedOutcome, Scenario, ScenarioFileError};
pub use verdict::{classify, Verdict};
