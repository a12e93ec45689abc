//! kambio-ops - operational tooling for the Kambio conversion service
//!
//! Two independent utilities share this binary:
//!
//! 1. **vars**: reads `KEY=VALUE` pairs from a local env file and pushes
//!    them to the Railway project in one batched CLI invocation, behind a
//!    confirmation prompt.
//!
//! 2. **probe**: logs into the conversion API, then fires an ordered
//!    battery of request scenarios at the conversion endpoint and
//!    classifies each response against the outcome the scenario expects.
//!    The battery is how we catch validation regressions before users do.
//!
//! Nothing flows between the two; each run does its work and exits.

pub mod deploy;
pub mod envfile;
pub mod probe;
