//! Railway CLI invocation for the vars command

use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to launch {bin}: {source}")]
    Spawn {
        bin: String,
        source: std::io::Error,
    },

    #[error("{bin} exited with {status}: {stderr}")]
    CommandFailed {
        bin: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Outcome of the confirmation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Variables were pushed; carries the tool's captured stdout.
    Applied(String),
    /// The user declined; nothing was invoked.
    Cancelled,
}

/// Destination for parsed env variables.
///
/// The production sink shells out to the Railway CLI; tests substitute a
/// recorder to assert what would have been pushed.
pub trait VariableSink {
    fn apply(&self, variables: &[String]) -> Result<String, DeployError>;
}

/// Pushes variables as `railway variables --set KEY=VALUE ...`, batching
/// every pair into a single invocation. Success or failure is therefore
/// all-or-nothing from this tool's side.
pub struct RailwayCli {
    binary: String,
}

impl RailwayCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl VariableSink for RailwayCli {
    fn apply(&self, variables: &[String]) -> Result<String, DeployError> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("variables");
        for var in variables {
            cmd.args(["--set", var]);
        }

        debug!(bin = %self.binary, count = variables.len(), "pushing variables");
        let output = cmd.output().map_err(|source| DeployError::Spawn {
            bin: self.binary.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(DeployError::CommandFailed {
                bin: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Apply through the sink only when `answer` is affirmative.
///
/// Only a bare `y` (any case) counts; anything else, the empty string
/// included, cancels without touching the sink.
pub fn confirm_and_apply(
    answer: &str,
    variables: &[String],
    sink: &dyn VariableSink,
) -> Result<ApplyOutcome, DeployError> {
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(ApplyOutcome::Cancelled);
    }

    let stdout = sink.apply(variables)?;
    Ok(ApplyOutcome::Applied(stdout))
}
