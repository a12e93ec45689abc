//! Human-readable battery report

use super::runner::{ScenarioOutcome, ScenarioReport};
use super::verdict::Verdict;

/// Print per-scenario verdict lines followed by a summary tally.
///
/// Results are not persisted anywhere; this output is the whole
/// deliverable of a probe run.
pub fn print_report(reports: &[ScenarioReport]) {
    let total = reports.len();

    for (idx, report) in reports.iter().enumerate() {
        println!("[{}/{}] {}", idx + 1, total, report.scenario.name);

        match &report.outcome {
            ScenarioOutcome::Classified {
                status,
                verdict,
                body,
            } => {
                println!("    status: {}", status);
                match verdict {
                    Verdict::Vulnerability => {
                        println!("    VULNERABILITY: the API accepted invalid input");
                        println!("    response: {}", body);
                    }
                    Verdict::ServerError => {
                        println!("    DANGER: internal server error; this can leak stack traces or take the service down");
                        println!("    response: {}", body);
                    }
                    Verdict::Passed => {
                        println!("    ok: behaved as expected");
                    }
                    Verdict::Blocked => {
                        println!("    ok: the API blocked the request");
                    }
                    Verdict::Unexpected(status) => {
                        println!("    unexpected result: HTTP {}", status);
                    }
                }
            }
            ScenarioOutcome::ConnectionFailed(msg) => {
                println!("    connection failed: {} (is the server running?)", msg);
            }
            ScenarioOutcome::ScriptError(msg) => {
                println!("    request error: {}", msg);
            }
        }

        println!("{}", "-".repeat(40));
    }

    print_summary(reports);
}

fn print_summary(reports: &[ScenarioReport]) {
    let mut passed = 0usize;
    let mut blocked = 0usize;
    let mut vulnerabilities = 0usize;
    let mut server_errors = 0usize;
    let mut unexpected = 0usize;
    let mut not_run = 0usize;

    for report in reports {
        match &report.outcome {
            ScenarioOutcome::Classified { verdict, .. } => match verdict {
                Verdict::Passed => passed += 1,
                Verdict::Blocked => blocked += 1,
                Verdict::Vulnerability => vulnerabilities += 1,
                Verdict::ServerError => server_errors += 1,
                Verdict::Unexpected(_) => unexpected += 1,
            },
            ScenarioOutcome::ConnectionFailed(_) | ScenarioOutcome::ScriptError(_) => {
                not_run += 1;
            }
        }
    }

    println!(
        "{} scenario(s): {} passed, {} blocked, {} vulnerability(ies), {} server error(s), {} unexpected, {} not completed",
        reports.len(),
        passed,
        blocked,
        vulnerabilities,
        server_errors,
        unexpected,
        not_run
    );

    if vulnerabilities > 0 || server_errors > 0 {
        println!("Review the verdicts above marked VULNERABILITY or DANGER.");
    }
}
