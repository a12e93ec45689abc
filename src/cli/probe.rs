//! Probe command implementation

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use kambio_ops::probe::{
    authenticate, default_battery, load_battery, print_report, run_battery, ProbeConfig,
    UreqTransport,
};

/// CLI arguments for a probe run; defaults mirror the local dev setup.
#[derive(Debug)]
pub struct ProbeArgs {
    pub base_url: String,
    pub email: String,
    pub password: String,
    pub timeout_secs: u64,
    pub body_preview: usize,
    pub scenarios: Option<PathBuf>,
}

/// Authenticate once, then run the scenario battery and print the
/// report. A failed login aborts before any scenario is sent.
pub fn probe_command(args: ProbeArgs) -> Result<()> {
    let config = ProbeConfig {
        base_url: args.base_url.trim_end_matches('/').to_string(),
        email: args.email,
        password: args.password,
        timeout: Duration::from_secs(args.timeout_secs),
        body_preview: args.body_preview,
    };

    let scenarios = match &args.scenarios {
        Some(path) => load_battery(path)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?,
        None => default_battery(),
    };

    let transport = UreqTransport::new(config.timeout);

    println!("Logging in at {}/auth/login...", config.base_url);
    let token = authenticate(&transport, &config)?;
    info!("bearer token obtained");

    println!(
        "Running {} scenario(s) against {}/conversion\n",
        scenarios.len(),
        config.base_url
    );
    let reports = run_battery(&transport, &config, &token, &scenarios);
    print_report(&reports);

    println!("\nBattery complete.");
    Ok(())
}
