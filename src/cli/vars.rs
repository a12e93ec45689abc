//! Vars command implementation

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use kambio_ops::deploy::{confirm_and_apply, ApplyOutcome, RailwayCli};
use kambio_ops::envfile;

/// Read the env file, show the keys, and push the pairs to Railway after
/// confirmation. Values never hit the terminal; only the Railway CLI
/// sees them.
pub fn vars_command(file: &Path, railway_bin: &str, yes: bool) -> Result<()> {
    println!("Reading variables from {}...", file.display());
    let variables = envfile::read_variables(file)?;

    if variables.is_empty() {
        anyhow::bail!("no variables found in {}", file.display());
    }

    println!("Found {} variable(s) to set:", variables.len());
    for var in &variables {
        println!("  - {}", envfile::key_of(var));
    }

    let answer = if yes {
        "y".to_string()
    } else {
        println!("\nThis will set these variables in your Railway project.");
        print!("Continue? [y/N] ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation input")?;
        input
    };

    let sink = RailwayCli::new(railway_bin);
    match confirm_and_apply(&answer, &variables, &sink)? {
        ApplyOutcome::Applied(stdout) => {
            info!(count = variables.len(), "variables pushed");
            println!("\nVariables set successfully.");
            let stdout = stdout.trim();
            if !stdout.is_empty() {
                println!("{}", stdout);
            }
            println!("\nTip: run `{} variables` to verify.", railway_bin);
        }
        ApplyOutcome::Cancelled => {
            println!("Cancelled.");
        }
    }

    Ok(())
}
