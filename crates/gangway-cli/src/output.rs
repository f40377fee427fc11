//! Outcome rendering, human and JSON.

use anyhow::Result;
use gangway_core::DeployOutcome;
use serde::Serialize;

/// Serializable view of a deployment outcome.
#[derive(Serialize)]
struct OutcomeView<'a> {
    status: String,
    http_status: u16,
    message: &'a str,
}

/// Prints the outcome to stdout in the requested format.
pub fn print_outcome(outcome: &DeployOutcome, json: bool) -> Result<()> {
    if json {
        let view = OutcomeView {
            status: outcome.status.to_string(),
            http_status: outcome.status.http_status(),
            message: &outcome.message,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "{} ({}): {}",
            outcome.status,
            outcome.status.http_status(),
            outcome.message
        );
    }
    Ok(())
}
