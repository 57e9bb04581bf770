//! Update command implementation.
//!
//! Uploads a circuit file to an existing experiment.

use std::path::Path;

use anyhow::Result;
use console::style;

use acq_hal::{ExperimentId, UpdateMode};

use super::common::{connect, load_circuit};

/// Execute the update command.
pub async fn execute(
    config: Option<&Path>,
    id: u64,
    input: &str,
    code: Option<&str>,
    append: bool,
) -> Result<()> {
    let circuit = load_circuit(input)?;
    let connector = connect(config)?;

    let mode = if append {
        UpdateMode::Append
    } else {
        UpdateMode::Override
    };

    connector
        .update_experiment(ExperimentId(id), &circuit, code, mode)
        .await?;

    println!(
        "{} {} {} gates on experiment {}",
        style("✓").green().bold(),
        if append { "Prepended" } else { "Stored" },
        circuit.len(),
        style(id).cyan()
    );
    Ok(())
}
