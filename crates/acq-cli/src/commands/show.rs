//! Show command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde_json::json;

use acq_hal::ExperimentId;

use super::common::connect;

/// Execute the show command.
pub async fn execute(config: Option<&Path>, id: u64, format: &str) -> Result<()> {
    let connector = connect(config)?;
    let experiment = connector.get_experiment(ExperimentId(id)).await?;

    if format == "json" {
        let value = json!({
            "detail": experiment.detail,
            "data": experiment.data,
            "code": experiment.code,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("JSON serialization failed")?
        );
        return Ok(());
    }

    let detail = &experiment.detail;
    println!(
        "{} {} (version {})",
        style("Experiment").bold(),
        style(&detail.name).cyan().bold(),
        detail.version
    );
    println!("  ID:         {}", detail.experiment_id);
    println!("  Backend:    {}", detail.experiment_type);
    println!(
        "  Bit width:  {}",
        detail
            .bit_width
            .map_or_else(|| "-".to_string(), |w| w.to_string())
    );
    println!("  Executions: {}", detail.execution);

    match experiment.circuit() {
        Ok(circuit) => {
            println!("  Gates:      {}", circuit.len());
            for gate in &circuit {
                println!("    {gate}");
            }
        }
        Err(e) => println!(
            "  Gates:      {} ({})",
            experiment.data.len(),
            style(format!("not a valid circuit: {e}")).yellow()
        ),
    }

    if !experiment.code.is_empty() {
        println!("  Code:\n{}", experiment.code);
    }
    Ok(())
}
