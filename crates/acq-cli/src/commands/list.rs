//! List command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use super::common::connect;

/// Execute the list command.
pub async fn execute(config: Option<&Path>, format: &str) -> Result<()> {
    let connector = connect(config)?;
    let experiments = connector.get_experiments().await?;

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&experiments).context("JSON serialization failed")?
        );
        return Ok(());
    }

    if experiments.is_empty() {
        println!("No experiments.");
        return Ok(());
    }

    println!(
        "{:>10}  {:<9}  {:>7}  {:>5}  {}",
        style("ID").bold(),
        style("BACKEND").bold(),
        style("VERSION").bold(),
        style("RUNS").bold(),
        style("NAME").bold()
    );
    for exp in &experiments {
        println!(
            "{:>10}  {:<9}  {:>7}  {:>5}  {}",
            exp.experiment_id, exp.experiment_type, exp.version, exp.execution, exp.name
        );
    }
    Ok(())
}
