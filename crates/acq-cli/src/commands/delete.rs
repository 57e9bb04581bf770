//! Delete command implementations.

use std::path::Path;

use anyhow::Result;
use console::style;

use acq_hal::ExperimentId;

use super::common::connect;

/// Delete an experiment.
pub async fn execute_experiment(config: Option<&Path>, id: u64) -> Result<()> {
    let connector = connect(config)?;
    connector.delete_experiment(ExperimentId(id)).await?;
    println!("{} Deleted experiment {}", style("✓").green().bold(), id);
    Ok(())
}

/// Delete a single result.
pub async fn execute_result(config: Option<&Path>, result_id: u64) -> Result<()> {
    let connector = connect(config)?;
    connector.delete_result(result_id).await?;
    println!("{} Deleted result {}", style("✓").green().bold(), result_id);
    Ok(())
}
