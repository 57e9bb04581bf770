//! Run command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use acq_hal::ExperimentId;

use super::common::{connect, parse_backend};

/// Execute the run command.
///
/// Without an explicit bit width, the stored experiment's width is used,
/// falling back to the highest row its circuit occupies.
pub async fn execute(
    config: Option<&Path>,
    id: u64,
    backend: &str,
    shots: u32,
    bit_width: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let backend = parse_backend(backend)?;
    let connector = connect(config)?;
    let id = ExperimentId(id);

    let bit_width = match bit_width {
        Some(w) => w,
        None => {
            let experiment = connector.get_experiment(id).await?;
            match experiment.detail.bit_width {
                Some(w) => w,
                None => u32::try_from(experiment.circuit()?.num_rows())?,
            }
        }
    };

    println!(
        "{} Running experiment {} on {} ({} qubits, {} shots)",
        style("→").cyan().bold(),
        style(id).cyan(),
        backend,
        bit_width,
        shots
    );

    connector
        .run_experiment(id, backend, bit_width, shots, seed)
        .await?;

    println!(
        "{} Submitted. Fetch results with: acq result {}",
        style("✓").green().bold(),
        id
    );
    Ok(())
}
