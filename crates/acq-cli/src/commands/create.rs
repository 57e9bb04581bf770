//! Create command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::{connect, parse_backend};

/// Execute the create command.
pub async fn execute(config: Option<&Path>, name: &str, bit_width: u32, backend: &str) -> Result<()> {
    let backend = parse_backend(backend)?;
    let connector = connect(config)?;

    let id = connector.create_experiment(bit_width, backend, name).await?;

    println!(
        "{} Created experiment {} ({}, {} qubits)",
        style("✓").green().bold(),
        style(id).cyan().bold(),
        backend,
        bit_width
    );
    Ok(())
}
