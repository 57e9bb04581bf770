//! Validate command implementation.

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Check a circuit file without contacting the service.
pub fn execute(input: &str) -> Result<()> {
    let circuit = load_circuit(input)?;

    println!(
        "{} {} is valid: {} gates on {} rows",
        style("✓").green().bold(),
        input,
        circuit.len(),
        circuit.num_rows()
    );
    for gate in &circuit {
        println!("    {gate}");
    }
    Ok(())
}
