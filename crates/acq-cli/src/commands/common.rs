//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use acq_adapter_http::{AcqConnector, ConnectorConfig};
use acq_hal::{BackendType, QuantumResult};
use acq_ir::{Circuit, FlatMap};

/// Return the default config file (~/.acq/config.yaml) if it exists.
pub fn default_config_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".acq").join("config.yaml");
    path.exists().then_some(path)
}

/// Load configuration from `path`, the default file, and the environment.
pub fn load_config(path: Option<&Path>) -> Result<ConnectorConfig> {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);
    ConnectorConfig::load(path.as_deref()).context("Failed to load configuration")
}

/// Build a connector from the resolved configuration.
pub fn connect(config_path: Option<&Path>) -> Result<AcqConnector> {
    let config = load_config(config_path)?;
    tracing::debug!(?config, "connecting");
    acq_adapter_http::connect(&config).context("Failed to set up HTTP transport")
}

/// Load a circuit from a JSON file holding an array of gate objects.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    let payload: Vec<FlatMap> = serde_json::from_str(&source)
        .with_context(|| format!("{path} is not a JSON array of gate objects"))?;

    Circuit::from_payload(&payload).map_err(|e| anyhow::anyhow!("Invalid circuit in {path}: {e}"))
}

/// Parse a backend name (case-insensitive).
pub fn parse_backend(name: &str) -> Result<BackendType> {
    Ok(name.parse()?)
}

/// Print results in table form.
pub fn print_results(results: &[QuantumResult]) {
    for result in results {
        println!(
            "\n{} {} ({} shots, seed {})",
            style("Result").bold(),
            style(result.result_id).cyan(),
            result.shots,
            result
                .seed
                .map_or_else(|| "-".to_string(), |s| s.to_string())
        );
        println!("  Started:  {}", result.start_time);
        match result.finish_time {
            Some(t) => println!("  Finished: {t}"),
            None => println!("  Finished: {}", style("running").yellow()),
        }
        if !result.measure_qubits.is_empty() {
            let qubits: Vec<_> = result.measure_qubits.iter().map(u32::to_string).collect();
            println!("  Measured: {}", qubits.join(", "));
        }

        let mut outcomes: Vec<_> = result.data.iter().collect();
        outcomes.sort_by(|a, b| b.1.total_cmp(a.1));
        for (bits, p) in outcomes {
            println!("  {:>8}  {:>7.4}  {}", bits, p, style(bar(*p)).green());
        }
    }
}

const BAR_WIDTH: usize = 40;

/// Histogram bar for a probability, clamped to `[0, 1]`.
fn bar(p: f64) -> String {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    "█".repeat((p * BAR_WIDTH as f64).round() as usize)
}
