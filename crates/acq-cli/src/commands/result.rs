//! Result command implementation.
//!
//! Retrieve and display results for an experiment.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use acq_hal::{ExperimentId, ResultResponse};

use super::common::{connect, print_results};

/// Execute the result command.
///
/// JSON output goes to stdout alone so it can be piped.
pub async fn execute(config: Option<&Path>, id: u64, format: &str) -> Result<()> {
    let connector = connect(config)?;

    if format == "json" {
        let response = connector.get_result(ExperimentId(id)).await?;
        return write_json(&mut io::stdout().lock(), &response);
    }

    println!(
        "{} Fetching results for experiment {}",
        style("→").cyan().bold(),
        style(id).dim()
    );

    let response = connector.get_result(ExperimentId(id)).await?;
    match response.results() {
        Some(results) => print_results(results),
        None => println!("No results yet."),
    }

    Ok(())
}

fn write_json(out: &mut impl Write, response: &ResultResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response).context("JSON serialization failed")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_is_pure_json() {
        let response: ResultResponse = serde_json::from_str(
            r#"{
                "simulateResult": [{
                    "id": 9868, "seed": 429383, "shots": 100,
                    "startTime": "2019-01-29 17:30:56", "finishTime": "2019-01-29 17:31:02",
                    "measureQubits": [1], "process": null, "data": {"1": "1.0"}
                }],
                "realResult": null
            }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &response).unwrap();

        let text = String::from_utf8(out).unwrap();
        let parsed: ResultResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_json_output_for_empty_response() {
        let mut out = Vec::new();
        write_json(&mut out, &ResultResponse::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.is_object());
    }
}
