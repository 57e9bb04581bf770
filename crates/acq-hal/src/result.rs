//! Execution results.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Timestamp format used by the service, e.g. `2019-01-29 17:30:56`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One execution of an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumResult {
    #[serde(rename = "id")]
    pub result_id: u64,
    #[serde(default)]
    pub seed: Option<i64>,
    pub shots: u32,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    /// Absent while the run is still in progress.
    #[serde(default, with = "timestamp::option")]
    pub finish_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub measure_qubits: Vec<u32>,
    #[serde(default)]
    pub process: Option<String>,
    /// Outcome probabilities keyed by measured bitstring.
    #[serde(default, deserialize_with = "probabilities")]
    pub data: BTreeMap<String, f64>,
}

impl QuantumResult {
    /// Whether the run has finished.
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// The bitstring with the highest probability.
    pub fn most_probable(&self) -> Option<(&str, f64)> {
        self.data
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, v)| (k.as_str(), *v))
    }
}

/// Results of an experiment, split by backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    #[serde(default, rename = "simulateResult", deserialize_with = "nullable_list")]
    pub simulated: Vec<QuantumResult>,
    #[serde(default, rename = "realResult", deserialize_with = "nullable_list")]
    pub real: Vec<QuantumResult>,
}

impl ResultResponse {
    /// Simulated results if any, otherwise real results if any.
    pub fn results(&self) -> Option<&[QuantumResult]> {
        if !self.simulated.is_empty() {
            Some(&self.simulated)
        } else if !self.real.is_empty() {
            Some(&self.real)
        } else {
            None
        }
    }
}

/// Accept probabilities as numbers or numeric strings (`{"1": "1.0"}`).
fn probabilities<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let p = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        let Some(p) = p else {
            return Err(de::Error::custom(format!(
                "probability for '{key}' is not numeric: {value}"
            )));
        };
        out.insert(key, p);
    }
    Ok(out)
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<QuantumResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<QuantumResult>>::deserialize(deserializer)?.unwrap_or_default())
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        time: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer, de};

        use super::TIMESTAMP_FORMAT;

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.collect_str(&t.format(TIMESTAMP_FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) if !s.is_empty() => NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
                    .map(Some)
                    .map_err(de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "startTime": "2019-01-29 17:30:56",
            "finishTime": "2019-01-29 17:30:57",
            "process": null,
            "data": {"1": "1.0"},
            "id": 9868,
            "seed": 0,
            "shots": 100,
            "measureQubits": [0]
        })
    }

    #[test]
    fn test_result_decodes() {
        let result: QuantumResult = serde_json::from_value(sample()).unwrap();
        assert_eq!(result.result_id, 9868);
        assert_eq!(result.shots, 100);
        assert_eq!(result.seed, Some(0));
        assert_eq!(result.measure_qubits, vec![0]);
        assert_eq!(result.data["1"], 1.0);
        assert_eq!(result.start_time.year(), 2019);
        assert_eq!(result.start_time.second(), 56);
        assert!(result.is_finished());
    }

    #[test]
    fn test_probabilities_accept_numbers_and_strings() {
        let mut raw = sample();
        raw["data"] = json!({"00": 0.25, "11": "0.75"});
        let result: QuantumResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.most_probable(), Some(("11", 0.75)));
    }

    #[test]
    fn test_probabilities_reject_garbage() {
        let mut raw = sample();
        raw["data"] = json!({"0": "half"});
        assert!(serde_json::from_value::<QuantumResult>(raw).is_err());
    }

    #[test]
    fn test_unfinished_run() {
        let mut raw = sample();
        raw["finishTime"] = Value::Null;
        raw["data"] = Value::Null;
        let result: QuantumResult = serde_json::from_value(raw).unwrap();
        assert!(!result.is_finished());
        assert!(result.data.is_empty());
        assert_eq!(result.most_probable(), None);
    }

    #[test]
    fn test_bad_timestamp() {
        let mut raw = sample();
        raw["startTime"] = json!("29.01.2019");
        assert!(serde_json::from_value::<QuantumResult>(raw).is_err());
    }

    #[test]
    fn test_timestamp_serializes_in_service_format() {
        let result: QuantumResult = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["startTime"], "2019-01-29 17:30:56");
        assert_eq!(value["id"], 9868);
    }

    #[test]
    fn test_results_prefers_simulated() {
        let result: QuantumResult = serde_json::from_value(sample()).unwrap();

        let both = ResultResponse {
            simulated: vec![result.clone()],
            real: vec![result.clone(), result.clone()],
        };
        assert_eq!(both.results().map(<[_]>::len), Some(1));

        let real_only: ResultResponse = serde_json::from_value(json!({
            "simulateResult": [],
            "realResult": [sample()]
        }))
        .unwrap();
        assert_eq!(real_only.results().map(<[_]>::len), Some(1));

        let none: ResultResponse =
            serde_json::from_value(json!({"simulateResult": null, "realResult": []})).unwrap();
        assert!(none.results().is_none());
    }
}
