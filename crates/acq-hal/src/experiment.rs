//! Stored experiments and their listings.

use std::fmt;

use acq_ir::{Circuit, FlatMap, IrResult};
use serde::{Deserialize, Serialize};

use crate::backend::BackendType;

/// Server-assigned experiment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentId(pub u64);

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExperimentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Summary of a stored experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDetail {
    pub name: String,
    pub version: u32,
    pub experiment_id: ExperimentId,
    #[serde(rename = "type")]
    pub experiment_type: BackendType,
    /// How many times the experiment has been run.
    pub execution: u32,
    /// Only reported by the detail endpoint, not by listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_width: Option<u32>,
}

/// A stored experiment with its gate payload.
///
/// `data` is kept in wire form so that appending to an experiment resubmits
/// exactly what the service returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub detail: ExperimentDetail,
    pub data: Vec<FlatMap>,
    pub code: String,
}

impl Experiment {
    /// Parse the stored payload into a validated circuit.
    pub fn circuit(&self) -> IrResult<Circuit> {
        Circuit::from_payload(&self.data)
    }

    pub(crate) fn from_record(id: ExperimentId, record: ExperimentRecord) -> Self {
        Self {
            detail: ExperimentDetail {
                name: record.experiment_name,
                version: record.version,
                experiment_id: id,
                experiment_type: record.experiment_type,
                execution: record.execution,
                bit_width: record.bit_width,
            },
            data: record.data.unwrap_or_default(),
            code: record.code.unwrap_or_default(),
        }
    }
}

/// Body of `GET /experiment/detail`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExperimentRecord {
    experiment_name: String,
    version: u32,
    experiment_type: BackendType,
    execution: u32,
    #[serde(default)]
    bit_width: Option<u32>,
    #[serde(default)]
    data: Option<Vec<FlatMap>>,
    #[serde(default)]
    code: Option<String>,
}
