//! The two execution targets the service offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Where an experiment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BackendType {
    /// The hosted simulator.
    Simulate,
    /// The superconducting device.
    Real,
}

impl BackendType {
    pub const ALL: [BackendType; 2] = [BackendType::Simulate, BackendType::Real];

    /// Wire name, as sent in `type` fields.
    pub fn as_str(self) -> &'static str {
        match self {
            BackendType::Simulate => "SIMULATE",
            BackendType::Real => "REAL",
        }
    }

    /// Static limits of this backend.
    pub fn info(self) -> &'static BackendInfo {
        match self {
            BackendType::Simulate => &BACKENDS[0],
            BackendType::Real => &BACKENDS[1],
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendType {
    type Err = HalError;

    fn from_str(s: &str) -> HalResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SIMULATE" => Ok(BackendType::Simulate),
            "REAL" => Ok(BackendType::Real),
            _ => Err(HalError::Configuration(format!(
                "unknown backend type '{s}', expected SIMULATE or REAL"
            ))),
        }
    }
}

/// Static description of a service backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInfo {
    pub backend_type: BackendType,
    pub version: &'static str,
    pub num_qubits: u32,
    pub max_shots: u32,
    pub simulator: bool,
    pub basis_gates: &'static [&'static str],
}

const BASIS_GATES: &[&str] = &[
    "x", "y", "z", "h", "s", "sdg", "t", "tdg", "rx", "ry", "rz", "u1", "u2", "u3", "cx", "crz",
    "ccx",
];

static BACKENDS: [BackendInfo; 2] = [
    BackendInfo {
        backend_type: BackendType::Simulate,
        version: "0.0.1",
        num_qubits: 25,
        max_shots: 8192,
        simulator: true,
        basis_gates: BASIS_GATES,
    },
    BackendInfo {
        backend_type: BackendType::Real,
        version: "0.0.1",
        num_qubits: 11,
        max_shots: 20000,
        simulator: false,
        basis_gates: BASIS_GATES,
    },
];

/// Both backends, simulator first.
///
/// The service does not publish these limits, so they are fixed here.
pub fn available_backends() -> &'static [BackendInfo] {
    &BACKENDS
}
