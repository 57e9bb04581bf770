//! Experiment lifecycle against the service.
//!
//! ```text
//!   create_experiment ──→ update_experiment ──→ run_experiment ──→ get_result
//!        (infosave)           (codesave)           (submit)        (resultlist)
//! ```
//!
//! The connector is generic over [`Transport`], so the same code runs against
//! the HTTP adapter and against in-memory doubles in tests.

use acq_ir::Circuit;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use crate::backend::{BackendInfo, BackendType, available_backends};
use crate::error::{HalError, HalResult};
use crate::experiment::{Experiment, ExperimentDetail, ExperimentId, ExperimentRecord};
use crate::result::ResultResponse;
use crate::transport::{Params, Payload, Transport};

/// Service endpoint paths, relative to the base URL.
pub mod paths {
    pub const CREATE: &str = "/experiment/infosave";
    pub const UPDATE: &str = "/experiment/codesave";
    pub const DETAIL: &str = "/experiment/detail";
    pub const LIST: &str = "/experiment/list";
    pub const SUBMIT: &str = "/experiment/submit";
    pub const RESULTS: &str = "/experiment/resultlist";
    pub const DELETE: &str = "/experiment/delete";
    pub const DELETE_RESULT: &str = "/experiment/result/delete";
}

/// How `update_experiment` treats the circuit already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Replace the stored circuit.
    #[default]
    Override,
    /// Submit the new gates followed by the stored ones.
    Append,
}

/// Client for experiment management and execution.
#[derive(Debug)]
pub struct Connector<T> {
    transport: T,
}

impl<T: Transport> Connector<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Static limits of both backends.
    pub fn available_backends(&self) -> &'static [BackendInfo] {
        available_backends()
    }

    /// Create an empty experiment and return its id.
    #[instrument(skip(self))]
    pub async fn create_experiment(
        &self,
        bit_width: u32,
        backend: BackendType,
        name: &str,
    ) -> HalResult<ExperimentId> {
        let body = json!({
            "bitWidth": bit_width,
            "type": backend.as_str(),
            "name": name,
        });
        let id: ExperimentId = self
            .transport
            .post(paths::CREATE, Payload::json(body))
            .await?
            .data_as()?;
        info!("Created experiment {} ({})", id, name);
        Ok(id)
    }

    /// Store a circuit (and optional code) on an experiment.
    ///
    /// With [`UpdateMode::Append`] the stored gates are fetched first and the
    /// submitted sequence is `circuit ++ stored`.
    #[instrument(skip(self, circuit, code), fields(gates = circuit.len()))]
    pub async fn update_experiment(
        &self,
        id: ExperimentId,
        circuit: &Circuit,
        code: Option<&str>,
        mode: UpdateMode,
    ) -> HalResult<()> {
        let mut data = circuit.to_payload();
        if mode == UpdateMode::Append {
            let existing = self.get_experiment(id).await?;
            debug!("Appending {} stored gates", existing.data.len());
            data.extend(existing.data);
        }

        let body = json!({
            "experimentId": id.to_string(),
            "data": data,
            "code": code.unwrap_or_default(),
        });
        self.transport
            .post(paths::UPDATE, Payload::json(body))
            .await?
            .into_data()?;
        debug!("Updated experiment {}", id);
        Ok(())
    }

    /// Fetch one experiment including its stored gates.
    #[instrument(skip(self))]
    pub async fn get_experiment(&self, id: ExperimentId) -> HalResult<Experiment> {
        let record: ExperimentRecord = self
            .transport
            .get(paths::DETAIL, Params::new().with("experimentId", id))
            .await?
            .data_as()?;
        Ok(Experiment::from_record(id, record))
    }

    /// List all experiments of the session's account.
    #[instrument(skip(self))]
    pub async fn get_experiments(&self) -> HalResult<Vec<ExperimentDetail>> {
        let list: Option<Vec<ExperimentDetail>> = self
            .transport
            .get(paths::LIST, Params::new())
            .await?
            .data_as()?;
        let list = list.unwrap_or_default();
        debug!("Listed {} experiments", list.len());
        Ok(list)
    }

    /// Queue an experiment for execution.
    ///
    /// `shots` and `bit_width` are checked against the backend's limits
    /// before anything is sent.
    #[instrument(skip(self))]
    pub async fn run_experiment(
        &self,
        id: ExperimentId,
        backend: BackendType,
        bit_width: u32,
        shots: u32,
        seed: Option<u64>,
    ) -> HalResult<()> {
        let info = backend.info();
        if shots == 0 || shots > info.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested, {backend} accepts 1 to {}",
                info.max_shots
            )));
        }
        if bit_width == 0 || bit_width > info.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "bit width {bit_width} requested, {backend} has {} qubits",
                info.num_qubits
            )));
        }

        let params = Params::new()
            .with("experimentId", id)
            .with("bitWidth", bit_width)
            .with("type", backend)
            .with("shots", shots)
            .with("seed", seed.map(|s| s.to_string()).unwrap_or_default());
        self.transport
            .post(paths::SUBMIT, Payload::params(params))
            .await?
            .into_data()?;
        info!("Submitted experiment {} to {} with {} shots", id, backend, shots);
        Ok(())
    }

    /// Fetch all results of an experiment.
    #[instrument(skip(self))]
    pub async fn get_result(&self, id: ExperimentId) -> HalResult<ResultResponse> {
        let data: Value = self
            .transport
            .get(paths::RESULTS, Params::new().with("experimentId", id))
            .await?
            .into_data()?;
        if data.is_null() {
            return Ok(ResultResponse::default());
        }
        Ok(serde_json::from_value(data)?)
    }

    /// Delete an experiment and its results.
    #[instrument(skip(self))]
    pub async fn delete_experiment(&self, id: ExperimentId) -> HalResult<()> {
        self.transport
            .post(
                paths::DELETE,
                Payload::params(Params::new().with("experimentId", id)),
            )
            .await?
            .into_data()?;
        info!("Deleted experiment {}", id);
        Ok(())
    }

    /// Delete a single result.
    #[instrument(skip(self))]
    pub async fn delete_result(&self, result_id: u64) -> HalResult<()> {
        self.transport
            .post(
                paths::DELETE_RESULT,
                Payload::params(Params::new().with("id", result_id)),
            )
            .await?
            .into_data()?;
        info!("Deleted result {}", result_id);
        Ok(())
    }
}
