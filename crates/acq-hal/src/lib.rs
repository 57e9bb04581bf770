//! AC Quantum service layer
//!
//! This crate sits between the gate model in `acq-ir` and a concrete wire
//! transport. It provides:
//! - The [`Transport`] trait and the [`Envelope`] every response is wrapped in
//! - [`Connector`], which drives the experiment lifecycle over any transport
//! - Response models: [`ExperimentDetail`], [`Experiment`], [`QuantumResult`]
//! - Static backend limits via [`available_backends`]
//!
//! # Example
//!
//! ```ignore
//! use acq_hal::{BackendType, Connector, UpdateMode};
//! use acq_ir::Circuit;
//!
//! let connector = Connector::new(transport);
//! let id = connector.create_experiment(2, BackendType::Simulate, "bell").await?;
//!
//! let mut circuit = Circuit::new();
//! circuit.h(1, 1)?.cphase(2, [1, 2])?.measure(3, 1)?.measure(3, 2)?;
//! connector.update_experiment(id, &circuit, None, UpdateMode::Override).await?;
//!
//! connector.run_experiment(id, BackendType::Simulate, 2, 1024, None).await?;
//! let results = connector.get_result(id).await?;
//! ```

pub mod backend;
pub mod connector;
pub mod error;
pub mod experiment;
pub mod result;
pub mod transport;

pub use backend::{BackendInfo, BackendType, available_backends};
pub use connector::{Connector, UpdateMode};
pub use error::{HalError, HalResult};
pub use experiment::{Experiment, ExperimentDetail, ExperimentId};
pub use result::{QuantumResult, ResultResponse};
pub use transport::{Envelope, Params, Payload, Transport};
