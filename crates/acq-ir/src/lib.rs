//! AC Quantum circuit model
//!
//! This crate holds the gate model submitted to the AC Quantum service: the
//! closed set of gate shapes, the coordinate and angle rules they enforce,
//! and the flat JSON maps they travel as.
//!
//! # Core Components
//!
//! - **Gates**: [`Gate`] built through validating constructors, with its
//!   shape in [`GateKind`]
//! - **Validation**: [`coords`] range checks shared by every variant
//! - **Serialization**: [`serialize()`] / [`parse()`] between gates and [`FlatMap`]s
//! - **Circuit**: [`Circuit`], an ordered gate sequence with builder shorthands
//!
//! # Example
//!
//! ```rust
//! use acq_ir::{Circuit, Gate};
//!
//! let mut circuit = Circuit::new();
//! circuit.h(1, 1).unwrap();
//! circuit.cphase(2, [1, 2]).unwrap();
//! circuit.measure(3, 1).unwrap();
//!
//! let payload = circuit.to_payload();
//! assert_eq!(payload[1]["text"], "CP");
//! assert_eq!(payload[1]["y1"], 2);
//!
//! // Coordinates are 1-based grid positions.
//! assert!(Gate::x(0, 1).is_err());
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Label | Rows | Notes |
//! |------|-------|------|-------|
//! | `H`, `X`, `Y`, `Z` | `H` `X` `Y` `Z` | 1 | |
//! | `S`, `SDag` | `S` `S†` | 1 | |
//! | `T`, `TDag` | `T` `T†` | 1 | |
//! | `Measure` | `M` | 1 | |
//! | `Rx`, `Ry`, `Rz` | `RX_{deg}` ... | 1 | integer angle in [0, 360] |
//! | `CPhase` | `CP` | 2 | rows must differ |
//! | `CCPhase` | `CCP` | 3 | rows pairwise distinct |

pub mod circuit;
pub mod coords;
pub mod error;
pub mod gate;
pub mod serialize;

pub use circuit::Circuit;
pub use coords::Coords;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateDetail, GateKind, RotationAxis, SingleQubitGate};
pub use serialize::{FlatMap, parse, parse_circuit, serialize, serialize_circuit};
