//! Ordered gate sequences.

use crate::coords::Coords;
use crate::error::IrResult;
use crate::gate::Gate;
use crate::serialize::{FlatMap, parse_circuit, serialize_circuit};

/// One circuit revision: gates in diagram placement order.
///
/// Order matters and duplicates are allowed. The builder methods validate
/// each gate before appending it.
///
/// ```
/// use acq_ir::Circuit;
///
/// let mut circuit = Circuit::new();
/// circuit.x(1, 1).unwrap().measure(2, 1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// assert_eq!(circuit.to_payload()[1]["text"], "M");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing gate sequence.
    pub fn with_gates(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Rebuild a circuit from wire maps, validating every gate.
    pub fn from_payload(payload: &[FlatMap]) -> IrResult<Self> {
        parse_circuit(payload).map(Self::with_gates)
    }

    /// Serialize every gate, preserving order.
    pub fn to_payload(&self) -> Vec<FlatMap> {
        serialize_circuit(&self.gates)
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// The gates in order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Iterate over the gates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Highest occupied row, or 0 for an empty circuit.
    ///
    /// Rows are qubit lines, so this is the smallest bit width that can
    /// run the circuit.
    pub fn num_rows(&self) -> i64 {
        self.gates
            .iter()
            .flat_map(Gate::positions)
            .map(|(_, y)| y)
            .max()
            .unwrap_or(0)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::h(x, y)?))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::x(x, y)?))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::y(x, y)?))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::z(x, y)?))
    }

    /// Apply S gate.
    pub fn s(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::s(x, y)?))
    }

    /// Apply S-dagger gate.
    pub fn sdag(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::sdag(x, y)?))
    }

    /// Apply T gate.
    pub fn t(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::t(x, y)?))
    }

    /// Apply T-dagger gate.
    pub fn tdag(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::tdag(x, y)?))
    }

    /// Add a measurement.
    pub fn measure(&mut self, x: i64, y: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::measure(x, y)?))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, x: i64, y: i64, angle: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::rx(x, y, angle)?))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, x: i64, y: i64, angle: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::ry(x, y, angle)?))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, x: i64, y: i64, angle: i64) -> IrResult<&mut Self> {
        Ok(self.push(Gate::rz(x, y, angle)?))
    }

    /// Apply controlled phase gate.
    pub fn cphase(&mut self, x: impl Into<Coords>, y: impl Into<Coords>) -> IrResult<&mut Self> {
        Ok(self.push(Gate::cphase(x, y)?))
    }

    /// Apply controlled-controlled phase gate.
    pub fn ccphase(&mut self, x: impl Into<Coords>, y: impl Into<Coords>) -> IrResult<&mut Self> {
        Ok(self.push(Gate::ccphase(x, y)?))
    }
}

impl Extend<Gate> for Circuit {
    fn extend<I: IntoIterator<Item = Gate>>(&mut self, iter: I) {
        self.gates.extend(iter);
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self::with_gates(iter.into_iter().collect())
    }
}

impl IntoIterator for Circuit {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
