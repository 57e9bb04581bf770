//! Gate types placed on the circuit grid.
//!
//! Every gate is anchored at a positive `(x, y)` grid position: `x` is the
//! column, `y` the row (qubit line). Multi-qubit phase gates add secondary
//! and tertiary positions. The set of gate shapes is closed; each variant
//! of [`GateKind`] carries exactly the fields it puts on the wire.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::coords::{Coords, ensure_angle, ensure_positive, resolve_column, resolve_rows};
use crate::error::IrResult;

/// Free-form metadata attached to a gate (`gateDetail` on the wire).
pub type GateDetail = Map<String, Value>;

/// Wire label of the controlled phase gate.
pub const CPHASE_LABEL: &str = "CP";

/// Wire label of the controlled-controlled phase gate.
pub const CCPHASE_LABEL: &str = "CCP";

/// Fixed-label single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    SDag,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    TDag,
    /// Measurement.
    Measure,
}

impl SingleQubitGate {
    /// Every single-qubit gate, in declaration order.
    pub const ALL: [SingleQubitGate; 9] = [
        SingleQubitGate::H,
        SingleQubitGate::X,
        SingleQubitGate::Y,
        SingleQubitGate::Z,
        SingleQubitGate::S,
        SingleQubitGate::SDag,
        SingleQubitGate::T,
        SingleQubitGate::TDag,
        SingleQubitGate::Measure,
    ];

    /// Wire label of this gate.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SingleQubitGate::H => "H",
            SingleQubitGate::X => "X",
            SingleQubitGate::Y => "Y",
            SingleQubitGate::Z => "Z",
            SingleQubitGate::S => "S",
            SingleQubitGate::SDag => "S†",
            SingleQubitGate::T => "T",
            SingleQubitGate::TDag => "T†",
            SingleQubitGate::Measure => "M",
        }
    }

    /// Look a gate up by its wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// Axis of a rotation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// Rotation around X.
    X,
    /// Rotation around Y.
    Y,
    /// Rotation around Z.
    Z,
}

impl RotationAxis {
    /// Every rotation axis.
    pub const ALL: [RotationAxis; 3] = [RotationAxis::X, RotationAxis::Y, RotationAxis::Z];

    /// Label prefix, joined to the angle with `_` (`RX_90`).
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            RotationAxis::X => "RX",
            RotationAxis::Y => "RY",
            RotationAxis::Z => "RZ",
        }
    }

    /// Look an axis up by its label prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.prefix() == prefix)
    }
}

/// The shape of a gate together with its validated coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateKind {
    /// A fixed single-qubit gate.
    SingleQubit {
        gate: SingleQubitGate,
        x: i64,
        y: i64,
    },
    /// A rotation by an integer angle in degrees.
    Rotation {
        axis: RotationAxis,
        angle: i64,
        x: i64,
        y: i64,
    },
    /// Controlled phase over two rows.
    CPhase { x: i64, y: i64, x1: i64, y1: i64 },
    /// Controlled-controlled phase over three rows.
    CCPhase {
        x: i64,
        y: i64,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    },
}

impl GateKind {
    /// Wire label (`"X"`, `"RZ_90"`, `"CP"`, ...).
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            GateKind::SingleQubit { gate, .. } => Cow::Borrowed(gate.label()),
            GateKind::Rotation { axis, angle, .. } => {
                Cow::Owned(format!("{}_{angle}", axis.prefix()))
            }
            GateKind::CPhase { .. } => Cow::Borrowed(CPHASE_LABEL),
            GateKind::CCPhase { .. } => Cow::Borrowed(CCPHASE_LABEL),
        }
    }

    /// Number of rows (qubits) this gate touches.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::SingleQubit { .. } | GateKind::Rotation { .. } => 1,
            GateKind::CPhase { .. } => 2,
            GateKind::CCPhase { .. } => 3,
        }
    }

    /// All occupied `(x, y)` positions, anchor first.
    pub fn positions(&self) -> Vec<(i64, i64)> {
        match *self {
            GateKind::SingleQubit { x, y, .. } | GateKind::Rotation { x, y, .. } => vec![(x, y)],
            GateKind::CPhase { x, y, x1, y1 } => vec![(x, y), (x1, y1)],
            GateKind::CCPhase {
                x,
                y,
                x1,
                y1,
                x2,
                y2,
            } => vec![(x, y), (x1, y1), (x2, y2)],
        }
    }
}

/// A gate placed on the circuit grid, plus its caller-supplied detail map.
///
/// Gates are only obtainable through the validating constructors, so every
/// coordinate of a `Gate` is positive and every rotation angle is in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    kind: GateKind,
    detail: GateDetail,
}

impl Gate {
    fn from_kind(kind: GateKind) -> Self {
        Self {
            kind,
            detail: GateDetail::new(),
        }
    }

    /// Create a single-qubit gate at `(x, y)`.
    pub fn single(gate: SingleQubitGate, x: i64, y: i64) -> IrResult<Self> {
        let x = ensure_positive("x", x)?;
        let y = ensure_positive("y", y)?;
        Ok(Self::from_kind(GateKind::SingleQubit { gate, x, y }))
    }

    /// Hadamard gate.
    pub fn h(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::H, x, y)
    }

    /// Pauli-X gate.
    pub fn x(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::X, x, y)
    }

    /// Pauli-Y gate.
    pub fn y(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::Y, x, y)
    }

    /// Pauli-Z gate.
    pub fn z(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::Z, x, y)
    }

    /// S gate.
    pub fn s(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::S, x, y)
    }

    /// S-dagger gate.
    pub fn sdag(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::SDag, x, y)
    }

    /// T gate.
    pub fn t(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::T, x, y)
    }

    /// T-dagger gate.
    pub fn tdag(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::TDag, x, y)
    }

    /// Measurement.
    pub fn measure(x: i64, y: i64) -> IrResult<Self> {
        Self::single(SingleQubitGate::Measure, x, y)
    }

    /// Create a rotation gate.
    ///
    /// The angle is checked before the coordinates.
    pub fn rotation(axis: RotationAxis, x: i64, y: i64, angle: i64) -> IrResult<Self> {
        let angle = ensure_angle(angle)?;
        let x = ensure_positive("x", x)?;
        let y = ensure_positive("y", y)?;
        Ok(Self::from_kind(GateKind::Rotation { axis, angle, x, y }))
    }

    /// Rotation around X.
    pub fn rx(x: i64, y: i64, angle: i64) -> IrResult<Self> {
        Self::rotation(RotationAxis::X, x, y, angle)
    }

    /// Rotation around Y.
    pub fn ry(x: i64, y: i64, angle: i64) -> IrResult<Self> {
        Self::rotation(RotationAxis::Y, x, y, angle)
    }

    /// Rotation around Z.
    pub fn rz(x: i64, y: i64, angle: i64) -> IrResult<Self> {
        Self::rotation(RotationAxis::Z, x, y, angle)
    }

    /// Controlled phase gate.
    ///
    /// `x` is a column index or a sequence of 1 or 2 equal column indices;
    /// `y` is exactly two distinct rows, control first.
    ///
    /// ```
    /// use acq_ir::Gate;
    ///
    /// let cp = Gate::cphase(1, [1, 2]).unwrap();
    /// assert_eq!(cp.label(), "CP");
    /// assert_eq!(cp.positions(), vec![(1, 1), (1, 2)]);
    ///
    /// assert!(Gate::cphase([1, 2], [1, 2]).is_err());
    /// assert!(Gate::cphase(1, [3, 3]).is_err());
    /// ```
    pub fn cphase(x: impl Into<Coords>, y: impl Into<Coords>) -> IrResult<Self> {
        let [x, x1] = resolve_column::<2>(x.into())?;
        let [y, y1] = resolve_rows::<2>(y.into())?;
        Ok(Self::from_kind(GateKind::CPhase { x, y, x1, y1 }))
    }

    /// Controlled-controlled phase gate.
    ///
    /// `x` is a column index or a sequence of 1 or 3 equal column indices;
    /// `y` is exactly three pairwise-distinct rows.
    pub fn ccphase(x: impl Into<Coords>, y: impl Into<Coords>) -> IrResult<Self> {
        let [x, x1, x2] = resolve_column::<3>(x.into())?;
        let [y, y1, y2] = resolve_rows::<3>(y.into())?;
        Ok(Self::from_kind(GateKind::CCPhase {
            x,
            y,
            x1,
            y1,
            x2,
            y2,
        }))
    }

    /// Replace the detail map.
    pub fn set_detail(&mut self, detail: GateDetail) {
        self.detail = detail;
    }

    /// Builder form of [`Gate::set_detail`].
    #[must_use]
    pub fn with_detail(mut self, detail: GateDetail) -> Self {
        self.detail = detail;
        self
    }

    /// The gate shape and coordinates.
    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    /// Caller-supplied metadata.
    pub fn detail(&self) -> &GateDetail {
        &self.detail
    }

    /// Wire label.
    pub fn label(&self) -> Cow<'static, str> {
        self.kind.label()
    }

    /// Primary `(x, y)` position.
    pub fn anchor(&self) -> (i64, i64) {
        match self.kind {
            GateKind::SingleQubit { x, y, .. }
            | GateKind::Rotation { x, y, .. }
            | GateKind::CPhase { x, y, .. }
            | GateKind::CCPhase { x, y, .. } => (x, y),
        }
    }

    /// All occupied positions, anchor first.
    pub fn positions(&self) -> Vec<(i64, i64)> {
        self.kind.positions()
    }

    /// Number of rows (qubits) the gate touches.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        for (i, (x, y)) in self.positions().into_iter().enumerate() {
            let sep = if i == 0 { " @ " } else { ", " };
            write!(f, "{sep}({x}, {y})")?;
        }
        Ok(())
    }
}
