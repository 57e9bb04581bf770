//! Flat wire-format maps for gates.
//!
//! Every gate travels as a flat JSON object:
//!
//! | Variant      | Keys                                              |
//! |--------------|---------------------------------------------------|
//! | single-qubit | `text`, `gateDetail`, `x`, `y`                    |
//! | rotation     | `text`, `gateDetail`, `x`, `y` (angle in `text`)  |
//! | `CP`         | `text`, `gateDetail`, `x`, `y`, `x1`, `y1`        |
//! | `CCP`        | `text`, `gateDetail`, `x`, `y`, `x1`, `y1`, `x2`, `y2` |
//!
//! A circuit is an ordered array of these objects.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};

use crate::error::{IrError, IrResult};
use crate::gate::{
    CCPHASE_LABEL, CPHASE_LABEL, Gate, GateDetail, GateKind, RotationAxis, SingleQubitGate,
};

/// A single gate in wire form.
pub type FlatMap = Map<String, Value>;

/// Key holding the gate label.
pub const TEXT_KEY: &str = "text";

/// Key holding the detail map.
pub const DETAIL_KEY: &str = "gateDetail";

/// Convert a gate into its flat wire map.
pub fn serialize(gate: &Gate) -> FlatMap {
    let mut map = FlatMap::new();
    map.insert(TEXT_KEY.into(), Value::String(gate.label().into_owned()));
    map.insert(DETAIL_KEY.into(), Value::Object(gate.detail().clone()));

    match *gate.kind() {
        GateKind::SingleQubit { x, y, .. } | GateKind::Rotation { x, y, .. } => {
            put(&mut map, "x", x);
            put(&mut map, "y", y);
        }
        GateKind::CPhase { x, y, x1, y1 } => {
            put(&mut map, "x", x);
            put(&mut map, "y", y);
            put(&mut map, "x1", x1);
            put(&mut map, "y1", y1);
        }
        GateKind::CCPhase {
            x,
            y,
            x1,
            y1,
            x2,
            y2,
        } => {
            put(&mut map, "x", x);
            put(&mut map, "y", y);
            put(&mut map, "x1", x1);
            put(&mut map, "y1", y1);
            put(&mut map, "x2", x2);
            put(&mut map, "y2", y2);
        }
    }

    map
}

/// Serialize a gate sequence, preserving order.
pub fn serialize_circuit<'a>(gates: impl IntoIterator<Item = &'a Gate>) -> Vec<FlatMap> {
    gates.into_iter().map(serialize).collect()
}

/// Rebuild a gate from its flat wire map.
///
/// The label selects the variant; coordinates and angle go through the same
/// validation as direct construction. Rotation labels must spell the angle
/// in canonical decimal form (`RX_90`, not `RX_090` or `RX_+90`). Keys the
/// variant does not use are ignored.
pub fn parse(map: &FlatMap) -> IrResult<Gate> {
    let text = map
        .get(TEXT_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| IrError::malformed("missing string field 'text'"))?;

    let gate = if let Some(single) = SingleQubitGate::from_label(text) {
        Gate::single(single, int(map, "x")?, int(map, "y")?)?
    } else if text == CPHASE_LABEL {
        Gate::cphase(
            [int(map, "x")?, int(map, "x1")?],
            [int(map, "y")?, int(map, "y1")?],
        )?
    } else if text == CCPHASE_LABEL {
        Gate::ccphase(
            [int(map, "x")?, int(map, "x1")?, int(map, "x2")?],
            [int(map, "y")?, int(map, "y1")?, int(map, "y2")?],
        )?
    } else if let Some((axis, angle)) = split_rotation_label(text) {
        let angle = angle
            .parse::<i64>()
            .ok()
            .filter(|value| value.to_string() == angle)
            .ok_or_else(|| {
                IrError::malformed(format!("invalid rotation angle in label '{text}'"))
            })?;
        Gate::rotation(axis, int(map, "x")?, int(map, "y")?, angle)?
    } else {
        return Err(IrError::UnknownGate(text.to_string()));
    };

    let detail = match map.get(DETAIL_KEY) {
        None | Some(Value::Null) => GateDetail::new(),
        Some(Value::Object(detail)) => detail.clone(),
        Some(other) => {
            return Err(IrError::malformed(format!(
                "'gateDetail' must be an object, got {other}"
            )));
        }
    };

    Ok(gate.with_detail(detail))
}

/// Parse a gate sequence, failing on the first invalid entry.
pub fn parse_circuit<'a>(maps: impl IntoIterator<Item = &'a FlatMap>) -> IrResult<Vec<Gate>> {
    maps.into_iter().map(parse).collect()
}

fn put(map: &mut FlatMap, key: &str, value: i64) {
    map.insert(key.to_string(), Value::from(value));
}

fn int(map: &FlatMap, key: &str) -> IrResult<i64> {
    let value = map
        .get(key)
        .ok_or_else(|| IrError::malformed(format!("missing field '{key}'")))?;
    value
        .as_i64()
        .ok_or_else(|| IrError::malformed(format!("field '{key}' must be an integer, got {value}")))
}

fn split_rotation_label(text: &str) -> Option<(RotationAxis, &str)> {
    let (prefix, angle) = text.split_once('_')?;
    Some((RotationAxis::from_prefix(prefix)?, angle))
}

impl From<&Gate> for FlatMap {
    fn from(gate: &Gate) -> Self {
        serialize(gate)
    }
}

impl TryFrom<&FlatMap> for Gate {
    type Error = IrError;

    fn try_from(map: &FlatMap) -> IrResult<Self> {
        parse(map)
    }
}

impl Serialize for Gate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Gate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = FlatMap::deserialize(deserializer)?;
        parse(&map).map_err(de::Error::custom)
    }
}
