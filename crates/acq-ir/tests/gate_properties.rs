//! Property-based tests for gate construction and wire serialization.

use acq_ir::{
    FlatMap, Gate, GateDetail, GateKind, IrError, RotationAxis, SingleQubitGate, parse,
    serialize,
};
use proptest::prelude::*;
use serde_json::Value;

fn arb_single() -> impl Strategy<Value = SingleQubitGate> {
    prop::sample::select(SingleQubitGate::ALL.to_vec())
}

fn arb_axis() -> impl Strategy<Value = RotationAxis> {
    prop::sample::select(RotationAxis::ALL.to_vec())
}

/// A coordinate that violates positivity.
fn arb_non_positive() -> impl Strategy<Value = i64> {
    -1000_i64..=0
}

/// Any valid gate of any variant, with a random detail map.
fn arb_gate() -> impl Strategy<Value = Gate> {
    let kind = prop_oneof![
        (arb_single(), 1_i64..100, 1_i64..100)
            .prop_map(|(g, x, y)| Gate::single(g, x, y).unwrap()),
        (arb_axis(), 1_i64..100, 1_i64..100, 0_i64..=360)
            .prop_map(|(a, x, y, angle)| Gate::rotation(a, x, y, angle).unwrap()),
        (1_i64..100, arb_rows(2))
            .prop_map(|(x, rows)| Gate::cphase(x, rows).unwrap()),
        (1_i64..100, arb_rows(3))
            .prop_map(|(x, rows)| Gate::ccphase(x, rows).unwrap()),
    ];
    (kind, arb_detail()).prop_map(|(gate, detail)| gate.with_detail(detail))
}

fn arb_detail_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 12, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Detail maps: usually empty, sometimes nested.
fn arb_detail() -> impl Strategy<Value = GateDetail> {
    prop_oneof![
        1 => Just(GateDetail::new()),
        3 => prop::collection::btree_map("[a-zA-Z]{1,8}", arb_detail_value(), 1..4)
            .prop_map(|m| m.into_iter().collect::<GateDetail>()),
    ]
}

/// `n` distinct rows in random order.
fn arb_rows(n: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::sample::subsequence((1_i64..=20).collect::<Vec<_>>(), n).prop_shuffle()
}

proptest! {
    #[test]
    fn single_qubit_gates_keep_coordinates(gate in arb_single(), x in 1_i64..10_000, y in 1_i64..10_000) {
        let map = serialize(&Gate::single(gate, x, y).unwrap());
        prop_assert_eq!(&map["x"], &Value::from(x));
        prop_assert_eq!(&map["y"], &Value::from(y));
        prop_assert_eq!(&map["text"], &Value::from(gate.label()));
    }

    #[test]
    fn non_positive_x_is_rejected_everywhere(gate in arb_single(), axis in arb_axis(), x in arb_non_positive()) {
        prop_assert!(matches!(Gate::single(gate, x, 1), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::rotation(axis, x, 1, 90), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::cphase(x, [1, 2]), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::cphase([x, x], [1, 2]), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::ccphase(x, [1, 2, 3]), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::ccphase([x], [1, 2, 3]), Err(IrError::InvalidCoordinate(_))));
    }

    #[test]
    fn non_positive_y_is_rejected_everywhere(gate in arb_single(), axis in arb_axis(), y in arb_non_positive()) {
        prop_assert!(matches!(Gate::single(gate, 1, y), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::rotation(axis, 1, y, 90), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::cphase(1, [y, 5]), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::cphase(1, [5, y]), Err(IrError::InvalidCoordinate(_))));
        prop_assert!(matches!(Gate::ccphase(1, [5, 6, y]), Err(IrError::InvalidCoordinate(_))));
    }

    #[test]
    fn every_angle_in_range_is_accepted(axis in arb_axis(), angle in 0_i64..=360) {
        let gate = Gate::rotation(axis, 1, 1, angle).unwrap();
        prop_assert_eq!(gate.label().into_owned(), format!("{}_{}", axis.prefix(), angle));
    }

    #[test]
    fn angles_out_of_range_are_rejected(axis in arb_axis(), angle in prop_oneof![i64::MIN..0, 361_i64..i64::MAX]) {
        prop_assert_eq!(Gate::rotation(axis, 1, 1, angle), Err(IrError::InvalidAngle(angle)));
    }

    #[test]
    fn unequal_x_sequences_are_rejected(a in 1_i64..50, b in 51_i64..100) {
        prop_assert!(Gate::cphase([a, b], [1, 2]).is_err());
        prop_assert!(Gate::ccphase([a, a, b], [1, 2, 3]).is_err());
    }

    #[test]
    fn wire_round_trip_is_identity(gate in arb_gate()) {
        let map = serialize(&gate);
        let text = serde_json::to_string(&map).unwrap();
        let reparsed: FlatMap = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&reparsed, &map);
        prop_assert_eq!(&map["gateDetail"], &Value::Object(gate.detail().clone()));
        prop_assert_eq!(parse(&reparsed).unwrap(), gate);
    }
}

#[test]
fn rotation_angle_boundaries() {
    for axis in RotationAxis::ALL {
        assert!(Gate::rotation(axis, 1, 1, 0).is_ok());
        assert!(Gate::rotation(axis, 1, 1, 360).is_ok());
        assert_eq!(
            Gate::rotation(axis, 1, 1, -1),
            Err(IrError::InvalidAngle(-1))
        );
        assert_eq!(
            Gate::rotation(axis, 1, 1, 361),
            Err(IrError::InvalidAngle(361))
        );
    }
}

#[test]
fn cphase_examples() {
    let gate = Gate::cphase(1, (1, 2)).unwrap();
    assert_eq!(gate.label(), "CP");
    assert_eq!(
        gate.kind(),
        &GateKind::CPhase {
            x: 1,
            x1: 1,
            y: 1,
            y1: 2
        }
    );

    for bad in [
        Gate::cphase([1, 2], [1, 2]),
        Gate::cphase([1, 1], [1, 2, 3]),
        Gate::cphase(1, (1, 2, 3)),
        Gate::cphase((1, 2), (1, 3)),
        Gate::cphase((1, 2), 1),
        Gate::cphase(1, (3, 3)),
        Gate::cphase(1, vec![3, 3]),
        Gate::cphase([1, 1, 1], [1, 2]),
        Gate::cphase(Vec::<i64>::new(), [1, 2]),
    ] {
        assert!(
            matches!(bad, Err(IrError::InvalidCoordinate(_))),
            "expected InvalidCoordinate, got {bad:?}"
        );
    }
}

#[test]
fn ccphase_examples() {
    for gate in [
        Gate::ccphase([1, 1, 1], [1, 2, 3]).unwrap(),
        Gate::ccphase(1, (1, 2, 3)).unwrap(),
    ] {
        assert_eq!(gate.label(), "CCP");
        assert_eq!(gate.positions(), vec![(1, 1), (1, 2), (1, 3)]);
    }

    let gate = Gate::ccphase((1, 1, 1), (1, 2, 4)).unwrap();
    assert_eq!(
        gate.kind(),
        &GateKind::CCPhase {
            x: 1,
            x1: 1,
            x2: 1,
            y: 1,
            y1: 2,
            y2: 4
        }
    );

    for bad in [
        Gate::ccphase([1, 2, 3], [1, 2, 3]),
        Gate::ccphase([1, 1, 1], [1, 2, 2]),
        Gate::ccphase(1, (1, 2, 2)),
        Gate::ccphase((1, 2), (1, 2, 3)),
        Gate::ccphase((1, 1), (1, 2, 3)),
        Gate::ccphase((1, 2), 1),
        Gate::ccphase(1, (3, 3, 3)),
        Gate::ccphase(1, [1, 2]),
    ] {
        assert!(
            matches!(bad, Err(IrError::InvalidCoordinate(_))),
            "expected InvalidCoordinate, got {bad:?}"
        );
    }
}

#[test]
fn single_qubit_gates_reject_zero_coordinates() {
    for gate in SingleQubitGate::ALL {
        assert!(Gate::single(gate, 1, 1).is_ok());
        assert!(matches!(
            Gate::single(gate, 0, 1),
            Err(IrError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Gate::single(gate, 1, 0),
            Err(IrError::InvalidCoordinate(_))
        ));
    }
}
