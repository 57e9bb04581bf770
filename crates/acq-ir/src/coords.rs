//! Coordinate inputs and the range checks shared by every gate variant.
//!
//! Multi-qubit gates accept their x-coordinate either as a single column
//! index or as a sequence of identical column indices, and their
//! y-coordinates as a sequence of distinct row indices. [`Coords`] models
//! both shapes; [`resolve_column`] and [`resolve_rows`] turn them into the
//! fixed-arity arrays stored on the gate.

use crate::error::{IrError, IrResult};

/// Smallest accepted rotation angle (degrees).
pub const MIN_ANGLE: i64 = 0;

/// Largest accepted rotation angle (degrees).
pub const MAX_ANGLE: i64 = 360;

/// A coordinate argument: one value, or a sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coords {
    /// A single value, broadcast where the gate needs several.
    Scalar(i64),
    /// An explicit sequence of values.
    Seq(Vec<i64>),
}

impl Coords {
    /// View the values as a slice (a scalar is a one-element slice).
    pub fn values(&self) -> &[i64] {
        match self {
            Coords::Scalar(v) => std::slice::from_ref(v),
            Coords::Seq(values) => values,
        }
    }

    /// Number of values carried.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether this is an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

macro_rules! impl_coords_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coords {
                fn from(v: $t) -> Self {
                    Coords::Scalar(i64::from(v))
                }
            }

            impl<const N: usize> From<[$t; N]> for Coords {
                fn from(v: [$t; N]) -> Self {
                    Coords::Seq(v.into_iter().map(i64::from).collect())
                }
            }

            impl From<Vec<$t>> for Coords {
                fn from(v: Vec<$t>) -> Self {
                    Coords::Seq(v.into_iter().map(i64::from).collect())
                }
            }

            impl From<&[$t]> for Coords {
                fn from(v: &[$t]) -> Self {
                    Coords::Seq(v.iter().copied().map(i64::from).collect())
                }
            }

            impl From<($t, $t)> for Coords {
                fn from((a, b): ($t, $t)) -> Self {
                    Coords::Seq(vec![i64::from(a), i64::from(b)])
                }
            }

            impl From<($t, $t, $t)> for Coords {
                fn from((a, b, c): ($t, $t, $t)) -> Self {
                    Coords::Seq(vec![i64::from(a), i64::from(b), i64::from(c)])
                }
            }
        )*
    };
}

impl_coords_from!(i32, i64);

/// Check that a coordinate is strictly positive.
pub fn ensure_positive(axis: &str, value: i64) -> IrResult<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(IrError::invalid_coordinate(format!(
            "{axis} must be greater than 0, got {value}"
        )))
    }
}

/// Check that a rotation angle lies in `[MIN_ANGLE, MAX_ANGLE]`.
pub fn ensure_angle(angle: i64) -> IrResult<i64> {
    if (MIN_ANGLE..=MAX_ANGLE).contains(&angle) {
        Ok(angle)
    } else {
        Err(IrError::InvalidAngle(angle))
    }
}

/// Resolve the x-coordinates of an `N`-qubit gate.
///
/// A scalar is broadcast to all `N` slots. A sequence must hold equal,
/// positive values and have length 1 (broadcast) or exactly `N`.
pub fn resolve_column<const N: usize>(x: Coords) -> IrResult<[i64; N]> {
    match x {
        Coords::Scalar(v) => {
            ensure_positive("x", v)?;
            Ok([v; N])
        }
        Coords::Seq(values) => {
            let Some(&first) = values.first() else {
                return Err(IrError::invalid_coordinate("x-coordinates must not be empty"));
            };
            if values.iter().any(|&v| v != first) {
                return Err(IrError::invalid_coordinate(format!(
                    "x-coordinates must all be equal, got {values:?}"
                )));
            }
            ensure_positive("x", first)?;
            match values.len() {
                1 => Ok([first; N]),
                n if n == N => Ok([first; N]),
                n => Err(IrError::invalid_coordinate(format!(
                    "expected 1 or {N} x-coordinates, got {n}"
                ))),
            }
        }
    }
}

/// Resolve the y-coordinates of an `N`-qubit gate.
///
/// Exactly `N` positive, pairwise-distinct values are required. They are
/// returned in input order: the order distinguishes control from target rows.
pub fn resolve_rows<const N: usize>(y: Coords) -> IrResult<[i64; N]> {
    let values = match y {
        Coords::Scalar(v) => {
            return Err(IrError::invalid_coordinate(format!(
                "expected {N} y-coordinates, got the single value {v}"
            )));
        }
        Coords::Seq(values) => values,
    };

    let rows: [i64; N] = values.as_slice().try_into().map_err(|_| {
        IrError::invalid_coordinate(format!(
            "expected {N} y-coordinates, got {}",
            values.len()
        ))
    })?;

    for (i, a) in rows.iter().enumerate() {
        if rows[i + 1..].contains(a) {
            return Err(IrError::invalid_coordinate(format!(
                "y-coordinates must be distinct, got {rows:?}"
            )));
        }
    }

    for &row in &rows {
        ensure_positive("y", row)?;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_conversions() {
        assert_eq!(Coords::from(3), Coords::Scalar(3));
        assert_eq!(Coords::from([1, 2]), Coords::Seq(vec![1, 2]));
        assert_eq!(Coords::from((1, 2, 4)), Coords::Seq(vec![1, 2, 4]));
        assert_eq!(Coords::from(vec![5_i64]), Coords::Seq(vec![5]));
        assert_eq!(Coords::from(&[7_i32, 7][..]).len(), 2);
        assert!(Coords::Seq(vec![]).is_empty());
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("x", 1), Ok(1));
        assert!(matches!(
            ensure_positive("x", 0),
            Err(IrError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            ensure_positive("y", -4),
            Err(IrError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_ensure_angle_bounds() {
        assert_eq!(ensure_angle(0), Ok(0));
        assert_eq!(ensure_angle(360), Ok(360));
        assert_eq!(ensure_angle(-1), Err(IrError::InvalidAngle(-1)));
        assert_eq!(ensure_angle(361), Err(IrError::InvalidAngle(361)));
    }

    #[test]
    fn test_resolve_column_scalar_broadcast() {
        assert_eq!(resolve_column::<3>(Coords::Scalar(2)), Ok([2, 2, 2]));
        assert!(resolve_column::<2>(Coords::Scalar(0)).is_err());
    }

    #[test]
    fn test_resolve_column_sequence() {
        assert_eq!(resolve_column::<2>(Coords::from([4])), Ok([4, 4]));
        assert_eq!(resolve_column::<2>(Coords::from([4, 4])), Ok([4, 4]));
        // unequal
        assert!(resolve_column::<2>(Coords::from([1, 2])).is_err());
        // wrong arity
        assert!(resolve_column::<2>(Coords::from([1, 1, 1])).is_err());
        assert!(resolve_column::<3>(Coords::from([1, 1])).is_err());
        // empty
        assert!(resolve_column::<2>(Coords::Seq(vec![])).is_err());
        // non-positive
        assert!(resolve_column::<3>(Coords::from([0, 0, 0])).is_err());
    }

    #[test]
    fn test_resolve_rows() {
        assert_eq!(resolve_rows::<2>(Coords::from([2, 1])), Ok([2, 1]));
        assert_eq!(resolve_rows::<3>(Coords::from((1, 2, 4))), Ok([1, 2, 4]));
        assert!(resolve_rows::<2>(Coords::Scalar(1)).is_err());
        assert!(resolve_rows::<2>(Coords::from([1, 2, 3])).is_err());
        assert!(resolve_rows::<2>(Coords::from([3, 3])).is_err());
        assert!(resolve_rows::<3>(Coords::from([1, 2, 1])).is_err());
        assert!(resolve_rows::<2>(Coords::from([-1, 2])).is_err());
    }
}
