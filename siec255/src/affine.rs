//! Affine curve points.

use crate::{CurveParams, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Point on SIEC255 in affine coordinates.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Point with affine coordinates, each in `[0, p)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Build a point from a coordinate pair, treating `(0, 0)` as the point at
    /// infinity.
    ///
    /// `(0, 0)` is not a solution of `y² = x³ + 19` mod `p`, so the encoding is
    /// unambiguous for this curve.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Self {
        if x.is_zero() && y.is_zero() {
            Self::Identity
        } else {
            Self::Affine { x, y }
        }
    }

    /// Coordinate pair of this point, with the point at infinity encoded as
    /// `(0, 0)`.
    pub fn to_coordinates(&self) -> (BigUint, BigUint) {
        match self {
            Self::Identity => (BigUint::zero(), BigUint::zero()),
            Self::Affine { x, y } => (x.clone(), y.clone()),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// x-coordinate, if this is not the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, if this is not the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }
}

impl CurveParams {
    /// Returns `-point`, i.e. `(x, p - y)`.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Affine { x, y } => AffinePoint::Affine {
                x: x.clone(),
                y: self.field.neg(y),
            },
        }
    }

    /// Returns the point on the curve with the given x-coordinate.
    ///
    /// Of the two candidates `(x, y)` and `(x, p - y)` the one whose
    /// y-coordinate is smaller in `[0, p)` is returned.
    ///
    /// # Errors
    ///
    /// [`Error::PointNotOnCurve`] if `x³ + ax + b` is not a square mod `p`.
    pub fn lift_x(&self, x: &BigUint) -> Result<AffinePoint> {
        let f = &self.field;
        let alpha = self.rhs(x);
        let beta = f.sqrt(&alpha).ok_or(Error::PointNotOnCurve)?;
        let neg_beta = f.neg(&beta);

        Ok(AffinePoint::Affine {
            x: x.clone(),
            y: beta.min(neg_beta),
        })
    }
}
