//! Group law in affine coordinates.
//!
//! These are the textbook chord-and-tangent formulas. They are not complete:
//! the identity, doubling and vertical-line cases are handled by explicit
//! branches, so execution time depends on the inputs.

use crate::{AffinePoint, CurveParams};
use num_bigint::BigUint;

impl CurveParams {
    /// Returns `lhs + rhs`.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (AffinePoint::Identity, _) => return rhs.clone(),
            (_, AffinePoint::Identity) => return lhs.clone(),
            (AffinePoint::Affine { x: x1, y: y1 }, AffinePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 && y1 == y2 {
            return self.double(lhs);
        }

        let f = &self.field;

        // Same x but different y: the points are inverses of each other.
        let Some(z) = f.invert(&f.sub(x2, x1)) else {
            return AffinePoint::Identity;
        };

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = f.mul(&f.sub(y2, y1), &z);

        // x3 = λ² - x1 - x2
        let x3 = f.sub(&f.sub(&f.square(&lambda), x1), x2);

        // y3 = λ(x1 - x3) - y1
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x1, &x3)), y1);

        AffinePoint::Affine { x: x3, y: y3 }
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        let AffinePoint::Affine { x: x1, y: y1 } = point else {
            return AffinePoint::Identity;
        };

        let f = &self.field;

        // Points of order two are their own inverse.
        let Some(z) = f.invert(&f.add(y1, y1)) else {
            return AffinePoint::Identity;
        };

        // λ = (3x1² + a) / 2y1
        let x1_sq = f.square(x1);
        let numerator = f.add(&f.mul(&BigUint::from(3u32), &x1_sq), &self.a);
        let lambda = f.mul(&numerator, &z);

        // x2 = λ² - 2x1
        let x2 = f.sub(&f.square(&lambda), &f.add(x1, x1));

        // y2 = λ(x1 - x2) - y1
        let y2 = f.sub(&f.mul(&lambda, &f.sub(x1, &x2)), y1);

        AffinePoint::Affine { x: x2, y: y2 }
    }
}
