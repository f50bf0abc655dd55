//! SIEC255 domain parameters.

use crate::{AffinePoint, field::FieldModulus};
use hex_literal::hex;
use num_bigint::BigUint;

/// Field prime `p`.
const MODULUS: [u8; 32] = hex!("4000000000000000000000000200104080000000000000000004004103082041");

/// Order `n` of the subgroup generated by the base point.
const ORDER: [u8; 32] = hex!("4000000000000000000000000200103f800000000000000000040040ff07ffc1");

/// Coefficient `a` in the curve equation.
const EQUATION_A: u32 = 0;

/// Coefficient `b` in the curve equation.
const EQUATION_B: u32 = 19;

/// Generator point's affine coordinates: (x, y).
const GENERATOR: (u32, u32) = (5, 12);

/// Parameters of the SIEC255 curve `y² = x³ + 19`.
///
/// The parameters are immutable once constructed and can be shared freely
/// between threads. Use [`crate::siec255`] for a process-wide instance, or
/// [`CurveParams::siec255`] to build one explicitly.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Order of the underlying field.
    pub p: BigUint,

    /// Order of the base point.
    pub n: BigUint,

    /// Coefficient `a` of the curve equation.
    pub a: BigUint,

    /// Coefficient `b` of the curve equation.
    pub b: BigUint,

    /// x-coordinate of the base point.
    pub gx: BigUint,

    /// y-coordinate of the base point.
    pub gy: BigUint,

    /// Bit length of `n`.
    pub bit_size: usize,

    /// Canonical name of the curve.
    pub name: &'static str,

    pub(crate) field: FieldModulus,
}

impl CurveParams {
    /// Construct the SIEC255 parameters.
    pub fn siec255() -> Self {
        let p = BigUint::from_bytes_be(&MODULUS);
        let n = BigUint::from_bytes_be(&ORDER);
        let bit_size = n.bits() as usize;

        let params = Self {
            field: FieldModulus::new(p.clone()),
            p,
            n,
            a: BigUint::from(EQUATION_A),
            b: BigUint::from(EQUATION_B),
            gx: BigUint::from(GENERATOR.0),
            gy: BigUint::from(GENERATOR.1),
            bit_size,
            name: "SIEC255",
        };

        // (0, 0) is only usable as the identity sentinel when it is not itself
        // a solution of y² = x³ + b, i.e. when b is a non-residue.
        debug_assert!(!params.field.is_square(&params.b));
        debug_assert!(params.is_on_curve(&params.gx, &params.gy));

        params
    }

    /// Returns the parameters for the curve.
    pub fn params(&self) -> &Self {
        self
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Affine {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    /// Reports whether the given `(x, y)` lies on the curve.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.field.square(y) == self.rhs(x)
    }

    /// Reports whether the given point is on the curve. The identity always is.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Identity => true,
            AffinePoint::Affine { x, y } => self.is_on_curve(x, y),
        }
    }

    /// Right-hand side of the curve equation: `x³ + ax + b mod p`.
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.a, x);
        f.add(&f.add(&x3, &ax), &self.b)
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::siec255()
    }
}
