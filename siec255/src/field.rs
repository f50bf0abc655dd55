//! Arithmetic modulo the base field prime.
//!
//! All operations are **variable time** and allocate a fresh [`BigUint`] for
//! every result; inputs are never modified in place.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime modulus of the base field along with the constants needed to take
/// square roots.
#[derive(Clone, Debug)]
pub(crate) struct FieldModulus {
    /// The prime `p`.
    p: BigUint,

    /// `p - 2`, the exponent used for inversion.
    p_minus_2: BigUint,

    /// `(p - 1) / 2`, the exponent of Euler's criterion.
    p_minus_1_over_2: BigUint,

    /// Two-adicity of `p - 1`, i.e. `p - 1 = 2^S * T` with `T` odd.
    s: u64,

    /// Odd part `T` of `p - 1`.
    t: BigUint,

    /// `z^T` where `z` is the smallest quadratic non-residue.
    root_of_unity: BigUint,
}

impl FieldModulus {
    /// Prepare arithmetic modulo the given odd prime.
    pub fn new(p: BigUint) -> Self {
        let one = BigUint::one();
        let p_minus_1 = &p - &one;
        let p_minus_2 = &p - 2u32;
        let p_minus_1_over_2 = &p_minus_1 >> 1u32;

        let s = p_minus_1.trailing_zeros().unwrap_or(0);
        let t = &p_minus_1 >> s;

        // Any non-residue works for Tonelli-Shanks; take the smallest one.
        let mut z = BigUint::from(2u32);
        while z.modpow(&p_minus_1_over_2, &p) != p_minus_1 {
            z += 1u32;
        }
        let root_of_unity = z.modpow(&t, &p);

        Self {
            p,
            p_minus_2,
            p_minus_1_over_2,
            s,
            t,
            root_of_unity,
        }
    }

    /// Returns `a mod p`.
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    /// Returns `a + b mod p`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    /// Returns `a - b mod p`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        // `BigUint` cannot go negative, so lift `a` by `p` before subtracting.
        (self.reduce(a) + &self.p - self.reduce(b)) % &self.p
    }

    /// Returns `-a mod p`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Returns `a * b mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Returns `a² mod p`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `a^e mod p`.
    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &self.p)
    }

    /// Returns the multiplicative inverse of `a`, or `None` if `a ≡ 0`.
    pub fn invert(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }

        // Fermat's little theorem: a^(p-2) * a ≡ 1 mod p
        Some(self.pow(&a, &self.p_minus_2))
    }

    /// Is `a` a square modulo `p`? Zero counts as a square.
    pub fn is_square(&self, a: &BigUint) -> bool {
        let legendre = self.pow(a, &self.p_minus_1_over_2);
        legendre.is_zero() || legendre.is_one()
    }

    /// Returns a square root of `a` mod p, or `None` if `a` is a quadratic
    /// non-residue.
    ///
    /// Tonelli-Shanks; either of the two roots may be returned.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Some(a);
        }
        if !self.is_square(&a) {
            return None;
        }

        let one = BigUint::one();
        let mut m = self.s;
        let mut c = self.root_of_unity.clone();
        let mut t = self.pow(&a, &self.t);
        let mut r = self.pow(&a, &((&self.t + &one) >> 1u32));

        while !t.is_one() {
            // Least i with t^(2^i) = 1; always < m for a residue.
            let mut i = 0;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }

            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        debug_assert_eq!(self.square(&r), a);
        Some(r)
    }
}
