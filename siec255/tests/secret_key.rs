//! Key generation tests.

#![cfg(feature = "std")]

mod vectors;

use rand_core::{OsRng, RngCore};
use siec255::{AffinePoint, BigUint, siec255};
use vectors::ZERO_SOURCE_KEY;

struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[test]
fn zero_source_test_vector() {
    let curve = siec255();
    let (k, x, y) = ZERO_SOURCE_KEY;

    let (sk, pk) = curve.generate_key(&mut ZeroRng).unwrap();
    assert_eq!(sk.as_bytes(), &k);
    assert_eq!(
        pk,
        AffinePoint::from_coordinates(BigUint::from_bytes_be(&x), BigUint::from_bytes_be(&y))
    );
}

#[test]
fn generate_with_os_rng() {
    let curve = siec255();

    for _ in 0..4 {
        let (sk, pk) = curve.generate_key(&mut OsRng).unwrap();
        assert_eq!(sk.as_bytes().len(), curve.bit_size.div_ceil(8));
        assert!(sk.to_biguint() < curve.n);
        assert!(curve.contains(&pk));
        assert_eq!(pk, curve.scalar_base_mult(sk.as_bytes()));
        assert_eq!(pk, sk.public_key(curve));
    }
}

#[test]
fn generated_keys_differ() {
    let curve = siec255();
    let (a, _) = curve.generate_key(&mut OsRng).unwrap();
    let (b, _) = curve.generate_key(&mut OsRng).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}
