//! Secret keys and key pair generation.

use crate::{AffinePoint, CurveParams, Error, Result};
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;
use rand_core::TryRngCore;
use zeroize::Zeroize;

/// Masks keeping the low `bit_size % 8` bits of the leading byte.
const MASK: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Fixed bits flipped in the second byte of every candidate key.
///
/// An all-zero source (as used in tests) would otherwise produce the zero
/// scalar and thus the point at infinity. This skews the key distribution by
/// a fixed offset and is not a security measure.
const SECOND_BYTE_XOR: u8 = 0x42;

/// Private scalar `k` in `[0, n)`, stored as big-endian bytes.
///
/// The buffer is zeroized on drop.
#[derive(Clone)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Big-endian encoding of the scalar, `ceil(bit_size / 8)` bytes long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The scalar as an integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Public point `[k] G` for this secret scalar.
    pub fn public_key(&self, curve: &CurveParams) -> AffinePoint {
        curve.scalar_base_mult(&self.bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl CurveParams {
    /// Generate a key pair using the given source of random bytes.
    ///
    /// Candidates are drawn by rejection sampling until one falls below `n`.
    /// There is no bound on the number of attempts: a source which never
    /// yields an in-range candidate makes this loop forever.
    ///
    /// # Errors
    ///
    /// [`Error::RandomSource`] as soon as the source fails to fill a
    /// candidate. No retry is attempted.
    pub fn generate_key<R>(&self, rng: &mut R) -> Result<(SecretKey, AffinePoint)>
    where
        R: TryRngCore + ?Sized,
    {
        let bit_size = self.n.bits() as usize;
        let byte_len = bit_size.div_ceil(8);
        let mut k = SecretKey {
            bytes: alloc::vec![0u8; byte_len],
        };

        // Big-endian `n` left-padded to `byte_len`, so that candidates can be
        // range-checked without copying them into a `BigUint`.
        let n_bytes = self.n.to_bytes_be();
        let mut order = alloc::vec![0u8; byte_len - n_bytes.len()];
        order.extend_from_slice(&n_bytes);

        loop {
            rng.try_fill_bytes(&mut k.bytes)
                .map_err(|_| Error::RandomSource)?;

            // Mask off excess bits when the order is not a whole number of
            // bytes.
            k.bytes[0] &= MASK[bit_size % 8];
            k.bytes[1] ^= SECOND_BYTE_XOR;

            if k.bytes < order {
                break;
            }
        }

        let public = k.public_key(self);
        Ok((k, public))
    }
}
