//! Scalar multiplication.

use crate::{AffinePoint, CurveParams};

impl CurveParams {
    /// Returns `[k] point`, where `k` is a big-endian integer of any length.
    ///
    /// Left-to-right double-and-add over every bit of `k`, leading zero bytes
    /// included. **This operation is variable time** with respect to both the
    /// point and the scalar.
    pub fn scalar_mult(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        let mut acc = AffinePoint::Identity;

        for byte in k {
            for i in (0..8).rev() {
                acc = self.double(&acc);
                if (byte >> i) & 1 == 1 {
                    acc = self.add(point, &acc);
                }
            }
        }

        acc
    }

    /// Returns `[k] G`, where `G` is the base point of the group and `k` is a
    /// big-endian integer.
    pub fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint {
        self.scalar_mult(&self.generator(), k)
    }
}
