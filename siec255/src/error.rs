//! Error type

use core::fmt::{self, Display};

/// Result type with the `siec255` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// SIEC255 errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The randomness source failed to supply the requested bytes.
    RandomSource,

    /// The given x-coordinate does not correspond to any point on the curve.
    PointNotOnCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RandomSource => f.write_str("randomness source failure"),
            Error::PointNotOnCurve => f.write_str("x-coordinate is not on the curve"),
        }
    }
}

impl core::error::Error for Error {}
