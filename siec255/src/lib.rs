#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use siec255::{siec255, AffinePoint};
//!
//! let curve = siec255();
//! let g = curve.generator();
//!
//! // [2]G computed three ways
//! let doubled = curve.double(&g);
//! assert_eq!(curve.add(&g, &g), doubled);
//! assert_eq!(curve.scalar_base_mult(&[2]), doubled);
//!
//! // The point at infinity is the group identity.
//! assert_eq!(curve.add(&AffinePoint::Identity, &g), g);
//! # }
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod error;
mod field;
mod mul;
mod params;
mod point_arithmetic;
mod secret_key;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    params::CurveParams,
    secret_key::SecretKey,
};
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

#[cfg(any(feature = "critical-section", feature = "std"))]
static SIEC255: LazyLock<CurveParams> = LazyLock::new(CurveParams::siec255);

/// Process-wide SIEC255 parameters, built on first use.
///
/// Concurrent first calls block until a single initialization completes, and
/// every caller observes the same fully-constructed value.
#[cfg(any(feature = "critical-section", feature = "std"))]
pub fn siec255() -> &'static CurveParams {
    &SIEC255
}
