//! # Number types
//!
//! The elimination engine is written against a small trait rather than against `f64` directly.
//! Only IEEE floating point types satisfy it: the certificate builder needs infinities to
//! represent missing bounds and rounding to pick a value on a half-open interval.
pub mod traits;
