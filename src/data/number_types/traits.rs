//! # Traits
//!
//! The numbers used by the algorithms in this crate. The contracts of these traits are
//! "mathematically exact", but the implementations aren't: arithmetic happens in finite precision
//! and no tolerance is applied anywhere. Whether a certificate holds is decided on the exact
//! outcome of the floating point operations.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, ToPrimitive};

/// Real numbers as used by the constraint algebra and the elimination engine.
///
/// Automatically implemented for all types satisfying the trait's bounds, which in practice are
/// `f32` and `f64`.
pub trait Real: Float + Sum + Debug + Display + Send + Sync + 'static {
    /// Lossy conversion used in error messages and log records.
    ///
    /// Falls back to `NaN` when the value can't be represented, which never happens for the
    /// primitive float types.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}
impl<T: Float + Sum + Debug + Display + Send + Sync + 'static> Real for T {
}
