//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use num_traits::Float as NumFloat;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Signals are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
///
/// The conversions below are infallible `as` casts, matching `FromPrimitive::from_usize`
/// and `from_f64` for `f32`/`f64` without their always-`Some` `Option`.
pub trait Float: Display + Debug + NumFloat + Sum + Send + 'static {
    /// Conversion of a lag or sample count; large values round to the nearest float.
    fn from_index(index: usize) -> Self;

    /// Conversion of a configuration value, which is always stored as `f64`.
    fn from_f64_lossy(value: f64) -> Self;
}

impl Float for f64 {
    fn from_index(index: usize) -> Self {
        index as f64
    }

    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

impl Float for f32 {
    fn from_index(index: usize) -> Self {
        index as f32
    }

    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}
