use crate::detector::internals::Pitch;
use crate::error::Result;
use crate::float::Float;

pub mod internals;
pub mod yin;

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimate the pitch of `signal`. Fails when `signal` is shorter than the
    /// buffer size the detector was built for.
    fn detect(&mut self, signal: &[T]) -> Result<Pitch<T>>;
}
