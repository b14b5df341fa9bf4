//! The YIN pitch detection algorithm is based on the algorithm from the paper
//! *[YIN, a fundamental frequency estimator for speech and music](http://recherche.ircam.fr/equipes/pcm/cheveign/ps/2002_JASA_YIN_proof.pdf)*.
//! It is efficient and offers an improvement over basic autocorrelation.
//!
//! Let $S=(s_0,s_1,\ldots,s_{2W-1})$ be a discrete signal. The *difference function* at lag $t$
//! is defined by
//! $$ d(t) = \sum_{i=0}^{W-1} (s_i-s_{i+t})^2. $$
//! This function is close to zero when the signal "lines up" with itself. However, *close* is a relative term,
//! and the value of $d(t)$ depends on volume, which should not affect the pitch of the signal. For this
//! reason, the signal is normalized. The YIN algorithm computes the *cumulative mean normalized difference function*,
//! $$ d\'(t) = \begin{cases}1&\text{if }t=0\\\\ d(t) / \left[ \tfrac{1}{t}\sum_{i=1}^t d(i) \right] & \text{otherwise}\end{cases}. $$
//! Then, it searches for the first local minimum of $d\'(t)$ below a given threshold.
//!
//! ## Implementation
//! The difference function is computed directly, in $O(W^2)$ time, into a scratch buffer of
//! $W$ lags that is allocated once per detector and reused by every detection.
//!
//! After a candidate lag is found, parabolic interpolation is applied to further refine the estimate.
//!
//! The current implementation does not perform *Step 6* (best local estimate) of the algorithm
//! specified in the YIN paper.

use crate::config::YinConfig;
use crate::detector::internals::{
    absolute_threshold, cumulative_mean_normalized_difference, difference,
    parabolic_interpolation, DetectorInternals, Pitch,
};
use crate::detector::PitchDetector;
use crate::error::{Result, YinError};
use crate::float::Float;

pub struct YINDetector<T>
where
    T: Float,
{
    config: YinConfig,
    sample_rate: T,
    threshold: T,
    internals: DetectorInternals<T>,
}

impl<T> YINDetector<T>
where
    T: Float,
{
    pub fn new(config: YinConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "YIN detector: sample rate {} Hz, buffer size {}, threshold {}",
            config.sample_rate,
            config.buffer_size,
            config.threshold
        );

        Ok(YINDetector {
            config,
            sample_rate: T::from_f64_lossy(config.sample_rate),
            threshold: T::from_f64_lossy(config.threshold),
            internals: DetectorInternals::new(config.buffer_size),
        })
    }

    /// Build a detector with the default threshold.
    pub fn with_defaults(sample_rate: f64, buffer_size: usize) -> Result<Self> {
        Self::new(YinConfig::new(sample_rate, buffer_size))
    }

    pub fn config(&self) -> &YinConfig {
        &self.config
    }

    /// Number of lags evaluated per detection, `buffer_size / 2`.
    pub fn scratch_len(&self) -> usize {
        self.internals.scratch.len()
    }
}

/// Pitch detection based on the YIN algorithm. See <http://recherche.ircam.fr/equipes/pcm/cheveign/ps/2002_JASA_YIN_proof.pdf>
impl<T> PitchDetector<T> for YINDetector<T>
where
    T: Float,
{
    fn detect(&mut self, signal: &[T]) -> Result<Pitch<T>> {
        if signal.len() < self.internals.size {
            return Err(YinError::BufferTooShort {
                expected: self.internals.size,
                actual: signal.len(),
            });
        }

        let scratch = &mut self.internals.scratch[..];

        // STEP 2: Calculate the difference function, d_t.
        difference(signal, scratch);

        // STEP 3: Calculate the cumulative mean normalized difference function, d_t'.
        cumulative_mean_normalized_difference(scratch);

        // STEP 4: The absolute threshold. We want the bottom of the first dip below `threshold`.
        let (tau, probability) = match absolute_threshold(scratch, self.threshold) {
            Some(found) => found,
            None => {
                log::trace!("no lag under threshold {}", self.threshold);
                return Ok(Pitch::unpitched());
            }
        };

        // STEP 5: Parabolic interpolation around the chosen lag.
        let better_tau = parabolic_interpolation(scratch, tau);

        // STEP 6: TODO. The best local estimate of the YIN paper lowers the error rate a little
        // further, but it needs a search over neighbouring analysis windows.

        let frequency = self.sample_rate / better_tau;
        log::trace!(
            "tau {} (refined {}), probability {}, frequency {} Hz",
            tau,
            better_tau,
            probability,
            frequency
        );

        Ok(Pitch {
            frequency,
            probability,
            is_pitched: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THRESHOLD;

    fn sin_wave(freq: f64, size: usize, sample_rate: f64) -> Vec<f64> {
        let dx = 2.0 * std::f64::consts::PI * freq / sample_rate;
        (0..size).map(|i| (i as f64 * dx).sin()).collect()
    }

    #[test]
    fn construction() {
        let detector = YINDetector::<f64>::with_defaults(44100., 2048).unwrap();
        assert_eq!(detector.scratch_len(), 1024);
        assert_eq!(detector.config().threshold, DEFAULT_THRESHOLD);

        let detector = YINDetector::<f32>::with_defaults(8000., 513).unwrap();
        assert_eq!(detector.scratch_len(), 256);
    }

    #[test]
    fn invalid_configuration() {
        assert!(matches!(
            YINDetector::<f64>::with_defaults(0., 2048),
            Err(YinError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            YINDetector::<f64>::with_defaults(44100., 0),
            Err(YinError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn scratch_holds_normalized_difference() {
        let mut detector = YINDetector::<f64>::with_defaults(44100., 2048).unwrap();
        let signal = sin_wave(440., 2048, 44100.);
        detector.detect(&signal).unwrap();

        let scratch = &detector.internals.scratch;
        assert_eq!(scratch.len(), 1024);
        assert_eq!(scratch[0], 1.);
    }

    #[test]
    fn buffer_length() {
        let mut detector = YINDetector::<f64>::with_defaults(44100., 2048).unwrap();
        let signal = sin_wave(440., 2049, 44100.);

        assert_eq!(
            detector.detect(&signal[..2047]),
            Err(YinError::BufferTooShort {
                expected: 2048,
                actual: 2047
            })
        );
        assert!(detector.detect(&signal[..2048]).is_ok());
        assert!(detector.detect(&signal).is_ok());
    }

    #[test]
    fn tiny_buffers() {
        for size in 1..6 {
            let mut detector = YINDetector::<f64>::with_defaults(44100., size).unwrap();
            let signal: Vec<f64> = (0..size).map(|i| i as f64).collect();
            assert_eq!(detector.detect(&signal).unwrap(), Pitch::unpitched());
        }
    }

    #[test]
    fn sine_440() {
        let mut detector = YINDetector::<f64>::with_defaults(44100., 2048).unwrap();
        let signal = sin_wave(440., 2048, 44100.);
        let pitch = detector.detect(&signal).unwrap();

        assert!(pitch.is_pitched);
        assert!(pitch.frequency > 435. && pitch.frequency < 445.);
        assert!(pitch.probability > 1. - DEFAULT_THRESHOLD && pitch.probability <= 1.);
    }
}
