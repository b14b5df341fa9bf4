//! Detector configuration.
//!
//! A [YinConfig] is fixed when a detector is built and never changes afterwards.

use crate::error::{Result, YinError};

/// The YIN threshold used when none is given. The YIN paper suggests 0.1;
/// a looser value accepts more voiced frames from real instruments.
pub const DEFAULT_THRESHOLD: f64 = 0.32;

/// The default size of an audio buffer (in samples).
pub const DEFAULT_BUFFER_SIZE: usize = 2048;

/// The default overlap of two consecutive audio buffers (in samples).
pub const DEFAULT_OVERLAP: usize = 1536;

/// The default sample rate (in Hz).
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Sample rate, buffer size and threshold of a YIN detector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YinConfig {
    /// Sample rate of the analysed stream, in Hz.
    pub sample_rate: f64,
    /// Number of samples handed to each `detect` call. The scratch buffer
    /// holds `buffer_size / 2` lags.
    pub buffer_size: usize,
    /// Normalized difference cutoff, in `(0, 1)`.
    pub threshold: f64,
}

impl YinConfig {
    /// Build a configuration with the default threshold.
    pub fn new(sample_rate: f64, buffer_size: usize) -> Self {
        YinConfig {
            sample_rate,
            buffer_size,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Replace the threshold.
    ///
    /// ```rust
    /// use yin_pitch::YinConfig;
    ///
    /// let config = YinConfig::new(48000.0, 1024).with_threshold(0.15);
    /// assert_eq!(config.threshold, 0.15);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Number of lags evaluated per detection.
    pub fn scratch_len(&self) -> usize {
        self.buffer_size / 2
    }

    /// Check every field, failing with [YinError::InvalidConfiguration].
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(YinError::InvalidConfiguration(format!(
                "sample rate must be positive and finite, got {}",
                self.sample_rate
            )));
        }
        if self.buffer_size == 0 {
            return Err(YinError::InvalidConfiguration(
                "buffer size must be positive".into(),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(YinError::InvalidConfiguration(format!(
                "threshold must lie in (0, 1), got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for YinConfig {
    fn default() -> Self {
        YinConfig::new(DEFAULT_SAMPLE_RATE, DEFAULT_BUFFER_SIZE)
    }
}
