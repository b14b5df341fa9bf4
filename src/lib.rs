//! # YIN Pitch
//! *yin_pitch* estimates the fundamental frequency of a sound wave stored in a
//! buffer with the [YIN algorithm][detector::yin].
//!
//! A [YINDetector][detector::yin::YINDetector] is built once per audio stream. It
//! owns its configuration and a scratch buffer that every detection reuses, so
//! detecting allocates nothing. Reading audio, resampling and choosing where the
//! analysis windows start are left to the caller; [frames][utils::buffer::frames]
//! helps with the last one.
//!
//! # Examples
//! ```
//! use yin_pitch::detector::yin::YINDetector;
//! use yin_pitch::detector::PitchDetector;
//! use yin_pitch::YinConfig;
//!
//! fn main() -> yin_pitch::Result<()> {
//!     const SAMPLE_RATE: f64 = 44100.0;
//!     const SIZE: usize = 2048;
//!
//!     // Signal coming from some source (microphone, generated, etc...)
//!     let dt = 1.0 / SAMPLE_RATE;
//!     let freq = 300.0;
//!     let signal: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let mut detector = YINDetector::<f64>::new(YinConfig::new(SAMPLE_RATE, SIZE))?;
//!
//!     let pitch = detector.detect(&signal)?;
//!     if pitch.is_pitched {
//!         println!("Frequency: {}, Probability: {}", pitch.frequency, pitch.probability);
//!     }
//!     Ok(())
//! }
//! ```

pub use config::YinConfig;
pub use detector::internals::Pitch;
pub use error::{Result, YinError};

pub mod config;
pub mod detector;
pub mod error;
pub mod float;
pub mod utils;
