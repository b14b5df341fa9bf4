use crate::float::Float;
use crate::utils::buffer::new_real_buffer;
use crate::utils::peak::{quadratic_interpolation, Point};

/// Frequency reported when no pitch is detected.
pub const UNPITCHED_FREQUENCY: f64 = -1.0;

/// Outcome of a single detection.
///
/// When no lag falls under the threshold, `frequency` is `-1`,
/// `probability` is `0` and `is_pitched` is `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch<T>
where
    T: Float,
{
    pub frequency: T,
    pub probability: T,
    pub is_pitched: bool,
}

impl<T> Pitch<T>
where
    T: Float,
{
    pub fn unpitched() -> Self {
        Pitch {
            frequency: T::from_f64_lossy(UNPITCHED_FREQUENCY),
            probability: T::zero(),
            is_pitched: false,
        }
    }
}

/// Data structure to hold the scratch buffer needed for pitch computation.
/// It is allocated once and overwritten on every detection.
pub struct DetectorInternals<T>
where
    T: Float,
{
    pub size: usize,
    pub scratch: Vec<T>,
}

impl<T> DetectorInternals<T>
where
    T: Float,
{
    pub fn new(size: usize) -> Self {
        DetectorInternals {
            size,
            scratch: new_real_buffer(size / 2),
        }
    }
}

/// Compute the difference function, _d(t)_, of `signal` into `result`. For a window
/// size of _w_ = `result.len()` and a signal _x=(x_0,x_1,...)_, this is defined by
///
///  > d(t) = sum_{i=0}^{w-1} (x_i - x_{i+t})^2
///
/// _d(0)_ is set to zero. `signal` must hold at least `2 * result.len()` samples.
pub fn difference<T: Float>(signal: &[T], result: &mut [T]) {
    let window_size = result.len();
    assert!(
        2 * window_size <= signal.len(),
        "The window size cannot be more than half the signal length"
    );

    let window = &signal[..window_size];
    result.iter_mut().enumerate().for_each(|(tau, r)| {
        *r = if tau == 0 {
            T::zero()
        } else {
            window
                .iter()
                .zip(&signal[tau..tau + window_size])
                .map(|(&a, &b)| (a - b) * (a - b))
                .sum()
        };
    });
}

/// Calculate the "cumulative mean normalized difference function" as
/// specified in the YIN paper. If _d(t)_ is the difference function,
/// compute _d'(0) = 1_ and for _t > 0_
///
///  > d'(t) = d(t) / [ (1/t) * sum_{i=1}^t d(i) ]
///
/// While the running sum is still zero (a signal identical to its shifted copy, such
/// as silence) there is no evidence of periodicity and _d'(t)_ is set to 1.
pub fn cumulative_mean_normalized_difference<T: Float>(square_error: &mut [T]) {
    let first = match square_error.first_mut() {
        Some(first) => first,
        None => return,
    };
    *first = T::one();

    let mut sum = T::zero();
    square_error
        .iter_mut()
        .enumerate()
        .skip(1)
        .for_each(|(tau, a)| {
            sum = sum + *a;
            *a = if sum == T::zero() {
                T::one()
            } else {
                *a * T::from_index(tau) / sum
            };
        });
}

/// Find the first dip of `normalized` below `threshold` and walk down to its bottom.
/// Returns the lag at the bottom of the dip together with the probability that the
/// signal is periodic at that lag, `1 - d'(t)`.
///
/// Lags 0 and 1 are never candidates.
pub fn absolute_threshold<T: Float>(normalized: &[T], threshold: T) -> Option<(usize, T)> {
    let mut tau = (2..normalized.len()).find(|&tau| normalized[tau] < threshold)?;
    while tau + 1 < normalized.len() && normalized[tau + 1] < normalized[tau] {
        tau += 1;
    }
    Some((tau, T::one() - normalized[tau]))
}

/// Refine `tau` with parabolic interpolation through its two neighbours. At either
/// end of `normalized` the smaller of `tau` and its only neighbour is chosen
/// instead, and a flat neighbourhood keeps `tau` as is.
pub fn parabolic_interpolation<T: Float>(normalized: &[T], tau: usize) -> T {
    let x0 = if tau < 1 { tau } else { tau - 1 };
    let x2 = if tau + 1 < normalized.len() { tau + 1 } else { tau };

    let nearest = |neighbour: usize| {
        if normalized[tau] <= normalized[neighbour] {
            T::from_index(tau)
        } else {
            T::from_index(neighbour)
        }
    };

    if x0 == tau {
        return nearest(x2);
    }
    if x2 == tau {
        return nearest(x0);
    }

    let point = |x: usize| Point {
        x: T::from_index(x),
        y: normalized[x],
    };
    quadratic_interpolation(point(x0), point(tau), point(x2))
        .map(|vertex| vertex.x)
        .unwrap_or_else(|| T::from_index(tau))
}
