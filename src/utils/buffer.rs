use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

/// Distance between the starts of two consecutive analysis windows.
/// The overlap is clamped so that the hop is at least one sample.
pub fn hop_size(size: usize, overlap: usize) -> usize {
    size.saturating_sub(overlap).max(1)
}

/// Split `signal` into consecutive analysis windows of `size` samples, each
/// sharing `overlap` samples with the previous one. A trailing partial window
/// is not yielded.
///
/// ```rust
/// use yin_pitch::utils::buffer::frames;
///
/// let signal = [0., 1., 2., 3., 4., 5., 6.];
/// let windows: Vec<&[f64]> = frames(&signal, 4, 2).collect();
/// assert_eq!(windows, vec![&[0., 1., 2., 3.][..], &[2., 3., 4., 5.][..]]);
/// ```
pub fn frames<'a, T: Float>(
    signal: &'a [T],
    size: usize,
    overlap: usize,
) -> impl Iterator<Item = &'a [T]> + 'a {
    let hop = hop_size(size, overlap);
    // `windows` panics on a zero size; a zero-sized frame has nothing to analyse.
    let size = if size == 0 { signal.len() + 1 } else { size };
    signal.windows(size).step_by(hop)
}

/// Number of full windows [frames] yields for a signal of `len` samples.
pub fn frame_count(len: usize, size: usize, overlap: usize) -> usize {
    if size == 0 || len < size {
        return 0;
    }
    (len - size) / hop_size(size, overlap) + 1
}
