use crate::float::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float> {
    pub x: T,
    pub y: T,
}

/// Fit a parabola through three equally spaced points and return its vertex.
///
/// Returns `None` when the points are collinear (the parabola degenerates to a
/// line) or the vertex is not finite.
pub fn quadratic_interpolation<T: Float>(
    left: Point<T>,
    center: Point<T>,
    right: Point<T>,
) -> Option<Point<T>> {
    let two = T::from_index(2);
    let denominator = two * center.y - left.y - right.y;
    if denominator == T::zero() {
        return None;
    }
    let shift = T::from_f64_lossy(0.5) * (right.y - left.y) / denominator;
    let x = center.x + shift;
    let y = center.y + T::from_f64_lossy(0.25) * (right.y - left.y) * shift;
    if x.is_finite() && y.is_finite() {
        Some(Point { x, y })
    } else {
        None
    }
}
