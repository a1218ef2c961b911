//! Euclidean travel costs.
//!
//! Travel time equals distance (unit speed), so these functions double as the
//! time model for every leg a driver drives.

use crate::models::Point;

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::distance;
/// use u_dispatch::models::Point;
///
/// let d = distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
///
/// Ordering by squared distance equals ordering by distance, so comparisons
/// skip the square root. Take `.sqrt()` when the magnitude is needed.
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Returns the index of the point in `candidates` nearest to `from`.
///
/// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
pub fn nearest(from: &Point, candidates: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in candidates.iter().enumerate() {
        let d = squared_distance(from, p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
