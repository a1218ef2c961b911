//! Planar coordinates.

/// A location in the plane.
///
/// The origin doubles as the depot every driver starts from and returns to.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(Point::default(), Point::ORIGIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The depot location `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}
