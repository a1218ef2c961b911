//! Shift budget shared by every driver in a run.

use crate::error::DispatchError;

/// Default shift: 12 hours, in minutes.
pub const SHIFT_DURATION: f64 = 12.0 * 60.0;

/// Working-time budget of a single driver shift.
///
/// Travel time equals Euclidean distance, so the duration is measured in the
/// same units as the input coordinates.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Shift;
///
/// assert_eq!(Shift::default().duration(), 720.0);
///
/// let short = Shift::new(480.0).unwrap();
/// assert!(short.fits(480.0));
/// assert!(!short.fits(480.5));
/// assert!(Shift::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shift {
    duration: f64,
}

impl Shift {
    /// Creates a shift with the given duration.
    ///
    /// Fails if the duration is non-finite or not positive.
    pub fn new(duration: f64) -> Result<Self, DispatchError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(DispatchError::InvalidShift { duration });
        }
        Ok(Self { duration })
    }

    /// Total working time available.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns `true` if `time` fits in the shift.
    pub fn fits(&self, time: f64) -> bool {
        time <= self.duration
    }
}

impl Default for Shift {
    fn default() -> Self {
        Self {
            duration: SHIFT_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_default() {
        assert_eq!(Shift::default().duration(), 720.0);
    }

    #[test]
    fn test_shift_invalid() {
        assert!(Shift::new(0.0).is_err());
        assert!(Shift::new(f64::NAN).is_err());
        assert!(Shift::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_shift_fits_boundary() {
        let s = Shift::default();
        assert!(s.fits(720.0));
        assert!(!s.fits(720.000_001));
    }
}
