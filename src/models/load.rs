//! Delivery load type.

use super::{Point, Shift};
use crate::distance::distance;
use crate::error::DispatchError;

/// A point-to-point delivery job.
///
/// Costs that every driver needs are computed once at construction. A load
/// that no driver could finish within one shift is rejected here, so every
/// `Load` value is feasible for a fresh driver.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 0.0), Point::new(3.0, 4.0)).unwrap();
/// assert_eq!(load.id(), 1);
/// assert!((load.delivery_cost() - 5.0).abs() < 1e-10);
/// assert!((load.end_distance_from_depot() - 5.0).abs() < 1e-10);
///
/// // 400 out, 0 delivery, 400 back: longer than a 720 minute shift.
/// let far = Point::new(400.0, 0.0);
/// assert!(Load::new(2, far, far).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    id: u64,
    start: Point,
    end: Point,
    delivery_cost: f64,
    end_distance_from_depot: f64,
    depot_round_trip: f64,
}

impl Load {
    /// Creates a load checked against the default 720 minute shift.
    pub fn new(id: u64, start: Point, end: Point) -> Result<Self, DispatchError> {
        Self::for_shift(id, start, end, &Shift::default())
    }

    /// Creates a load checked against the given shift.
    ///
    /// Fails with [`DispatchError::InfeasibleLoad`] if driving depot → start →
    /// end → depot takes longer than the shift.
    pub fn for_shift(
        id: u64,
        start: Point,
        end: Point,
        shift: &Shift,
    ) -> Result<Self, DispatchError> {
        let delivery_cost = distance(&start, &end);
        let end_distance_from_depot = distance(&end, &Point::ORIGIN);
        let depot_round_trip =
            distance(&Point::ORIGIN, &start) + delivery_cost + end_distance_from_depot;

        if !shift.fits(depot_round_trip) {
            return Err(DispatchError::InfeasibleLoad {
                id,
                cost: depot_round_trip,
                shift: shift.duration(),
            });
        }

        Ok(Self {
            id,
            start,
            end,
            delivery_cost,
            end_distance_from_depot,
            depot_round_trip,
        })
    }

    /// Load ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Pickup location.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Drop-off location.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Time to drive from pickup to drop-off.
    pub fn delivery_cost(&self) -> f64 {
        self.delivery_cost
    }

    /// Time to drive from drop-off back to the depot.
    pub fn end_distance_from_depot(&self) -> f64 {
        self.end_distance_from_depot
    }

    /// Cost of this load for a driver waiting at the depot.
    pub fn depot_round_trip(&self) -> f64 {
        self.depot_round_trip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_derived_costs() {
        let load = Load::new(3, Point::new(20.0, 0.0), Point::new(30.0, 0.0)).expect("feasible");
        assert_eq!(load.id(), 3);
        assert_eq!(load.start(), Point::new(20.0, 0.0));
        assert_eq!(load.end(), Point::new(30.0, 0.0));
        assert!((load.delivery_cost() - 10.0).abs() < 1e-10);
        assert!((load.end_distance_from_depot() - 30.0).abs() < 1e-10);
        assert!((load.depot_round_trip() - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_exactly_fills_shift() {
        // 180 out, 360 across, 180 back = 720.
        let load = Load::new(1, Point::new(180.0, 0.0), Point::new(-180.0, 0.0));
        assert!(load.is_ok());
    }

    #[test]
    fn test_load_infeasible_reports_cost() {
        let err = Load::new(9, Point::new(200.0, 0.0), Point::new(-200.0, 0.0))
            .expect_err("too long");
        match err {
            DispatchError::InfeasibleLoad { id, cost, shift } => {
                assert_eq!(id, 9);
                assert!((cost - 800.0).abs() < 1e-10);
                assert_eq!(shift, 720.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_for_shorter_shift() {
        let shift = Shift::new(50.0).expect("valid");
        let start = Point::new(20.0, 0.0);
        let end = Point::new(30.0, 0.0);
        assert!(Load::for_shift(1, start, end, &shift).is_err());
        assert!(Load::new(1, start, end).is_ok());
    }
}
