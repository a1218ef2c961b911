//! Driver state during dispatching.

use super::{Load, Point, Shift};
use crate::distance::squared_distance;

/// A driver working a single shift.
///
/// Starts at the depot with no loads. Each assigned load moves the driver to
/// its drop-off point and charges the pickup and delivery legs; the leg back
/// to the depot is only charged on [`clock_out`](Driver::clock_out).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Driver, Load, Point};
///
/// let mut driver = Driver::new();
/// let load = Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
///
/// assert!((driver.cost_of(&load) - 20.0).abs() < 1e-10);
/// assert!(driver.cost_of(&load) <= driver.time_left());
///
/// driver.assign(load);
/// assert_eq!(driver.location(), Point::new(10.0, 0.0));
/// assert!((driver.time_worked() - 10.0).abs() < 1e-10);
///
/// driver.clock_out();
/// assert!(driver.is_clocked_out());
/// assert!((driver.time_worked() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    shift: Shift,
    loads: Vec<Load>,
    location: Point,
    time_worked: f64,
    clocked_out: bool,
}

impl Driver {
    /// Creates a driver at the depot working the default shift.
    pub fn new() -> Self {
        Self::with_shift(Shift::default())
    }

    /// Creates a driver at the depot working the given shift.
    pub fn with_shift(shift: Shift) -> Self {
        Self {
            shift,
            loads: Vec::new(),
            location: Point::ORIGIN,
            time_worked: 0.0,
            clocked_out: false,
        }
    }

    /// Squared distance from the current location to `destination`.
    pub fn squared_distance_to(&self, destination: &Point) -> f64 {
        squared_distance(&self.location, destination)
    }

    /// Squared distance from the current location to the depot.
    pub fn squared_distance_to_depot(&self) -> f64 {
        self.squared_distance_to(&Point::ORIGIN)
    }

    /// Time needed to take `load` next and then drive home.
    ///
    /// The return leg is included so a driver never accepts a load that would
    /// strand them, but [`assign`](Driver::assign) does not charge it.
    pub fn cost_of(&self, load: &Load) -> f64 {
        self.squared_distance_to(&load.start()).sqrt()
            + load.delivery_cost()
            + load.end_distance_from_depot()
    }

    /// Remaining working time in the shift.
    pub fn time_left(&self) -> f64 {
        self.shift.duration() - self.time_worked
    }

    /// Assigns `load` to this driver.
    ///
    /// Charges the pickup and delivery legs and moves the driver to the
    /// drop-off. The caller must have checked that
    /// [`cost_of`](Driver::cost_of) fits in [`time_left`](Driver::time_left).
    pub fn assign(&mut self, load: Load) {
        let arrival = self.squared_distance_to(&load.start()).sqrt();
        self.time_worked += arrival;
        self.time_worked += load.delivery_cost();
        self.location = load.end();
        self.loads.push(load);
    }

    /// Drives back to the depot and ends the shift.
    ///
    /// Call at most once; the location is left at the last drop-off, so a
    /// second call charges the return leg twice.
    pub fn clock_out(&mut self) {
        self.time_worked += self.squared_distance_to_depot().sqrt();
        self.clocked_out = true;
    }

    /// Loads in assignment order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Load IDs in assignment order.
    pub fn load_ids(&self) -> Vec<u64> {
        self.loads.iter().map(Load::id).collect()
    }

    /// Current position.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Time worked so far.
    pub fn time_worked(&self) -> f64 {
        self.time_worked
    }

    /// Returns `true` once the driver has returned to the depot for good.
    pub fn is_clocked_out(&self) -> bool {
        self.clocked_out
    }

    /// Number of assigned loads.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if no load has been assigned.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
