//! Dispatch plan produced by a run.

use std::fmt;

use super::Driver;

/// The drivers of a finished run, in creation order.
///
/// Renders as one line per driver listing its load IDs in assignment order,
/// e.g. `[1,2]`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchPlan, Driver, Load, Point};
///
/// let mut driver = Driver::new();
/// driver.assign(Load::new(4, Point::new(1.0, 0.0), Point::new(2.0, 0.0)).unwrap());
///
/// let plan = DispatchPlan::new(vec![driver, Driver::new()]);
/// assert_eq!(plan.num_drivers(), 2);
/// assert_eq!(plan.to_string(), "[4]\n[]\n");
/// ```
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    drivers: Vec<Driver>,
}

impl DispatchPlan {
    /// Creates a plan from drivers in creation order.
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    /// Drivers in creation order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.drivers.len()
    }

    /// Total number of loads assigned across all drivers.
    pub fn num_assigned(&self) -> usize {
        self.drivers.iter().map(Driver::len).sum()
    }

    /// Load IDs per driver.
    pub fn load_ids(&self) -> Vec<Vec<u64>> {
        self.drivers.iter().map(Driver::load_ids).collect()
    }
}

impl fmt::Display for DispatchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for driver in &self.drivers {
            write!(f, "[")?;
            for (i, load) in driver.loads().iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", load.id())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
