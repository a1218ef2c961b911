//! Greedy cheapest/closest load dispatcher.
//!
//! Builds driver shifts one at a time: the current driver repeatedly takes a
//! load it can still finish (including the drive home), and clocks out when
//! nothing fits. A fresh driver then starts from the depot. Runs until every
//! load is assigned.
//!
//! # Selection
//!
//! Among the loads the driver can still finish, two candidates compete:
//!
//! - *cheapest*: minimum `cost_of` (pickup leg + delivery + return home)
//! - *closest*: minimum distance from the driver to the pickup
//!
//! The cheapest load wins if its drop-off lies farther from the depot than the
//! closest load's drop-off; otherwise the closest wins. Loads that end far
//! away are taken early in the shift, while there is time to come back.
//!
//! # Complexity
//!
//! O(n²) where n = number of loads.

use tracing::{debug, info};

use crate::distance::nearest;
use crate::error::DispatchError;
use crate::models::{DispatchPlan, Driver, Load, Point, Shift};

/// Outcome of a single [`Dispatcher::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// A load was assigned to the driver at `driver`.
    Assigned {
        /// Driver index in creation order.
        driver: usize,
        /// ID of the assigned load.
        load_id: u64,
    },
    /// No remaining load fit, so the driver at `driver` went home.
    ClockedOut {
        /// Driver index in creation order.
        driver: usize,
    },
    /// Every load has been assigned.
    Done,
}

/// Picks the next load for `driver` from `pool`.
///
/// Returns the pool index of the chosen load, or `None` if the driver is
/// clocked out or no load fits in its remaining time. Ties on cost or
/// distance go to the load that comes first in `pool`.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::select_load;
/// use u_dispatch::models::{Driver, Load, Point};
///
/// let pool = vec![
///     Load::new(1, Point::new(5.0, 0.0), Point::new(6.0, 0.0)).unwrap(),
///     Load::new(2, Point::new(1.0, 0.0), Point::new(2.0, 0.0)).unwrap(),
/// ];
/// // Load 2 is both cheapest and closest.
/// assert_eq!(select_load(&Driver::new(), &pool), Some(1));
/// ```
pub fn select_load(driver: &Driver, pool: &[Load]) -> Option<usize> {
    if driver.is_clocked_out() {
        return None;
    }

    let time_left = driver.time_left();
    let mut feasible = Vec::new();
    let mut cheapest: Option<(usize, f64)> = None;

    for (i, load) in pool.iter().enumerate() {
        let cost = driver.cost_of(load);
        if cost > time_left {
            continue;
        }
        feasible.push(i);
        match cheapest {
            Some((_, best)) if cost >= best => {}
            _ => cheapest = Some((i, cost)),
        }
    }

    let (cheapest, _) = cheapest?;
    let starts: Vec<Point> = feasible.iter().map(|&i| pool[i].start()).collect();
    let closest = feasible[nearest(&driver.location(), &starts)?];

    if pool[cheapest].end_distance_from_depot() > pool[closest].end_distance_from_depot() {
        Some(cheapest)
    } else {
        Some(closest)
    }
}

/// Assigns a pool of loads to as many drivers as needed.
///
/// Owns the unassigned loads and the drivers created so far. The pool keeps
/// input order, so selection ties are stable for a given input.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::{Dispatcher, Step};
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap(),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(30.0, 0.0)).unwrap(),
/// ];
/// let mut dispatcher = Dispatcher::new(loads);
/// assert_eq!(dispatcher.step().unwrap(), Step::Assigned { driver: 0, load_id: 1 });
///
/// let plan = dispatcher.run().unwrap();
/// assert_eq!(plan.to_string(), "[1,2]\n");
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    shift: Shift,
    pool: Vec<Load>,
    drivers: Vec<Driver>,
}

impl Dispatcher {
    /// Creates a dispatcher for the default 720 minute shift.
    pub fn new(loads: Vec<Load>) -> Self {
        let shift = Shift::default();
        Self {
            shift,
            pool: loads,
            drivers: vec![Driver::with_shift(shift)],
        }
    }

    /// Creates a dispatcher for the given shift.
    ///
    /// Each load is checked against `shift`, since it may have been built for
    /// a longer one.
    pub fn with_shift(loads: Vec<Load>, shift: Shift) -> Result<Self, DispatchError> {
        if let Some(load) = loads.iter().find(|l| !shift.fits(l.depot_round_trip())) {
            return Err(DispatchError::InfeasibleLoad {
                id: load.id(),
                cost: load.depot_round_trip(),
                shift: shift.duration(),
            });
        }
        Ok(Self {
            shift,
            pool: loads,
            drivers: vec![Driver::with_shift(shift)],
        })
    }

    /// Loads not yet assigned, in input order.
    pub fn pending(&self) -> &[Load] {
        &self.pool
    }

    /// Advances by one assignment or one clock-out.
    ///
    /// Starts a new driver first if the current one has clocked out. Fails
    /// with [`DispatchError::Unassignable`] if a driver that has taken nothing
    /// cannot take any remaining load, since no later driver could either.
    pub fn step(&mut self) -> Result<Step, DispatchError> {
        if self.pool.is_empty() {
            return Ok(Step::Done);
        }

        if self.drivers.last().map_or(true, Driver::is_clocked_out) {
            self.drivers.push(Driver::with_shift(self.shift));
            debug!(driver = self.drivers.len() - 1, "starting new driver");
        }

        let index = self.drivers.len() - 1;
        let driver = &mut self.drivers[index];

        match select_load(driver, &self.pool) {
            Some(chosen) => {
                let load = self.pool.remove(chosen);
                let load_id = load.id();
                driver.assign(load);
                debug!(
                    driver = index,
                    load = load_id,
                    time_worked = driver.time_worked(),
                    "assigned load"
                );
                Ok(Step::Assigned {
                    driver: index,
                    load_id,
                })
            }
            None if driver.is_empty() => Err(DispatchError::Unassignable {
                id: self.pool[0].id(),
            }),
            None => {
                driver.clock_out();
                debug!(
                    driver = index,
                    loads = driver.len(),
                    time_worked = driver.time_worked(),
                    "driver clocked out"
                );
                Ok(Step::ClockedOut { driver: index })
            }
        }
    }

    /// Steps until every load is assigned and returns the plan.
    ///
    /// The last driver is left as is; it does not clock out.
    pub fn run(mut self) -> Result<DispatchPlan, DispatchError> {
        while self.step()? != Step::Done {}

        let plan = self.into_plan();
        info!(
            drivers = plan.num_drivers(),
            loads = plan.num_assigned(),
            "dispatch finished"
        );
        Ok(plan)
    }

    /// Stops dispatching and returns the drivers created so far.
    pub fn into_plan(self) -> DispatchPlan {
        DispatchPlan::new(self.drivers)
    }
}

/// Assigns `loads` to drivers working the default shift.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::dispatch;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap(),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(30.0, 0.0)).unwrap(),
/// ];
/// let plan = dispatch(loads).unwrap();
/// assert_eq!(plan.load_ids(), vec![vec![1, 2]]);
/// ```
pub fn dispatch(loads: Vec<Load>) -> Result<DispatchPlan, DispatchError> {
    Dispatcher::new(loads).run()
}
