//! Plan evaluator that replays driver routes and checks the shift budget.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::distance::distance;
use crate::models::{DispatchPlan, Driver, Point, Shift};

/// Slack for replayed sums, which associate differently from the
/// dispatcher's `cost_of <= time_left` check.
const TOLERANCE: f64 = 1e-9;

/// A type of constraint violation in a dispatch plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationType {
    /// A driver could not have made it back to the depot within the shift.
    ShiftExceeded {
        /// Driver index in the plan.
        driver_index: usize,
        /// Load after which the budget was exceeded.
        load_id: u64,
        /// Working time plus the drive home from that load's drop-off.
        time: f64,
        /// Shift duration.
        shift: f64,
    },
    /// A load appears in more than one place.
    DuplicateLoad {
        /// Load ID.
        load_id: u64,
        /// Number of times it was assigned.
        count: usize,
    },
    /// An expected load was never assigned.
    MissingLoad {
        /// Load ID.
        load_id: u64,
    },
}

/// A constraint violation in a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Replayed timing for one driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverReport {
    /// Load IDs in assignment order.
    pub load_ids: Vec<u64>,
    /// Pickup and delivery legs.
    pub working_time: f64,
    /// Final leg from the last drop-off to the depot.
    pub return_time: f64,
    /// Whole shift, depot to depot.
    pub total_time: f64,
    /// Whether the driver had clocked out when the run ended.
    pub clocked_out: bool,
}

/// Evaluates plans by replaying each driver's route from the depot.
///
/// Every driver's total includes the drive home, even for a last driver the
/// dispatcher never clocked out.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::dispatch;
/// use u_dispatch::evaluation::PlanEvaluator;
/// use u_dispatch::models::{Load, Point, Shift};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap(),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(30.0, 0.0)).unwrap(),
/// ];
/// let plan = dispatch(loads).unwrap();
///
/// let evaluator = PlanEvaluator::new(Shift::default());
/// let (reports, violations) = evaluator.evaluate(&plan, &[1, 2]);
/// assert!(violations.is_empty());
/// assert!((reports[0].total_time - 60.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct PlanEvaluator {
    shift: Shift,
}

impl PlanEvaluator {
    /// Creates an evaluator for the given shift.
    pub fn new(shift: Shift) -> Self {
        Self { shift }
    }

    /// Replays one driver's route.
    ///
    /// Returns the report and any point at which the driver, heading home
    /// right after a drop-off, would have overrun the shift.
    pub fn evaluate_driver(
        &self,
        driver_index: usize,
        driver: &Driver,
    ) -> (DriverReport, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut location = Point::ORIGIN;
        let mut working_time = 0.0;

        for load in driver.loads() {
            working_time += distance(&location, &load.start());
            working_time += load.delivery_cost();
            location = load.end();

            let time = working_time + load.end_distance_from_depot();
            if !self.shift.fits(time - TOLERANCE) {
                violations.push(Violation::new(ViolationType::ShiftExceeded {
                    driver_index,
                    load_id: load.id(),
                    time,
                    shift: self.shift.duration(),
                }));
            }
        }

        let return_time = distance(&location, &Point::ORIGIN);
        let report = DriverReport {
            load_ids: driver.load_ids(),
            working_time,
            return_time,
            total_time: working_time + return_time,
            clocked_out: driver.is_clocked_out(),
        };
        (report, violations)
    }

    /// Evaluates an entire plan against the IDs it should contain.
    ///
    /// Returns one report per driver and every violation found.
    pub fn evaluate(
        &self,
        plan: &DispatchPlan,
        expected_ids: &[u64],
    ) -> (Vec<DriverReport>, Vec<Violation>) {
        let mut reports = Vec::with_capacity(plan.num_drivers());
        let mut all_violations = Vec::new();
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();

        for (idx, driver) in plan.drivers().iter().enumerate() {
            let (report, violations) = self.evaluate_driver(idx, driver);
            for &id in &report.load_ids {
                *counts.entry(id).or_insert(0) += 1;
            }
            reports.push(report);
            all_violations.extend(violations);
        }

        for (&load_id, &count) in &counts {
            if count > 1 {
                all_violations.push(Violation::new(ViolationType::DuplicateLoad {
                    load_id,
                    count,
                }));
            }
        }

        for &load_id in expected_ids {
            if !counts.contains_key(&load_id) {
                all_violations.push(Violation::new(ViolationType::MissingLoad { load_id }));
            }
        }

        (reports, all_violations)
    }

    /// Total depot-to-depot time over all reports.
    pub fn total_time(reports: &[DriverReport]) -> f64 {
        reports.iter().map(|r| r.total_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Load;

    fn load(id: u64, start: (f64, f64), end: (f64, f64)) -> Load {
        Load::new(id, Point::new(start.0, start.1), Point::new(end.0, end.1)).expect("feasible")
    }

    #[test]
    fn test_evaluate_driver_times() {
        let mut d = Driver::new();
        d.assign(load(1, (0.0, 0.0), (10.0, 0.0)));
        d.assign(load(2, (20.0, 0.0), (30.0, 0.0)));
        let evaluator = PlanEvaluator::new(Shift::default());
        let (report, violations) = evaluator.evaluate_driver(0, &d);
        assert!(violations.is_empty());
        assert_eq!(report.load_ids, vec![1, 2]);
        assert!((report.working_time - 30.0).abs() < 1e-10);
        assert!((report.return_time - 30.0).abs() < 1e-10);
        assert!((report.total_time - 60.0).abs() < 1e-10);
        assert!(!report.clocked_out);
        // Matches the driver's own accounting once it clocks out.
        d.clock_out();
        assert!((d.time_worked() - report.total_time).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_shift_exceeded() {
        let mut d = Driver::new();
        // Assigned without checking: 300 out and back twice.
        d.assign(load(1, (0.0, 0.0), (300.0, 0.0)));
        d.assign(load(2, (0.0, 0.0), (-300.0, 0.0)));
        let evaluator = PlanEvaluator::new(Shift::default());
        let (_, violations) = evaluator.evaluate_driver(3, &d);
        assert_eq!(violations.len(), 1);
        match &violations[0].kind {
            ViolationType::ShiftExceeded {
                driver_index,
                load_id,
                time,
                ..
            } => {
                assert_eq!(*driver_index, 3);
                assert_eq!(*load_id, 2);
                assert!((time - 1200.0).abs() < 1e-10);
            }
            other => panic!("unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_duplicates_and_missing() {
        let mut a = Driver::new();
        a.assign(load(1, (1.0, 0.0), (2.0, 0.0)));
        let mut b = Driver::new();
        b.assign(load(1, (1.0, 0.0), (2.0, 0.0)));
        let plan = DispatchPlan::new(vec![a, b]);

        let evaluator = PlanEvaluator::new(Shift::default());
        let (reports, violations) = evaluator.evaluate(&plan, &[1, 2]);
        assert_eq!(reports.len(), 2);
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateLoad {
            load_id: 1,
            count: 2
        })));
        assert!(violations.contains(&Violation::new(ViolationType::MissingLoad { load_id: 2 })));
    }

    #[test]
    fn test_violation_serialized_shape() {
        let v = Violation::new(ViolationType::MissingLoad { load_id: 4 });
        let json = serde_json::to_value(&v).expect("serialize");
        assert_eq!(json["kind"]["type"], "missing_load");
        assert_eq!(json["kind"]["load_id"], 4);
    }

    #[test]
    fn test_total_time() {
        let mut d = Driver::new();
        d.assign(load(1, (3.0, 4.0), (3.0, 4.0)));
        let plan = DispatchPlan::new(vec![d.clone(), d]);
        let (reports, _) = PlanEvaluator::new(Shift::default()).evaluate(&plan, &[1]);
        assert!((PlanEvaluator::total_time(&reports) - 20.0).abs() < 1e-10);
    }
}
