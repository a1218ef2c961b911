//! Plan evaluation: replayed route timing and constraint checking.

mod evaluator;

pub use evaluator::{DriverReport, PlanEvaluator, Violation, ViolationType};
