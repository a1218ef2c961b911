//! Domain model types for shift-bounded load dispatching.
//!
//! Provides the core abstractions: planar points, the shift budget, delivery
//! loads with precomputed costs, drivers that accumulate loads and working
//! time, and the plan that collects drivers after a run.

mod driver;
mod load;
mod plan;
mod point;
mod shift;

pub use driver::Driver;
pub use load::Load;
pub use plan::DispatchPlan;
pub use point::Point;
pub use shift::{Shift, SHIFT_DURATION};
