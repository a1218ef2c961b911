//! Constructive heuristics for building dispatch plans.
//!
//! - [`dispatch`] — Greedy cheapest/closest assignment under a shift budget, O(n²)

mod dispatcher;

pub use dispatcher::{dispatch, select_load, Dispatcher, Step};
