//! # u-dispatch
//!
//! Shift-bounded load dispatching: assigns point-to-point delivery loads to
//! drivers with a greedy cheapest/closest heuristic, opening a new driver
//! shift whenever the current driver can no longer fit any load.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Shift, Load, Driver, DispatchPlan)
//! - [`distance`] — Euclidean distance primitives
//! - [`constructive`] — The greedy dispatcher
//! - [`evaluation`] — Plan replay and constraint checking
//! - [`text`] — Plain-text load input and plan output
//! - [`error`] — Error types

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod text;

pub use error::DispatchError;
