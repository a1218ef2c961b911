//! Distance and travel time primitives.
//!
//! Provides plain Euclidean costs between points; travel time equals distance.

mod euclidean;

pub use euclidean::{distance, nearest, squared_distance};
