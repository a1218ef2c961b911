//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading loads or dispatching them.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The load cannot be completed within one shift, even by a driver
    /// leaving the depot with no prior work.
    #[error("impossible load {id}: cost {cost} exceeds the {shift} minute shift")]
    InfeasibleLoad {
        /// Load ID.
        id: u64,
        /// Depot to pickup, delivery, and return to depot.
        cost: f64,
        /// Shift duration the load was checked against.
        shift: f64,
    },

    /// The input file could not be read.
    #[error("cannot read {}", path.display())]
    Io {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record has the load shape but its ID does not fit in a `u64`.
    #[error("line {line}: load id {id} is out of range")]
    InvalidRecord {
        /// 1-based line number in the input.
        line: usize,
        /// The ID digits as written.
        id: String,
    },

    /// A fresh driver cannot take any remaining load.
    #[error("load {id} cannot be assigned to any driver")]
    Unassignable {
        /// First load left in the pool.
        id: u64,
    },

    /// Shift duration must be finite and positive.
    #[error("invalid shift duration {duration}")]
    InvalidShift {
        /// Rejected duration.
        duration: f64,
    },
}
