//! Plain-text load input and plan output.

mod reader;
mod writer;

pub use reader::{parse_loads, parse_record, read_loads};
pub use writer::write_plan;
