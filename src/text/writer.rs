//! Writer for dispatch plans.

use std::io::{self, Write};

use crate::models::DispatchPlan;

/// Writes one `[id1,id2,...]` line per driver, in creation order.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::dispatch;
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::text::write_plan;
///
/// let plan = dispatch(vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap(),
/// ]).unwrap();
///
/// let mut out = Vec::new();
/// write_plan(&mut out, &plan).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[1]\n");
/// ```
pub fn write_plan<W: Write>(mut writer: W, plan: &DispatchPlan) -> io::Result<()> {
    write!(writer, "{plan}")?;
    writer.flush()
}
