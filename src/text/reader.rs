//! Reader for the plain-text load format.
//!
//! One load per line:
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-9.100071078494038,-48.89301103772511) (-116.78442535062,76.80147371089922)
//! 2 (73.84,-3.8) (8.32,-3.82)
//! ```
//!
//! Header lines (containing `loadNumber`) and lines that do not match the
//! record shape are skipped. Trailing whitespace is allowed. A record whose
//! ID has too many digits for a `u64` is an error, not noise.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::DispatchError;
use crate::models::{Load, Point, Shift};

/// Marker that identifies the header line.
const HEADER_MARKER: &str = "loadNumber";

/// Parses one record line into `(id, start, end)`.
///
/// The shape is `<id> (<x1>,<y1>) (<x2>,<y2>)` where `id` is a non-negative
/// integer and each coordinate is an optional `-`, digits, and an optional
/// `.digits` fraction. Returns `None` for anything else, including an ID
/// that overflows a `u64`; [`parse_loads`] reports that case as an error.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::text::parse_record;
///
/// let (id, start, end) = parse_record("3 (25.24,19.07) (8.32,-3.82)  ").unwrap();
/// assert_eq!(id, 3);
/// assert_eq!(start, Point::new(25.24, 19.07));
/// assert_eq!(end, Point::new(8.32, -3.82));
///
/// assert!(parse_record("# comment").is_none());
/// assert!(parse_record("").is_none());
/// ```
pub fn parse_record(line: &str) -> Option<(u64, Point, Point)> {
    let (id, start, end) = split_record(line)?;
    Some((id.parse().ok()?, start, end))
}

/// Matches the record shape, leaving the all-digit ID unconverted.
fn split_record(line: &str) -> Option<(&str, Point, Point)> {
    let line = line.trim_end();
    let (id, rest) = line.split_once(' ')?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (start, rest) = parse_point(rest)?;
    let rest = rest.strip_prefix(' ')?;
    let (end, rest) = parse_point(rest)?;

    rest.is_empty().then_some((id, start, end))
}

/// Parses `(<x>,<y>)` at the front of `s`, returning the point and the rest.
fn parse_point(s: &str) -> Option<(Point, &str)> {
    let s = s.strip_prefix('(')?;
    let (inner, rest) = s.split_once(')')?;
    let (x, y) = inner.split_once(',')?;
    Some((Point::new(parse_coordinate(x)?, parse_coordinate(y)?), rest))
}

/// Parses `-?digits*(.digits+)?` with at least one digit.
fn parse_coordinate(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) {
        return None;
    }
    match fraction {
        Some(f) if f.is_empty() || !digits(f) => return None,
        None if whole.is_empty() => return None,
        _ => {}
    }

    s.parse().ok()
}

/// Parses every load in `text`, checking each against `shift`.
///
/// Fails on the first record whose ID does not fit in a `u64` and on the
/// first load that cannot fit in a shift.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Shift;
/// use u_dispatch::text::parse_loads;
///
/// let text = "loadNumber pickup dropoff\n1 (0,0) (10,0)\nnot a load\n2 (20,0) (30,0)\n";
/// let loads = parse_loads(text, &Shift::default()).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads[1].id(), 2);
/// ```
pub fn parse_loads(text: &str, shift: &Shift) -> Result<Vec<Load>, DispatchError> {
    let mut loads = Vec::new();

    for (number, line) in text.lines().enumerate() {
        if line.contains(HEADER_MARKER) {
            continue;
        }
        let Some((digits, start, end)) = split_record(line) else {
            trace!(line = number + 1, "skipping unrecognized line");
            continue;
        };
        let id = digits.parse::<u64>().map_err(|_| DispatchError::InvalidRecord {
            line: number + 1,
            id: digits.to_string(),
        })?;
        loads.push(Load::for_shift(id, start, end, shift)?);
    }

    Ok(loads)
}

/// Reads and parses the load file at `path`.
pub fn read_loads(path: impl AsRef<Path>, shift: &Shift) -> Result<Vec<Load>, DispatchError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DispatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loads = parse_loads(&text, shift)?;
    debug!(path = %path.display(), loads = loads.len(), "read loads");
    Ok(loads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_integers() {
        let (id, start, end) = parse_record("1 (0,0) (10,0)").expect("record");
        assert_eq!(id, 1);
        assert_eq!(start, Point::ORIGIN);
        assert_eq!(end, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_parse_record_fractional_forms() {
        let (_, start, end) = parse_record("7 (.5,-.25) (-3.75,12)").expect("record");
        assert_eq!(start, Point::new(0.5, -0.25));
        assert_eq!(end, Point::new(-3.75, 12.0));
    }

    #[test]
    fn test_parse_record_trailing_whitespace() {
        assert!(parse_record("1 (0,0) (10,0)   ").is_some());
        assert!(parse_record("1 (0,0) (10,0)\r\n").is_some());
        assert!(parse_record("1 (0,0) (10,0)\t").is_some());
    }

    #[test]
    fn test_parse_record_rejects_malformed() {
        for line in [
            "",
            "   ",
            "# 1 (0,0) (10,0)",
            " 1 (0,0) (10,0)",
            "-1 (0,0) (10,0)",
            "a (0,0) (10,0)",
            "1 (0,0)",
            "1 (0,0)  (10,0)",
            "1 (0, 0) (10,0)",
            "1 (0,0) (10,0) extra",
            "1 (5.,0) (10,0)",
            "1 (-,0) (10,0)",
            "1 (,0) (10,0)",
            "1 (1e3,0) (10,0)",
            "1 [0,0] [10,0]",
        ] {
            assert!(parse_record(line).is_none(), "accepted {line:?}");
        }
    }

    #[test]
    fn test_parse_loads_skips_header_and_noise() {
        let text = "loadNumber pickup dropoff\n\n1 (0,0) (10,0)\ngarbage\n2 (20,0) (30,0)\n";
        let loads = parse_loads(text, &Shift::default()).expect("parse");
        let ids: Vec<u64> = loads.iter().map(Load::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_parse_loads_infeasible() {
        let text = "1 (0,0) (10,0)\n2 (200,0) (-200,0)\n3 (1,1) (2,2)\n";
        match parse_loads(text, &Shift::default()) {
            Err(DispatchError::InfeasibleLoad { id, cost, .. }) => {
                assert_eq!(id, 2);
                assert!((cost - 800.0).abs() < 1e-10);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_loads_rejects_out_of_range_id() {
        let line = "18446744073709551616 (0,0) (10,0)";
        assert!(parse_record(line).is_none());

        let text = format!("1 (0,0) (10,0)\n{line}\n2 (20,0) (30,0)\n");
        match parse_loads(&text, &Shift::default()) {
            Err(DispatchError::InvalidRecord { line, id }) => {
                assert_eq!(line, 2);
                assert_eq!(id, "18446744073709551616");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_loads_accepts_largest_id() {
        let loads = parse_loads("18446744073709551615 (0,0) (10,0)", &Shift::default())
            .expect("parse");
        assert_eq!(loads[0].id(), u64::MAX);
    }

    #[test]
    fn test_read_loads_missing_file() {
        let err = read_loads("/definitely/not/here.txt", &Shift::default()).expect_err("missing");
        assert!(matches!(err, DispatchError::Io { .. }));
    }
}
