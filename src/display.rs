//! Helpers for the bracketed record renderings used in logs and tests.

use serde_json::{Map, Value};
use std::fmt;

/// Writes an optional scalar field, `null` when absent.
pub(crate) fn opt<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    value: &Option<T>,
) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{}", v),
        None => write!(f, "null"),
    }
}

/// Writes an optional list field element-wise, `null` when absent.
pub(crate) fn opt_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    value: &Option<Vec<T>>,
) -> fmt::Result {
    let items = match value {
        Some(items) => items,
        None => return write!(f, "null"),
    };
    write!(f, "[")?;
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

/// Writes the optional row-major matrix field, `null` when absent.
pub(crate) fn opt_rows(
    f: &mut fmt::Formatter<'_>,
    value: &Option<Vec<Vec<f64>>>,
) -> fmt::Result {
    match value {
        Some(rows) => write!(f, "{:?}", rows),
        None => write!(f, "null"),
    }
}

/// Writes the additional-properties bag as `{name=value, ...}`.
pub(crate) fn props(f: &mut fmt::Formatter<'_>, bag: &Map<String, Value>) -> fmt::Result {
    write!(f, "{{")?;
    for (idx, (name, value)) in bag.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}={}", name, value)?;
    }
    write!(f, "}}")
}
