//! Data-shape normalization.
//!
//! Raw chart data arrives in one of three shapes and leaves as one ordered `Vec<BarRecord>`:
//!
//! 1. a list of `[label, value]` pairs or `[label, value, item_opts]` tuples (input order),
//! 2. a list of bare numbers (labels are 1-based indices, input order),
//! 3. a mapping from label to a bare value or a `[value, item_opts]` pair (sorted by label,
//!    since unordered maps have no natural order).
//!
//! Shape is resolved by inspecting the container and its first element, not by per-item
//! duck-typing; mixing tuple and non-tuple items is an error.

use serde_json::Value;

use crate::attrs::parse_item_opts;
use crate::error::{Error, Result};
use crate::format::fmt_number;
use crate::model::BarRecord;

/// Coerces a raw value entry to `f64`. Numbers pass through; numeric-looking strings parse.
pub fn coerce_value(v: &Value) -> Result<f64> {
    match v {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::numeric(format!("value out of range: {n}"))),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(parsed),
            _ => Err(Error::numeric(format!("unparseable value string: {s:?}"))),
        },
        // Shape validation normally rejects these earlier; kept for robustness.
        other => Err(Error::numeric(format!("unsupported value type: {other}"))),
    }
}

fn stringify_label(v: &Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n
            .as_f64()
            .map(fmt_number)
            .unwrap_or_else(|| n.to_string())),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::shape(format!("labels must be scalar, got {other}"))),
    }
}

fn record_from_tuple(tuple: &[Value]) -> Result<BarRecord> {
    let (label, value, opts) = match tuple {
        [label, value] => (label, value, None),
        [label, value, opts] => (label, value, Some(opts)),
        _ => {
            return Err(Error::shape(format!(
                "tuples must have 2 or 3 elements, got {}",
                tuple.len()
            )));
        }
    };
    let (attrs, class) = match opts {
        Some(o) => parse_item_opts(o)?,
        None => Default::default(),
    };
    Ok(BarRecord {
        label: stringify_label(label)?,
        value: coerce_value(value)?,
        attrs,
        class,
    })
}

fn normalize_list(items: &[Value]) -> Result<Vec<BarRecord>> {
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };

    if first.is_array() {
        // Tuple shape: homogeneity required.
        items
            .iter()
            .map(|item| match item {
                Value::Array(tuple) => record_from_tuple(tuple),
                other => Err(Error::shape(format!(
                    "list mixes tuple and non-tuple items: {other}"
                ))),
            })
            .collect()
    } else {
        // Bare-number shape: labels are stringified 1-based indices.
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if item.is_array() {
                    return Err(Error::shape(format!(
                        "list mixes tuple and non-tuple items: {item}"
                    )));
                }
                Ok(BarRecord::new((i + 1).to_string(), coerce_value(item)?))
            })
            .collect()
    }
}

fn normalize_map(map: &serde_json::Map<String, Value>) -> Result<Vec<BarRecord>> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::with_capacity(entries.len());
    for (label, entry) in entries {
        let record = match entry {
            Value::Array(pair) => {
                if pair.len() != 2 {
                    return Err(Error::shape(format!(
                        "mapping entries must be a bare value or a [value, opts] pair, got {} elements",
                        pair.len()
                    )));
                }
                let (attrs, class) = parse_item_opts(&pair[1])?;
                BarRecord {
                    label: label.clone(),
                    value: coerce_value(&pair[0])?,
                    attrs,
                    class,
                }
            }
            value => BarRecord::new(label.clone(), coerce_value(value)?),
        };
        out.push(record);
    }
    Ok(out)
}

/// Normalizes raw chart data into an ordered record sequence.
///
/// Empty input is valid and yields an empty sequence (the empty-state render path).
pub fn normalize(data: &Value) -> Result<Vec<BarRecord>> {
    let records = match data {
        Value::Array(items) => normalize_list(items)?,
        Value::Object(map) => normalize_map(map)?,
        other => {
            return Err(Error::shape(format!(
                "expected a list of pairs, a list of numbers, or a mapping, got {other}"
            )));
        }
    };
    tracing::trace!(records = records.len(), "normalized chart data");
    Ok(records)
}
