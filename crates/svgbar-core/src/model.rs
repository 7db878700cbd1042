//! Canonical chart data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::format::fmt_number;

/// Ordered attribute mapping attached to a bar or to the root element.
///
/// Insertion order is emission order, so callers get stable output.
pub type AttrMap = IndexMap<String, AttrValue>;

/// A single SVG attribute value: string, number, or boolean flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl AttrValue {
    /// Stringifies the value for attribute emission. Boolean `true` serializes as the flag-like
    /// string `"true"`; numbers follow the canonical numeric form (no `.0` on integral values).
    pub fn to_attr_string(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::Num(n) => fmt_number(*n),
            AttrValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Num(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// One normalized datum, ready for layout.
///
/// `label` and `value` are always present; `attrs`/`class` default to empty/absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub attrs: AttrMap,
    #[serde(default)]
    pub class: Option<String>,
}

impl BarRecord {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            attrs: AttrMap::new(),
            class: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_stringification() {
        assert_eq!(AttrValue::from("x").to_attr_string(), "x");
        assert_eq!(AttrValue::from(3.0).to_attr_string(), "3");
        assert_eq!(AttrValue::from(3.5).to_attr_string(), "3.5");
        assert_eq!(AttrValue::from(true).to_attr_string(), "true");
    }
}
