//! Attribute and class source merging.
//!
//! Attribute sources arrive in a few shapes: a mapping, an ordered list of `[key, value]` pairs,
//! or a mixed list that may also contain bare string tokens (treated as boolean-true flags) and
//! nested mappings. Everything is normalized into one canonical [`AttrMap`].

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{AttrMap, AttrValue};

fn scalar_attr_value(v: &Value) -> Result<AttrValue> {
    match v {
        Value::String(s) => Ok(AttrValue::Str(s.clone())),
        Value::Number(n) => n
            .as_f64()
            .map(AttrValue::Num)
            .ok_or_else(|| Error::option(format!("attribute value out of range: {n}"))),
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        other => Err(Error::option(format!(
            "attribute values must be scalar, got {other}"
        ))),
    }
}

fn attr_key(v: &Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::option(format!(
            "attribute keys must be strings, got {other}"
        ))),
    }
}

/// Normalizes one attribute source into an ordered mapping.
pub fn normalize_attr_source(source: &Value) -> Result<AttrMap> {
    let mut out = AttrMap::new();
    match source {
        Value::Object(map) => {
            for (key, value) in map {
                out.insert(key.clone(), scalar_attr_value(value)?);
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    // Bare tokens are boolean-true flags.
                    Value::String(token) => {
                        out.insert(token.clone(), AttrValue::Bool(true));
                    }
                    Value::Object(map) => {
                        for (key, value) in map {
                            out.insert(key.clone(), scalar_attr_value(value)?);
                        }
                    }
                    Value::Array(pair) if pair.len() == 2 => {
                        out.insert(attr_key(&pair[0])?, scalar_attr_value(&pair[1])?);
                    }
                    other => {
                        return Err(Error::option(format!(
                            "attribute list entries must be pairs, mappings, or bare tokens, got {other}"
                        )));
                    }
                }
            }
        }
        other => {
            return Err(Error::option(format!(
                "attribute source must be a mapping or a list, got {other}"
            )));
        }
    }
    Ok(out)
}

/// Merges item-level attributes over global ones. Item entries overwrite same-key global
/// entries; the global insertion position is kept on overwrite.
pub fn merge_attrs(global: &AttrMap, item: &AttrMap) -> AttrMap {
    let mut out = global.clone();
    for (key, value) in item {
        out.insert(key.clone(), value.clone());
    }
    out
}

fn collect_class_tokens(source: &Value, out: &mut Vec<String>) -> Result<()> {
    match source {
        Value::Null => {}
        Value::String(s) => {
            let token = s.trim();
            if !token.is_empty() {
                out.push(token.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_class_tokens(item, out)?;
            }
        }
        other => {
            return Err(Error::option(format!(
                "class source must be a string or a list of strings, got {other}"
            )));
        }
    }
    Ok(())
}

/// Flattens a class source (string or arbitrarily nested list of strings) into tokens,
/// dropping blank entries.
pub fn normalize_class_source(source: &Value) -> Result<Vec<String>> {
    let mut out = Vec::new();
    collect_class_tokens(source, &mut out)?;
    Ok(out)
}

/// Concatenates global and item class tokens with single spaces, global first. Classes are
/// additive, so this never overrides.
pub fn merge_class(global: &[String], item: &[String]) -> Option<String> {
    let joined = global
        .iter()
        .chain(item.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Parses per-item options into `(attrs, class)`.
///
/// A mapping with an `attrs` or `class` key has those extracted explicitly; any other
/// mapping or list is treated wholesale as an attributes source.
pub fn parse_item_opts(opts: &Value) -> Result<(AttrMap, Option<String>)> {
    match opts {
        Value::Null => Ok((AttrMap::new(), None)),
        Value::Object(map) if map.contains_key("attrs") || map.contains_key("class") => {
            let attrs = match map.get("attrs") {
                Some(v) => normalize_attr_source(v)?,
                None => AttrMap::new(),
            };
            let class = match map.get("class") {
                Some(v) => {
                    let tokens = normalize_class_source(v)?;
                    merge_class(&tokens, &[])
                }
                None => None,
            };
            Ok((attrs, class))
        }
        other => Ok((normalize_attr_source(other)?, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_attr_source_mapping_keeps_order() {
        let attrs = normalize_attr_source(&json!({"data-b": 1, "data-a": "x"})).unwrap();
        let keys: Vec<_> = attrs.keys().cloned().collect();
        assert_eq!(keys, vec!["data-b", "data-a"]);
        assert_eq!(attrs["data-b"], AttrValue::Num(1.0));
        assert_eq!(attrs["data-a"], AttrValue::Str("x".to_string()));
    }

    #[test]
    fn normalize_attr_source_mixed_list() {
        let attrs = normalize_attr_source(&json!([
            ["data-k", "v"],
            "hidden",
            {"data-n": 2}
        ]))
        .unwrap();
        assert_eq!(attrs["data-k"], AttrValue::Str("v".to_string()));
        assert_eq!(attrs["hidden"], AttrValue::Bool(true));
        assert_eq!(attrs["data-n"], AttrValue::Num(2.0));
    }

    #[test]
    fn normalize_attr_source_rejects_scalars() {
        let err = normalize_attr_source(&json!(42)).unwrap_err();
        assert!(matches!(err, Error::InvalidOptionValue { .. }));
        let err = normalize_attr_source(&json!([["only-key"]])).unwrap_err();
        assert!(matches!(err, Error::InvalidOptionValue { .. }));
    }

    #[test]
    fn merge_attrs_item_overrides_global_in_place() {
        let global = normalize_attr_source(&json!({"data-k": "g", "data-x": 1})).unwrap();
        let item = normalize_attr_source(&json!({"data-k": "i"})).unwrap();
        let merged = merge_attrs(&global, &item);
        let keys: Vec<_> = merged.keys().cloned().collect();
        assert_eq!(keys, vec!["data-k", "data-x"]);
        assert_eq!(merged["data-k"], AttrValue::Str("i".to_string()));
        assert_eq!(merged["data-x"], AttrValue::Num(1.0));
    }

    #[test]
    fn class_sources_flatten_and_drop_blanks() {
        let tokens = normalize_class_source(&json!(["a", ["b", "  "], "", "c"])).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_class_is_additive_global_first() {
        assert_eq!(
            merge_class(&["g".to_string()], &["i".to_string()]),
            Some("g i".to_string())
        );
        assert_eq!(merge_class(&[], &[]), None);
    }

    #[test]
    fn parse_item_opts_recognizes_attrs_and_class_keys() {
        let (attrs, class) =
            parse_item_opts(&json!({"attrs": {"data-k": "v"}, "class": "special"})).unwrap();
        assert_eq!(attrs["data-k"], AttrValue::Str("v".to_string()));
        assert_eq!(class, Some("special".to_string()));
    }

    #[test]
    fn parse_item_opts_treats_plain_mapping_as_attrs() {
        let (attrs, class) = parse_item_opts(&json!({"data-k": "v"})).unwrap();
        assert_eq!(attrs["data-k"], AttrValue::Str("v".to_string()));
        assert_eq!(class, None);
    }
}
