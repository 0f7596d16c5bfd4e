//! Sanitization of untrusted universe documents.
//!
//! [`sanitize`] turns any JSON value into a well-formed [`Universe`]. It
//! never fails: entities without a usable name are dropped, malformed fields
//! fall back to their defaults, and resource caps are applied in the same
//! pass so an attacker-sized document is cut down before any matching work.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{BusinessObject, Class, Join, Metadata, Table, Universe};

/// Metadata name of the canonical empty universe (non-object document).
pub const EMPTY_UNIVERSE_NAME: &str = "Univers";

/// Metadata name used when `metadata` is missing or malformed.
pub const UNNAMED_UNIVERSE_NAME: &str = "Univers sans nom";

/// Resource caps applied while sanitizing.
///
/// The input document is attacker-controlled, so sequences and strings are
/// capped before the O(tokens × entities) match pass runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_classes: usize,
    pub max_objects_per_class: usize,
    pub max_tables: usize,
    pub max_joins: usize,
    /// Cap in chars for every string field.
    pub max_string_len: usize,
    /// Cap on distinct question tokens considered by the matcher.
    pub max_question_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_classes: 1_000,
            max_objects_per_class: 1_000,
            max_tables: 1_000,
            max_joins: 1_000,
            max_string_len: 2_048,
            max_question_tokens: 64,
        }
    }
}

/// The canonical empty universe.
pub fn empty_universe() -> Universe {
    Universe {
        metadata: Metadata {
            name: EMPTY_UNIVERSE_NAME.to_string(),
            description: None,
        },
        classes: Vec::new(),
        tables: Vec::new(),
        joins: Vec::new(),
    }
}

/// Sanitize a raw document with default limits.
pub fn sanitize(raw: &Value) -> Universe {
    sanitize_with_limits(raw, &Limits::default())
}

/// Sanitize a raw document.
///
/// Total over any JSON value, and idempotent: re-sanitizing the serialized
/// output is a no-op.
pub fn sanitize_with_limits(raw: &Value, limits: &Limits) -> Universe {
    let Some(doc) = raw.as_object() else {
        return empty_universe();
    };

    Universe {
        metadata: sanitize_metadata(doc.get("metadata"), limits),
        classes: sequence(doc.get("classes"), limits.max_classes)
            .filter_map(|value| sanitize_class(value, limits))
            .collect(),
        tables: sequence(doc.get("tables"), limits.max_tables)
            .filter_map(|value| sanitize_table(value, limits))
            .collect(),
        joins: sequence(doc.get("joins"), limits.max_joins)
            .filter_map(|value| sanitize_join(value, limits))
            .collect(),
    }
}

fn sanitize_metadata(value: Option<&Value>, limits: &Limits) -> Metadata {
    let Some(map) = value.and_then(Value::as_object) else {
        return Metadata {
            name: UNNAMED_UNIVERSE_NAME.to_string(),
            description: None,
        };
    };

    Metadata {
        name: string_field(map.get("name"), limits)
            .unwrap_or_else(|| UNNAMED_UNIVERSE_NAME.to_string()),
        description: string_field(map.get("description"), limits),
    }
}

fn sanitize_class(value: &Value, limits: &Limits) -> Option<Class> {
    let map = value.as_object()?;
    let name = string_field(map.get("name"), limits)?;

    Some(Class {
        name,
        description: string_field(map.get("description"), limits),
        objects: sequence(map.get("objects"), limits.max_objects_per_class)
            .filter_map(|value| sanitize_object(value, limits))
            .collect(),
    })
}

fn sanitize_object(value: &Value, limits: &Limits) -> Option<BusinessObject> {
    let map = value.as_object()?;
    let name = string_field(map.get("name"), limits)?;

    Some(BusinessObject {
        name,
        kind: string_field(map.get("type"), limits),
        description: string_field(map.get("description"), limits),
        sql: string_field(map.get("sql"), limits),
    })
}

fn sanitize_table(value: &Value, limits: &Limits) -> Option<Table> {
    let map = value.as_object()?;
    let name = string_field(map.get("name"), limits)?;

    Some(Table {
        name,
        description: string_field(map.get("description"), limits),
    })
}

fn sanitize_join(value: &Value, limits: &Limits) -> Option<Join> {
    let map = value.as_object()?;
    let name = string_field(map.get("name"), limits)?;

    Some(Join {
        name,
        from: string_field(map.get("from"), limits).unwrap_or_default(),
        to: string_field(map.get("to"), limits).unwrap_or_default(),
        expression: string_field(map.get("expression"), limits),
    })
}

/// Capped iterator over the elements of an optional JSON array.
///
/// A missing or non-array value behaves as an empty sequence.
fn sequence<'a>(value: Option<&'a Value>, cap: usize) -> impl Iterator<Item = &'a Value> {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
        .iter()
        .take(cap)
}

/// A trimmed, length-capped string field.
///
/// Non-string values are treated as absent, never stringified. Returns `None`
/// for blank strings so callers can drop nameless entities with `?`.
fn string_field(value: Option<&Value>, limits: &Limits) -> Option<String> {
    let text = value?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    // Trim again after capping: the cut can land right after whitespace, and
    // a trailing space would break idempotence.
    let capped = truncate_chars(text, limits.max_string_len).trim_end();
    if capped.is_empty() {
        return None;
    }
    Some(capped.to_string())
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
