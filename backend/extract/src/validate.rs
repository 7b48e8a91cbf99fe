//! Shape-parameterized structural validation.
//!
//! One validator serves both document shapes; the shape is an explicit
//! [`DocKind`] parameter rather than a per-endpoint copy of the logic.
//! Checks are structural only (presence, kind, enum membership) — nothing
//! here judges whether a recipe is cookable or an invoice adds up.
//!
//! Fail-closed: an invoice with one malformed line item invalidates the whole
//! record. Every violation found is reported, not just the first.

use harvest_core::{DocKind, ItemStatus, ScanRecord, Violation};
use serde_json::{Map, Value};

/// Validate a parsed document against a target shape.
///
/// Returns the typed record on success, or the full ordered list of
/// violations. Pure and stateless: the same document always yields the same
/// outcome.
pub fn validate(doc: &Value, kind: DocKind) -> Result<ScanRecord, Vec<Violation>> {
    let Some(map) = doc.as_object() else {
        return Err(vec![Violation::Structural {
            message: format!("root is not an object, got {}", kind_of(doc)),
        }]);
    };

    let violations = match kind {
        DocKind::Recipe => check_recipe(map),
        DocKind::Invoice => check_invoice(map),
    };
    if !violations.is_empty() {
        return Err(violations);
    }

    // The checks above guarantee the mapping succeeds; a failure here means
    // the checks and the record types have drifted apart.
    let mapped = match kind {
        DocKind::Recipe => serde_json::from_value(doc.clone()).map(ScanRecord::Recipe),
        DocKind::Invoice => serde_json::from_value(doc.clone()).map(ScanRecord::Invoice),
    };
    mapped.map_err(|err| {
        vec![Violation::Structural { message: format!("record mapping failed: {err}") }]
    })
}

fn check_recipe(map: &Map<String, Value>) -> Vec<Violation> {
    let mut out = Vec::new();

    require_string(map, "title", "", &mut out);

    if let Some(ingredients) = require_list(map, "ingredients", "", &mut out) {
        for (i, entry) in ingredients.iter().enumerate() {
            let path = format!("ingredients[{i}]");
            let Some(obj) = entry.as_object() else {
                out.push(wrong_type(&path, "an object", entry));
                continue;
            };
            require_string(obj, "item", &path, &mut out);
            // `amount` and `notes` default to empty when the page has none,
            // but must be strings when present.
            optional_string(obj, "amount", &path, &mut out);
            optional_string(obj, "notes", &path, &mut out);
        }
    }

    if let Some(instructions) = require_list(map, "instructions", "", &mut out) {
        for (i, step) in instructions.iter().enumerate() {
            if !step.is_string() {
                out.push(wrong_type(&format!("instructions[{i}]"), "a string", step));
            }
        }
    }

    out
}

fn check_invoice(map: &Map<String, Value>) -> Vec<Violation> {
    let mut out = Vec::new();

    require_number(map, "invoice_id", "", &mut out);
    require_string(map, "vendor", "", &mut out);
    require_string(map, "date", "", &mut out);
    require_number(map, "totalAmount", "", &mut out);
    require_string(map, "confirmedAt", "", &mut out);

    if let Some(items) = require_list(map, "items", "", &mut out) {
        for (i, entry) in items.iter().enumerate() {
            let path = format!("items[{i}]");
            let Some(obj) = entry.as_object() else {
                out.push(wrong_type(&path, "an object", entry));
                continue;
            };
            require_number(obj, "id", &path, &mut out);
            require_string(obj, "name", &path, &mut out);
            require_number(obj, "quantity", &path, &mut out);
            require_string(obj, "unit", &path, &mut out);
            require_number(obj, "price", &path, &mut out);
            check_status(obj, &path, &mut out);
        }
    }

    out
}

fn check_status(obj: &Map<String, Value>, prefix: &str, out: &mut Vec<Violation>) {
    let path = field_path(prefix, "status");
    match obj.get("status") {
        None => out.push(Violation::MissingField { field: path }),
        Some(Value::String(s)) => {
            if ItemStatus::parse(s).is_none() {
                out.push(Violation::InvalidEnum { field: path, value: s.clone() });
            }
        }
        Some(other) => out.push(wrong_type(&path, "a string", other)),
    }
}

fn require_string(
    map: &Map<String, Value>,
    name: &str,
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    match map.get(name) {
        None => out.push(Violation::MissingField { field: field_path(prefix, name) }),
        Some(v) if !v.is_string() => out.push(wrong_type(&field_path(prefix, name), "a string", v)),
        Some(_) => {}
    }
}

fn optional_string(
    map: &Map<String, Value>,
    name: &str,
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    if let Some(v) = map.get(name) {
        if !v.is_string() {
            out.push(wrong_type(&field_path(prefix, name), "a string", v));
        }
    }
}

fn require_number(
    map: &Map<String, Value>,
    name: &str,
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    match map.get(name) {
        None => out.push(Violation::MissingField { field: field_path(prefix, name) }),
        Some(v) if !v.is_number() => out.push(wrong_type(&field_path(prefix, name), "a number", v)),
        Some(_) => {}
    }
}

/// Confirms `name` exists and is an array; returns the elements for
/// per-element checks when it is.
fn require_list<'a>(
    map: &'a Map<String, Value>,
    name: &str,
    prefix: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Vec<Value>> {
    match map.get(name) {
        None => {
            out.push(Violation::MissingField { field: field_path(prefix, name) });
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            out.push(wrong_type(&field_path(prefix, name), "a list", other));
            None
        }
    }
}

fn wrong_type(field: &str, expected: &'static str, actual: &Value) -> Violation {
    Violation::WrongType { field: field.to_string(), expected, actual: kind_of(actual) }
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
