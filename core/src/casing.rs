//! Recursive object-key case conversion for JSON payloads.
//!
//! The API speaks snake_case, callers speak camelCase. Only object keys are
//! rewritten; string values, numbers and array order are left alone.

use convert_case::{split, Boundary, Case, Casing};
use serde_json::{Map, Value};

const SEPARATORS: [Boundary; 3] = [Boundary::Underscore, Boundary::Hyphen, Boundary::Space];
const CASE_CHANGES: [Boundary; 2] = [Boundary::LowerUpper, Boundary::DigitUpper];

/// Convert every object key in `value` to camelCase.
///
/// Keys are split on `_`, `-` and spaces only; the letters of each word are
/// kept, so `fileV2` and `es6Modules` are stable and `__typename` becomes
/// `typename`.
pub fn camelize_keys(value: Value) -> Value {
    convert_keys(value, &camelize)
}

/// Convert every object key in `value` to snake_case.
///
/// Keys are split before an uppercase letter only, so hyphenated names such
/// as `react-dom` keep their hyphen and digits stay attached (`x2`).
pub fn decamelize_keys(value: Value) -> Value {
    convert_keys(value, &|key| key.with_boundaries(&CASE_CHANGES).to_case(Case::Snake))
}

fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in split(&key, &SEPARATORS).into_iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            push_capitalized(&mut out, word);
        }
    }
    lowercase_first(out)
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn lowercase_first(key: String) -> String {
    match key.chars().next() {
        Some(first) if first.is_uppercase() => {
            first.to_lowercase().chain(key.chars().skip(1)).collect()
        }
        _ => key,
    }
}

fn convert_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(key, inner)| {
                    let key = if is_numeric(&key) { key } else { convert(&key) };
                    (key, convert_keys(inner, convert))
                })
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| convert_keys(item, convert)).collect())
        }
        other => other,
    }
}

// Ids used as map keys ("42", "1.5") must come back byte-identical.
fn is_numeric(key: &str) -> bool {
    !key.is_empty() && key.parse::<f64>().is_ok()
}
