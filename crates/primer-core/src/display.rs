//! Text rendering for sequences, mappings and optional values.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Renders items as `[a, b, c]`.
pub fn render_list<T: Display>(items: &[T]) -> String {
    let mut s = String::from("[");
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        s.push_str(&it.to_string());
    }
    s.push(']');
    s
}

/// Renders a mapping as `{k: v, ...}` in key order.
pub fn render_map<K: Display, V: Display>(map: &BTreeMap<K, V>) -> String {
    let mut s = String::from("{");
    for (i, (k, v)) in map.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        s.push_str(&format!("{}: {}", k, v));
    }
    s.push('}');
    s
}

/// Renders the held value, or `<none>` when absent.
pub fn render_optional<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<none>".to_string(),
    }
}
