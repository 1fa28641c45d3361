//! Arrays, growable sequences and mappings.

use std::collections::BTreeMap;

use primer_core::display::{render_list, render_map};

use crate::transcript::Transcript;

/// A growable sequence holding 1 through 5.
pub fn growable() -> Vec<i64> {
    let mut items = Vec::with_capacity(5);
    items.extend([1, 2, 3, 4, 5]);
    items
}

/// The number names mapping used by the lesson.
pub fn number_names() -> BTreeMap<String, i64> {
    [("one", 1), ("two", 2), ("three", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Value stored under `key`, or zero when the key is absent.
pub fn lookup(map: &BTreeMap<String, i64>, key: &str) -> i64 {
    map.get(key).copied().unwrap_or_default()
}

/// Items of a growable sequence followed by its length and capacity.
pub fn describe_sequence(items: &Vec<i64>) -> String {
    format!(
        "{} Length: {} Capacity: {}",
        render_list(items),
        items.len(),
        items.capacity()
    )
}

pub(crate) fn record(t: &mut Transcript) {
    let array: [i64; 3] = [1, 2, 3];
    t.entry("Array", render_list(&array));

    let mut sequence = growable();
    t.entry("Slice", describe_sequence(&sequence));
    sequence.push(6);
    t.entry("Slice after push", describe_sequence(&sequence));

    let names = number_names();
    t.entry("Map", render_map(&names));
    t.entry("Map lookup of \"two\"", lookup(&names, "two"));
    t.entry("Map lookup of \"four\"", lookup(&names, "four"));
}
