//! The dynamically-typed container.

use primer_core::Value;

use crate::transcript::Transcript;

pub(crate) fn record(t: &mut Transcript) {
    let mut any = Value::from("I can hold any kind");
    t.entry("Container", format!("{} ({})", any, any.kind()));
    any = Value::Int(42);
    t.entry("Container after change", format!("{} ({})", any, any.kind()));
}
