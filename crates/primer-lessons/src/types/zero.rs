//! Absent values and the zero value of each kind.

use std::collections::BTreeMap;

use crossbeam::channel::Receiver;
use primer_core::display::render_optional;
use primer_core::Value;

use super::record::Person;
use crate::transcript::Transcript;

/// One declared-but-unassigned value of every kind.
#[derive(Default)]
pub struct ZeroValues {
    pub int: i64,
    pub float: f64,
    pub flag: bool,
    pub text: String,
    pub person: Person,
    pub reference: Option<Box<i64>>,
    pub sequence: Option<Vec<i64>>,
    pub mapping: Option<BTreeMap<String, i64>>,
    pub channel: Option<Receiver<i64>>,
    pub function: Option<fn()>,
    pub container: Value,
}

pub(crate) fn record_absent(t: &mut Transcript) {
    let zero = ZeroValues::default();
    t.entry("Absent reference", render_optional(zero.reference.as_deref()));
    t.entry("Absent slice", render_optional(zero.sequence.as_ref().map(|s| format!("{:?}", s))));
    t.entry("Absent map", render_optional(zero.mapping.as_ref().map(|m| format!("{:?}", m))));
    t.entry("Absent channel", zero.channel.is_none());
    t.entry("Absent function", zero.function.is_none());
    t.entry("Absent container", &zero.container);
}

pub(crate) fn record_zero(t: &mut Transcript) {
    let zero = ZeroValues::default();
    t.entry("Zero int", zero.int);
    t.entry("Zero float", zero.float);
    t.entry("Zero bool", zero.flag);
    t.entry("Zero string", format!("{:?}", zero.text));
    t.entry("Zero struct", format!("{:?}", zero.person));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_zero_or_absent() {
        let zero = ZeroValues::default();
        assert_eq!(zero.int, 0);
        assert_eq!(zero.float, 0.0);
        assert!(!zero.flag);
        assert_eq!(zero.text, "");
        assert_eq!(zero.person, Person::default());
        assert!(zero.reference.is_none());
        assert!(zero.sequence.is_none());
        assert!(zero.mapping.is_none());
        assert!(zero.channel.is_none());
        assert!(zero.function.is_none());
        assert!(zero.container.is_nil());
    }

    #[test]
    fn absent_values_render_as_none() {
        let mut t = Transcript::new("t");
        record_absent(&mut t);
        assert_eq!(t.text("Absent reference"), Some("<none>"));
        assert_eq!(t.text("Absent function"), Some("true"));
        assert_eq!(t.text("Absent container"), Some("<nil>"));
    }

    #[test]
    fn zero_values_render() {
        let mut t = Transcript::new("t");
        record_zero(&mut t);
        assert_eq!(t.text("Zero int"), Some("0"));
        assert_eq!(t.text("Zero string"), Some("\"\""));
        assert_eq!(t.text("Zero struct"), Some("Person { name: \"\", age: 0 }"));
    }
}
