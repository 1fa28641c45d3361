//! Records (structs) and references.

use crate::transcript::Transcript;
use super::numeric::address_of;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

pub(crate) fn record(t: &mut Transcript, word: &isize) {
    let person = Person { name: "Alice".to_string(), age: 30 };
    t.entry("Struct", format!("{:?}", person));
    t.entry("Struct field", &person.name);

    let reference: &isize = word;
    t.entry("Reference", format!("{:#x} Value: {}", address_of(reference), *reference));
}
