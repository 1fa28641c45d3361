//! Error values that are built, printed and never thrown.

use primer_core::error::describe;
use primer_core::Failure;

use crate::transcript::Transcript;

pub fn invalid_password(name: &str) -> Failure {
    Failure::new(format!("invalid password for {}", name))
}

pub(crate) fn record(t: &mut Transcript) {
    let plain = Failure::new("this is an example error");
    t.entry("Error", &plain);

    let formatted = invalid_password("user");
    t.entry("Formatted error", &formatted);

    let absent: Option<Failure> = None;
    if absent.is_none() {
        t.entry("No error", describe(absent.as_ref()));
    }
}
