//! Strings: UTF-8 bytes, byte length and byte indexing.

use primer_core::display::render_optional;

use crate::transcript::Transcript;

pub const GREETING: &str = "Olá, Rust!";

/// First byte of `s` read as a character, if there is one.
pub fn first_byte(s: &str) -> Option<char> {
    s.as_bytes().first().map(|b| *b as char)
}

pub(crate) fn record(t: &mut Transcript) {
    let text: &str = GREETING;
    t.entry("String", text);
    t.entry("String length in bytes", text.len());
    t.entry("String length in characters", text.chars().count());
    t.entry("First byte", render_optional(first_byte(text)));
}
