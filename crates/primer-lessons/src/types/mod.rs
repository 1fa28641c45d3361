//! Data types lesson: one value of every primitive and composite kind.
//!
//! Sections run in a fixed order. Each declares its values and records them
//! on the transcript. The only suspension point is the channel section, which
//! waits for a spawned worker.

pub mod channel;
pub mod collections;
pub mod dynamic;
pub mod errors;
pub mod function;
pub mod numeric;
pub mod record;
pub mod text;
pub mod zero;

use primer_core::Result;

use crate::transcript::Transcript;

pub fn run() -> Result<Transcript> {
    let mut t = Transcript::new("types");
    let word: isize = 42;

    t.heading("Basic types");
    numeric::record_boolean(&mut t);
    numeric::record_integers(&mut t, &word);
    numeric::record_characters(&mut t);
    numeric::record_floats(&mut t);
    numeric::record_complex(&mut t);
    text::record(&mut t);

    t.heading("Composite types");
    collections::record(&mut t);
    record::record(&mut t, &word);
    dynamic::record(&mut t);
    channel::record(&mut t)?;
    errors::record(&mut t);

    t.heading("Absent values");
    zero::record_absent(&mut t);

    t.heading("Zero values");
    zero::record_zero(&mut t);

    t.heading("Function values");
    function::record(&mut t);

    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_covers_every_family() {
        let t = run().unwrap();
        for label in [
            "Boolean",
            "Integers",
            "Unsigned integers",
            "Address",
            "Byte",
            "Floating point",
            "Complex",
            "String",
            "Array",
            "Slice",
            "Map",
            "Struct",
            "Reference",
            "Container",
            "Channel value",
            "Error",
            "Absent reference",
            "Zero int",
            "Function result",
        ] {
            assert!(t.text(label).is_some(), "missing entry: {}", label);
        }
    }

    #[test]
    fn literal_values_are_rendered() {
        let t = run().unwrap();
        assert_eq!(t.text("Boolean"), Some("true"));
        assert_eq!(
            t.text("Integers"),
            Some("42 127 32767 2147483647 9223372036854775807")
        );
        assert_eq!(
            t.text("Unsigned integers"),
            Some("42 255 65535 4294967295 18446744073709551615")
        );
        assert_eq!(t.text("Floating point"), Some("3.14 3.141592653589793"));
        assert_eq!(t.text("Complex"), Some("(1+2i) (3+4i)"));
        assert_eq!(t.text("Channel value"), Some("10"));
    }
}
