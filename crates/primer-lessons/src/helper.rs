//! A second module the packages lesson calls into.

use crate::transcript::Transcript;

pub const MESSAGE: &str = "Writing from the helper module";

pub fn write(t: &mut Transcript) {
    t.plain(MESSAGE);
}
