//! Packages lesson: code split across modules, plus a call into a third-party crate.

use tracing::debug;

use crate::email::validate_email;
use crate::helper;
use crate::transcript::Transcript;

pub const VALID_ADDRESS: &str = "user@example.com";
pub const INVALID_ADDRESS: &str = "not-an-email";

pub fn run() -> Transcript {
    let mut t = Transcript::new("packages");
    t.plain("Hello, world!");
    helper::write(&mut t);

    for address in [VALID_ADDRESS, INVALID_ADDRESS] {
        let outcome = match validate_email(address) {
            Ok(()) => "no error".to_string(),
            Err(e) => e.to_string(),
        };
        debug!(address, %outcome, "email checked");
        t.entry(address, outcome);
    }
    t
}
