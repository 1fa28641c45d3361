//! Variables lesson: the ways a binding can be introduced, and a swap.

use crate::transcript::Transcript;

/// Exchanges the two halves of a pair.
pub fn swap_pair<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

pub fn run() -> Transcript {
    let mut t = Transcript::new("variables");

    t.heading("Explicit type");
    let first: String = String::from("Variable 1");
    t.plain(&first);

    t.heading("Inferred type");
    let second = "Variable 2";
    t.plain(second);

    t.heading("Grouped declaration");
    let (third, fourth): (&str, &str) = ("Variable 3", "Variable 4");
    t.plain(format!("{} {}", third, fourth));

    t.heading("Several on one line");
    let (mut fifth, mut sixth) = ("Variable 5", "Variable 6");
    t.plain(format!("{} {}", fifth, sixth));

    t.heading("Swap");
    (fifth, sixth) = (sixth, fifth);
    t.plain(format!("{} {}", fifth, sixth));

    t
}
