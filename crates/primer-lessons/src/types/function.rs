//! Functions as first-class values.

use crate::transcript::Transcript;

pub(crate) fn record(t: &mut Transcript) {
    let add: fn(i64, i64) -> i64 = |a, b| a + b;
    t.entry("Function result", add(5, 3));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_function_is_callable() {
        let mut t = Transcript::new("t");
        record(&mut t);
        assert_eq!(t.text("Function result"), Some("8"));
    }
}
