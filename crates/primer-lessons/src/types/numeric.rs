//! Booleans, fixed-width integers, byte and code point, floats, complex numbers.

use std::fmt;

use crate::transcript::Transcript;

/// The maximum literal assigned to each fixed-width integer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLimits {
    pub int8: i8,
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub uint8: u8,
    pub uint16: u16,
    pub uint32: u32,
    pub uint64: u64,
}

impl IntegerLimits {
    pub const fn declared() -> Self {
        Self {
            int8: 127,                       // -128 to 127
            int16: 32767,                    // -32768 to 32767
            int32: 2147483647,               // -2147483648 to 2147483647
            int64: 9223372036854775807,      // -9223372036854775808 to 9223372036854775807
            uint8: 255,                      // 0 to 255
            uint16: 65535,                   // 0 to 65535
            uint32: 4294967295,              // 0 to 4294967295
            uint64: 18446744073709551615,    // 0 to 18446744073709551615
        }
    }
}

/// A complex number as a (real, imaginary) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Single precision complex number.
pub type Complex32 = Complex<f32>;
/// Double precision complex number.
pub type Complex64 = Complex<f64>;

impl<T: Copy> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn real(&self) -> T {
        self.re
    }

    pub fn imag(&self) -> T {
        self.im
    }
}

impl<T> fmt::Display for Complex<T>
where
    T: fmt::Display + PartialOrd + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the sign of a negative imaginary part comes from the number itself
        if self.im < T::default() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// Address of a value as a plain integer.
pub fn address_of<T>(value: &T) -> usize {
    value as *const T as usize
}

pub(crate) fn record_boolean(t: &mut Transcript) {
    let flag: bool = true;
    t.entry("Boolean", flag);
}

/// `word` is shared with the reference section, which shows the same address.
pub(crate) fn record_integers(t: &mut Transcript, word: &isize) {
    let limits = IntegerLimits::declared();
    let uword: usize = 42;

    t.entry(
        "Integers",
        format!("{} {} {} {} {}", word, limits.int8, limits.int16, limits.int32, limits.int64),
    );
    t.entry(
        "Unsigned integers",
        format!("{} {} {} {} {}", uword, limits.uint8, limits.uint16, limits.uint32, limits.uint64),
    );
    t.entry("Address", format!("{:#x}", address_of(word)));
}

pub(crate) fn record_characters(t: &mut Transcript) {
    let byte: u8 = b'A';
    let rune: char = 'Ж';
    t.entry(
        "Byte",
        format!(
            "{} (ASCII: {}), Code point: {} (Unicode: {})",
            byte, byte as char, rune as u32, rune
        ),
    );
}

#[allow(clippy::approx_constant)]
pub(crate) fn record_floats(t: &mut Transcript) {
    let single: f32 = 3.14;
    let double: f64 = 3.141592653589793;
    t.entry("Floating point", format!("{} {}", single, double));
}

pub(crate) fn record_complex(t: &mut Transcript) {
    let small = Complex32::new(1.0, 2.0);
    let large = Complex64::new(3.0, 4.0);
    t.entry("Complex", format!("{} {}", small, large));
    t.entry("Real part", large.real());
    t.entry("Imaginary part", large.imag());
}
