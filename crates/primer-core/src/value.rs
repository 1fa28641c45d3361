//! A container that can hold a value of any kind the lessons store in it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent container; holds nothing at all
    #[default]
    Nil,
    /// A 64-bit signed integer value
    Int(i64),
    /// A UTF-8 encoded string value
    Str(String),
}

impl Value {
    /// Name of the kind currently held.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "<nil>"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nil() {
        let v = Value::default();
        assert!(v.is_nil());
        assert_eq!(v.kind(), "nil");
        assert_eq!(v.to_string(), "<nil>");
    }

    #[test]
    fn container_changes_kind_on_reassignment() {
        let mut v = Value::from("I can hold any kind");
        assert_eq!(v.kind(), "string");
        assert_eq!(v.to_string(), "I can hold any kind");
        v = Value::Int(42);
        assert_eq!(v.kind(), "int");
        assert_eq!(v.to_string(), "42");
        assert!(!v.is_nil());
    }
}
