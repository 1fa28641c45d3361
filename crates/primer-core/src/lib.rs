//! Shared building blocks for the primer lessons.
//!
//! Lessons construct ordinary Rust values and describe them as text. The pieces
//! they share live here: the crate-wide [`Error`], the inert demonstration
//! [`Failure`], the dynamically-typed [`Value`] container and the rendering
//! helpers in [`display`].

pub mod display;
pub mod error;
pub mod value;

pub use error::*;
pub use value::Value;
