//! The primer lessons.
//!
//! Each lesson builds a [`Transcript`] instead of printing, so the command line
//! front end decides how lines look and tests can inspect exactly what a
//! lesson produced.

pub mod email;
pub mod helper;
pub mod packages;
pub mod transcript;
pub mod types;
pub mod variables;

use tracing::{debug, info};

use primer_core::Result;

pub use email::{validate_email, EmailError};
pub use transcript::{Line, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    Packages,
    Variables,
    Types,
}

impl Lesson {
    /// Every lesson, in teaching order.
    pub const ALL: [Lesson; 3] = [Lesson::Packages, Lesson::Variables, Lesson::Types];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Packages => "packages",
            Lesson::Variables => "variables",
            Lesson::Types => "types",
        }
    }

    pub fn run(self) -> Result<Transcript> {
        info!(lesson = self.name(), "starting lesson");
        let transcript = match self {
            Lesson::Packages => packages::run(),
            Lesson::Variables => variables::run(),
            Lesson::Types => types::run()?,
        };
        debug!(lesson = self.name(), lines = transcript.len(), "lesson finished");
        Ok(transcript)
    }
}
