//! Command line and environment settings.

use std::io::IsTerminal;

use clap::{ArgAction, Parser, ValueEnum};
use primer_lessons::Lesson;

#[derive(Parser, Debug)]
#[command(name = "primer", version, about = "A guided tour of Rust's data types")]
pub struct Cli {
    /// Lessons to run, in order. Defaults to all of them.
    #[arg(value_enum, env = "PRIMER_LESSON", value_delimiter = ',')]
    pub lessons: Vec<LessonArg>,

    /// Disable coloured output (also disabled when NO_COLOR is set)
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Log lesson progress to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LessonArg {
    Packages,
    Variables,
    Types,
    All,
}

/// Settings after command line, environment and terminal detection are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lessons: Vec<Lesson>,
    pub color: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        Self {
            lessons: expand_lessons(&cli.lessons),
            color: !cli.no_color && !no_color_env && std::io::stdout().is_terminal(),
            verbose: cli.verbose,
        }
    }
}

/// Maps requested lessons onto concrete ones; `all` or nothing means every lesson.
pub fn expand_lessons(args: &[LessonArg]) -> Vec<Lesson> {
    if args.is_empty() {
        return Lesson::ALL.to_vec();
    }
    let mut out = Vec::new();
    for arg in args {
        match arg {
            LessonArg::Packages => out.push(Lesson::Packages),
            LessonArg::Variables => out.push(Lesson::Variables),
            LessonArg::Types => out.push(Lesson::Types),
            LessonArg::All => out.extend(Lesson::ALL),
        }
    }
    out
}
