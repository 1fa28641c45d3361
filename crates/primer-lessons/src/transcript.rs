//! Ordered record of what a lesson wants to show.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Section heading inside a lesson
    Heading(String),
    /// A labelled value, rendered as `label: text`
    Entry { label: String, text: String },
    /// Free text without a label
    Plain(String),
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Heading(h) => write!(f, "== {} ==", h),
            Line::Entry { label, text } => write!(f, "{}: {}", label, text),
            Line::Plain(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    title: &'static str,
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new(title: &'static str) -> Self {
        Self { title, lines: Vec::new() }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Heading(text.into()));
    }

    pub fn entry(&mut self, label: impl Into<String>, text: impl Display) {
        self.lines.push(Line::Entry { label: label.into(), text: text.to_string() });
    }

    pub fn plain(&mut self, text: impl Display) {
        self.lines.push(Line::Plain(text.to_string()));
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the first entry with the given label.
    pub fn text(&self, label: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { label: l, text } if l == label => Some(text.as_str()),
            _ => None,
        })
    }
}
