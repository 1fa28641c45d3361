//! Terminal rendering of lesson transcripts.

use std::io::Write;

use owo_colors::OwoColorize;
use primer_core::Result;
use primer_lessons::{Line, Transcript};

pub fn render_line(line: &Line, color: bool) -> String {
    if !color {
        return line.to_string();
    }
    match line {
        Line::Heading(h) => format!("{}", format!("== {} ==", h).bold().green()),
        Line::Entry { label, text } => format!("{}: {}", label.yellow(), text.bright_blue()),
        Line::Plain(text) => text.clone(),
    }
}

pub fn render_transcript(out: &mut dyn Write, transcript: &Transcript, color: bool) -> Result<()> {
    let title = format!("# {}", transcript.title());
    if color {
        writeln!(out, "{}", title.bold().cyan())?;
    } else {
        writeln!(out, "{}", title)?;
    }
    for line in transcript.lines() {
        writeln!(out, "{}", render_line(line, color))?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn render_error(err: &primer_core::Error, color: bool) {
    if color {
        eprintln!("{}: {}", "error".red().bold(), err.to_string().red());
    } else {
        eprintln!("error: {}", err);
    }
}
