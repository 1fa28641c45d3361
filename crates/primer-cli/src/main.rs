mod config;
mod logging;
mod render;

use std::io::{self, Write};

use clap::Parser;
use primer_core::Result;

use config::{Cli, Settings};

fn run(settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for lesson in &settings.lessons {
        let transcript = lesson.run()?;
        render::render_transcript(&mut out, &transcript, settings.color)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);

    if let Err(e) = logging::init(settings.verbose, settings.color) {
        render::render_error(&e, settings.color);
        std::process::exit(1);
    }
    tracing::debug!(lessons = settings.lessons.len(), color = settings.color, "settings resolved");

    if let Err(e) = run(&settings) {
        tracing::error!(error = %e, "primer failed");
        render::render_error(&e, settings.color);
        std::process::exit(1);
    }
}
