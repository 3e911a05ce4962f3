//! Terminal stand-ins for the wheel's sound and the winner display.

use std::io::Write;

use meguri_core::models::Entry;
use meguri_core::wheel::{Cue, CueSink};

/// Renders audio cues as text: a tick per pin, a banner for the fanfare.
pub struct TerminalCues<W> {
    out: W,
}

impl<W: Write> TerminalCues<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalCues<W> {
    fn play(&mut self, cue: Cue) {
        let written = match cue {
            Cue::Click => write!(self.out, "."),
            Cue::Fanfare => writeln!(self.out, "\n~ fanfare ~"),
            Cue::StopFanfare => Ok(()),
        };
        if let Err(e) = written.and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "Failed to write cue");
        }
    }
}

pub fn format_entry(position: usize, entry: &Entry) -> String {
    let mut line = format!("{position:>3}. {}", display_title(entry));
    if entry.season_year > 0 {
        line.push_str(&format!(" ({} {})", entry.season, entry.season_year));
    }
    line
}

pub fn display_title(entry: &Entry) -> &str {
    if entry.title.is_empty() {
        "(untitled)"
    } else {
        &entry.title
    }
}
