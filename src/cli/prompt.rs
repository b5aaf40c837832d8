//! Terminal selection prompt

use super::render::format_video;
use crate::session::{SearchResults, SelectionPrompt};
use std::io::{self, Write};

/// Write the numbered hits and the selection question
pub fn write_results<W: Write>(
    out: &mut W,
    term: &str,
    results: &SearchResults<'_>,
) -> io::Result<()> {
    writeln!(out, "Here are the results for {}:", term)?;
    for (n, video) in results.numbered() {
        writeln!(out, "  {}) {}", n, format_video(video))?;
    }
    writeln!(
        out,
        "Would you like to play any of the above? If yes, specify the number of the video."
    )?;
    writeln!(
        out,
        "If your answer is not a valid number, we will assume it's a no."
    )?;
    out.flush()
}

/// Shows hits on `out` and reads the answer from stdin
pub struct TerminalPrompt<W: Write> {
    out: W,
}

impl<W: Write> TerminalPrompt<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SelectionPrompt for TerminalPrompt<W> {
    fn read_selection(&mut self, term: &str, results: &SearchResults<'_>) -> Option<String> {
        if let Err(e) = write_results(&mut self.out, term, results) {
            log::warn!("Failed to show search results: {}", e);
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("Failed to read selection: {}", e);
                None
            }
        }
    }
}
