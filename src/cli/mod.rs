//! Interactive command-line front end
//!
//! Reads one command per line, runs it against a [`SessionEngine`] and
//! writes the rendered result.

mod parser;
mod prompt;
mod render;

pub use parser::{parse_line, Input, UsageError, COMMANDS};
pub use prompt::{write_results, TerminalPrompt};
pub use render::{
    format_video, format_view, help_json, render_json, render_text, usage_json, NO_REASON,
};

use crate::config::OutputFormat;
use crate::model::VideoCatalog;
use crate::session::{SelectionPrompt, SessionEngine};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Write the HELP listing
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    for (synopsis, description) in COMMANDS {
        writeln!(out, "    {} - {}", synopsis, description)?;
    }
    Ok(())
}

/// Run commands from `lines` until EXIT or end of input
///
/// Returns the number of commands executed.
pub fn run_session<C, P, I, W>(
    engine: &mut SessionEngine<C, P>,
    lines: I,
    out: &mut W,
    format: OutputFormat,
) -> Result<usize>
where
    C: VideoCatalog,
    P: SelectionPrompt,
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut executed = 0;

    for line in lines {
        let line = line.context("Failed to read command")?;
        let command = match parse_line(&line) {
            Ok(Input::Command(command)) => command,
            Ok(Input::Blank) => continue,
            Ok(Input::Help) => {
                match format {
                    OutputFormat::Text => write_help(out)?,
                    OutputFormat::Json => writeln!(out, "{}", help_json())?,
                }
                continue;
            }
            Ok(Input::Exit) => break,
            Err(e) => {
                match format {
                    OutputFormat::Text => writeln!(out, "{}", e)?,
                    OutputFormat::Json => writeln!(out, "{}", usage_json(&e))?,
                }
                continue;
            }
        };

        let result = engine.execute(&command);
        executed += 1;

        match format {
            OutputFormat::Text => {
                for message in render_text(&command, &result, engine.catalog()) {
                    writeln!(out, "{}", message)?;
                }
            }
            OutputFormat::Json => {
                let report = render_json(&command, &result)
                    .context("Failed to serialize command result")?;
                writeln!(out, "{}", report)?;
            }
        }
        out.flush()?;
    }

    log::debug!("Session ended after {} command(s)", executed);
    Ok(executed)
}
