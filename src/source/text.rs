//! Plain-text catalog parser

use crate::model::Video;
use anyhow::{bail, Context, Result};

/// Parse one `Title | id | #tag1 , #tag2` line
///
/// The tag field is optional; empty tags are dropped.
pub fn parse_text_line(line: &str) -> Result<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().unwrap_or_default();
    let Some(id) = fields.next() else {
        bail!("Expected `title | id | tags`, got {:?}", line);
    };
    if id.is_empty() {
        bail!("Missing video ID in {:?}", line);
    }

    let tags = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags))
}

/// Parse a whole text catalog; blank lines are skipped
pub fn parse_text_catalog(content: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let video =
            parse_text_line(line).with_context(|| format!("Invalid catalog line {}", i + 1))?;
        videos.push(video);
    }

    log::debug!("Parsed {} videos from text catalog", videos.len());
    Ok(videos)
}
