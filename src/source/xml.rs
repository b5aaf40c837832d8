//! XML catalog parser
//!
//! Expected shape:
//! `<videos><video id="..."><title>...</title><tag>#a</tag></video></videos>`

use crate::model::Video;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Video under construction while its element is open
#[derive(Debug, Default)]
struct VideoEntry {
    id: Option<String>,
    title: Option<String>,
    tags: Vec<String>,
}

impl VideoEntry {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let mut entry = VideoEntry::default();
        for attr in e.attributes().flatten() {
            if attr.key.as_ref() == b"id" {
                entry.id = Some(String::from_utf8_lossy(&attr.value).trim().to_string());
            }
        }
        entry
    }

    fn into_video(self) -> Option<Video> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let title = self.title?;
        Some(Video::new(id, title, self.tags))
    }
}

/// Parse an XML catalog file
pub fn parse_xml_catalog(path: &Path) -> Result<Vec<Video>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open video catalog: {:?}", path))?;
    parse_xml_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse video catalog: {:?}", path))
}

fn parse_xml_reader<R: BufRead>(source: R) -> Result<Vec<Video>> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut videos = Vec::new();
    let mut current_entry: Option<VideoEntry> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"video" {
                    current_entry = Some(VideoEntry::from_start(&e));
                } else if current_entry.is_some() {
                    current_element = String::from_utf8_lossy(e.name().as_ref()).to_string();
                }
            }

            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape()?.trim().to_string();
                    match current_element.as_str() {
                        "title" => entry.title = Some(text),
                        "tag" if !text.is_empty() => entry.tags.push(text),
                        _ => {}
                    }
                }
            }

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"video" {
                    if let Some(entry) = current_entry.take() {
                        match entry.into_video() {
                            Some(video) => videos.push(video),
                            None => log::warn!(
                                "Skipping <video> without id or title near position {}",
                                reader.buffer_position()
                            ),
                        }
                    }
                }
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                anyhow::bail!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                );
            }
            _ => {}
        }

        buf.clear();
    }

    log::debug!("Parsed {} videos from XML catalog", videos.len());
    Ok(videos)
}
