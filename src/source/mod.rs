//! Catalog loading
//!
//! Reads the video catalog once at startup, either from the plain-text
//! `Title | id | #tag , #tag` format or from an XML document.

mod text;
mod xml;

pub use text::{parse_text_catalog, parse_text_line};
pub use xml::parse_xml_catalog;

use crate::model::{Library, Video, VideoCatalog};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a catalog file, choosing the format from its extension
///
/// `.xml` files are parsed as XML, everything else as plain text.
pub fn load_catalog(path: &Path) -> Result<Library> {
    log::info!("Loading video catalog from {:?}", path);

    let is_xml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

    let videos = if is_xml {
        xml::parse_xml_catalog(path)?
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to open video catalog: {:?}", path))?;
        text::parse_text_catalog(&content)?
    };

    let library = build_library(videos);
    log::info!("Loaded catalog: {} videos", library.len());
    Ok(library)
}

/// Collect videos into a library, skipping duplicate IDs
pub fn build_library(videos: Vec<Video>) -> Library {
    let mut library = Library::new();
    for video in videos {
        let id = video.id.clone();
        if !library.add_video(video) {
            log::warn!("Duplicate video ID {:?} ignored", id);
        }
    }
    library
}
