//! Search over visible videos with interactive selection
//!
//! Flagged videos never appear in results. Matching is a case-insensitive
//! substring test against the selected field; results are ordered by title.

use super::flags::FlagRegistry;
use crate::model::{Video, VideoCatalog};
use serde::Serialize;

/// Which part of a video a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    ByTitle,
    /// Tags joined with single spaces
    ByTag,
}

impl SearchField {
    /// Extract the text this field matches against
    pub fn extract(self, video: &Video) -> String {
        match self {
            SearchField::ByTitle => video.title.clone(),
            SearchField::ByTag => video.tag_line(),
        }
    }
}

/// Source of the single line read after search results are offered
///
/// Implementations are expected to present `results` before reading.
/// Returning `None` (e.g. end of input) declines the selection.
pub trait SelectionPrompt {
    fn read_selection(&mut self, term: &str, results: &SearchResults<'_>) -> Option<String>;
}

/// Ordered search hits
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    videos: Vec<&'a Video>,
}

impl<'a> SearchResults<'a> {
    /// Hits paired with their 1-based display index
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Video)> + '_ {
        self.videos.iter().copied().enumerate().map(|(i, v)| (i + 1, v))
    }

    /// Resolve a line of user input to a hit
    ///
    /// Anything that is not an integer in `1..=len` is a silent "no".
    pub fn select(&self, input: &str) -> Option<&'a Video> {
        let choice: i64 = input.trim().parse().ok()?;
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        self.videos.get(index).copied()
    }

    /// Hits in display order
    pub fn videos(&self) -> &[&'a Video] {
        &self.videos
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Find visible videos whose `field` contains `term`, ignoring case
pub fn search<'a>(
    catalog: &'a impl VideoCatalog,
    flags: &FlagRegistry,
    term: &str,
    field: SearchField,
) -> SearchResults<'a> {
    let needle = term.to_lowercase();
    let mut videos: Vec<&Video> = catalog
        .list_all()
        .iter()
        .filter(|v| flags.is_flagged(&v.id).is_none())
        .filter(|v| field.extract(v).to_lowercase().contains(&needle))
        .collect();

    // Stable: equal titles keep catalog order
    videos.sort_by(|a, b| a.title.cmp(&b.title));

    log::debug!("Search {:?} for {:?}: {} hit(s)", field, term, videos.len());
    SearchResults { videos }
}
