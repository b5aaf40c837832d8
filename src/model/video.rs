use serde::{Deserialize, Serialize};

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique, case-sensitive identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Tags joined with a single space, as matched by tag searches
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}
