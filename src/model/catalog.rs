//! Read-only catalog abstraction

use super::Video;

/// Read-only video lookup provider consumed by the session engine
pub trait VideoCatalog {
    /// Look up a video by its identifier
    fn lookup(&self, id: &str) -> Option<&Video>;

    /// All videos, in catalog order
    fn list_all(&self) -> &[Video];

    /// Total number of videos
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Check if the catalog holds no videos
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
