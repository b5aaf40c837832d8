use super::{Video, VideoCatalog};
use std::collections::HashMap;

/// In-memory video library, immutable once loaded into a session
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Videos in load order
    videos: Vec<Video>,

    /// Position of each video in `videos`, keyed by ID
    index: HashMap<String, usize>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the library
    ///
    /// Returns `false` (and keeps the existing entry) if the ID is already taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }
}

impl VideoCatalog for Library {
    fn lookup(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    fn list_all(&self) -> &[Video] {
        &self.videos
    }
}

impl FromIterator<Video> for Library {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut lib = Library::new();
        for video in iter {
            lib.add_video(video);
        }
        lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video::new(id, title, vec!["#test".to_string()])
    }

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.len(), 0);
        assert!(lib.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut lib = Library::new();

        assert!(lib.add_video(video("test123", "Test Video")));

        assert_eq!(lib.len(), 1);
        assert_eq!(lib.lookup("test123").unwrap().title, "Test Video");
        assert!(lib.lookup("TEST123").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut lib = Library::new();
        lib.add_video(video("dup", "First"));

        assert!(!lib.add_video(video("dup", "Second")));
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.lookup("dup").unwrap().title, "First");
    }

    #[test]
    fn test_list_all_preserves_load_order() {
        let lib: Library = vec![video("b", "Beta"), video("a", "Alpha")]
            .into_iter()
            .collect();

        let ids: Vec<&str> = lib.list_all().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
