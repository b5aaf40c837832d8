use serde::{Deserialize, Serialize};

/// Lookup key for a playlist name; names differing only by case collide
pub fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

/// A named, ordered playlist of video IDs without duplicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name as first created
    pub name: String,

    /// Lowercased name used for lookups
    key: String,

    /// Video IDs (ordered by insertion)
    entries: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            key: playlist_key(&name),
            name,
            entries: Vec::new(),
        }
    }

    /// Case-insensitive lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a video; returns `false` if it is already present
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.entries.push(video_id.to_string());
        true
    }

    /// Remove a video; returns `false` if it was not present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.entries.iter().position(|id| id == video_id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Whether the video is in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.entries.iter().any(|id| id == video_id)
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Video IDs in insertion order
    pub fn videos(&self) -> &[String] {
        &self.entries
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
