//! Playlist store
//!
//! Playlists are keyed by their lowercased name and enumerated in
//! creation order.

use super::error::SessionError;
use super::flags::FlagRegistry;
use crate::model::{playlist_key, Playlist, Video, VideoCatalog};

/// All playlists of a session
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    /// Playlists in creation order
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = playlist_key(name);
        self.playlists.iter().position(|p| p.key() == key.as_str())
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, SessionError> {
        match self.position(name) {
            Some(pos) => Ok(&mut self.playlists[pos]),
            None => Err(SessionError::PlaylistNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Look up a playlist by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&Playlist, SessionError> {
        self.position(name)
            .map(|pos| &self.playlists[pos])
            .ok_or_else(|| SessionError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    /// Create an empty playlist, keeping `name` as its display form
    pub fn create(&mut self, name: &str) -> Result<(), SessionError> {
        if self.position(name).is_some() {
            return Err(SessionError::PlaylistAlreadyExists {
                name: name.to_string(),
            });
        }
        log::debug!("Created playlist: {}", name);
        self.playlists.push(Playlist::new(name.to_string()));
        Ok(())
    }

    /// Append a visible catalog video to a playlist
    pub fn add_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c impl VideoCatalog,
        flags: &FlagRegistry,
    ) -> Result<&'c Video, SessionError> {
        let playlist = self.get_mut(name)?;
        flags.ensure_visible(video_id)?;
        let video = catalog
            .lookup(video_id)
            .ok_or_else(|| SessionError::not_found(video_id))?;

        if !playlist.add_video(video_id) {
            return Err(SessionError::AlreadyInPlaylist {
                playlist: name.to_string(),
                id: video_id.to_string(),
            });
        }
        log::debug!("Added {} to playlist {}", video_id, playlist.name);
        Ok(video)
    }

    /// Remove a catalog video from a playlist
    pub fn remove_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c impl VideoCatalog,
    ) -> Result<&'c Video, SessionError> {
        let playlist = self.get_mut(name)?;
        let video = catalog
            .lookup(video_id)
            .ok_or_else(|| SessionError::not_found(video_id))?;

        if !playlist.remove_video(video_id) {
            return Err(SessionError::NotInPlaylist {
                playlist: name.to_string(),
                id: video_id.to_string(),
            });
        }
        log::debug!("Removed {} from playlist {}", video_id, playlist.name);
        Ok(video)
    }

    /// Remove every video from a playlist
    pub fn clear(&mut self, name: &str) -> Result<(), SessionError> {
        self.get_mut(name)?.clear();
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<Playlist, SessionError> {
        let pos = self
            .position(name)
            .ok_or_else(|| SessionError::PlaylistNotFound {
                name: name.to_string(),
            })?;
        Ok(self.playlists.remove(pos))
    }

    /// Playlist display names, newest first
    pub fn list(&self) -> Vec<&str> {
        self.playlists.iter().rev().map(|p| p.name.as_str()).collect()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if there are no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;

    fn catalog() -> Library {
        vec![
            Video::new("v1", "Amazing Cats", Vec::new()),
            Video::new("v2", "Funny Dogs", Vec::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_create_collides_case_insensitively() {
        let mut store = PlaylistStore::new();
        store.create("My List").unwrap();

        assert_eq!(
            store.create("MY LIST"),
            Err(SessionError::PlaylistAlreadyExists {
                name: "MY LIST".to_string()
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = PlaylistStore::new();
        store.create("A").unwrap();
        store.create("B").unwrap();
        store.create("C").unwrap();

        assert_eq!(store.list(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_add_error_order() {
        let lib = catalog();
        let mut flags = FlagRegistry::new();
        flags.flag(&lib, "v2", Some("spam")).unwrap();
        let mut store = PlaylistStore::new();

        // Missing playlist wins over everything
        assert!(matches!(
            store.add_video("nope", "v2", &lib, &flags),
            Err(SessionError::PlaylistNotFound { .. })
        ));

        store.create("p").unwrap();
        assert!(matches!(
            store.add_video("p", "v2", &lib, &flags),
            Err(SessionError::Flagged { .. })
        ));
        assert!(matches!(
            store.add_video("p", "v9", &lib, &flags),
            Err(SessionError::NotFound { .. })
        ));

        assert_eq!(store.add_video("p", "v1", &lib, &flags).unwrap().title, "Amazing Cats");
        assert!(matches!(
            store.add_video("p", "v1", &lib, &flags),
            Err(SessionError::AlreadyInPlaylist { .. })
        ));
        assert_eq!(store.get("P").unwrap().videos(), &["v1".to_string()]);
    }

    #[test]
    fn test_missing_playlist_reported_first() {
        let lib = catalog();
        let mut store = PlaylistStore::new();
        let missing = SessionError::PlaylistNotFound {
            name: "nope".to_string(),
        };

        // Unknown video too, but the playlist lookup fails first
        assert_eq!(store.remove_video("nope", "v9", &lib).unwrap_err(), missing);
        assert_eq!(store.delete("nope").unwrap_err(), missing);
        assert_eq!(store.get("nope").unwrap_err(), missing);
    }

    #[test]
    fn test_remove_checks_catalog_before_membership() {
        let lib = catalog();
        let mut store = PlaylistStore::new();
        store.create("p").unwrap();

        assert!(matches!(
            store.remove_video("p", "v9", &lib),
            Err(SessionError::NotFound { .. })
        ));
        assert!(matches!(
            store.remove_video("p", "v1", &lib),
            Err(SessionError::NotInPlaylist { .. })
        ));
    }

    #[test]
    fn test_clear_keeps_playlist_and_delete_removes_it() {
        let lib = catalog();
        let flags = FlagRegistry::new();
        let mut store = PlaylistStore::new();
        store.create("Pets").unwrap();
        store.add_video("pets", "v1", &lib, &flags).unwrap();

        store.clear("PETS").unwrap();
        assert!(store.get("Pets").unwrap().is_empty());

        let deleted = store.delete("pEtS").unwrap();
        assert_eq!(deleted.name, "Pets");
        assert!(store.is_empty());
        assert!(matches!(
            store.clear("Pets"),
            Err(SessionError::PlaylistNotFound { .. })
        ));
    }
}
