//! Flagged (moderated) videos
//!
//! A flagged video is hidden from search and random picks and cannot be
//! played or added to playlists until it is allowed again.

use super::error::SessionError;
use crate::model::VideoCatalog;
use std::collections::HashMap;

/// Flagged video IDs and their optional reasons
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    flagged: HashMap<String, Option<String>>,
}

impl FlagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a catalog video
    ///
    /// An empty or whitespace-only reason is stored as `None`.
    pub fn flag(
        &mut self,
        catalog: &impl VideoCatalog,
        id: &str,
        reason: Option<&str>,
    ) -> Result<(), SessionError> {
        if catalog.lookup(id).is_none() {
            return Err(SessionError::not_found(id));
        }
        if self.flagged.contains_key(id) {
            return Err(SessionError::AlreadyFlagged { id: id.to_string() });
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        log::debug!("Flagged {} (reason: {:?})", id, reason);
        self.flagged.insert(id.to_string(), reason);
        Ok(())
    }

    /// Remove the flag from a catalog video
    pub fn allow(&mut self, catalog: &impl VideoCatalog, id: &str) -> Result<(), SessionError> {
        if catalog.lookup(id).is_none() {
            return Err(SessionError::not_found(id));
        }
        if self.flagged.remove(id).is_none() {
            return Err(SessionError::NotFlagged { id: id.to_string() });
        }
        log::debug!("Allowed {}", id);
        Ok(())
    }

    /// `Some(reason)` if the video is flagged, `None` if it is visible
    pub fn is_flagged(&self, id: &str) -> Option<Option<&str>> {
        self.flagged.get(id).map(|reason| reason.as_deref())
    }

    /// Fail with [`SessionError::Flagged`] if the video is flagged
    pub fn ensure_visible(&self, id: &str) -> Result<(), SessionError> {
        match self.is_flagged(id) {
            Some(reason) => Err(SessionError::Flagged {
                id: id.to_string(),
                reason: reason.map(str::to_string),
            }),
            None => Ok(()),
        }
    }
}
