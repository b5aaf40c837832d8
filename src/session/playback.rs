//! Playback state machine
//!
//! Tracks the single active video and whether it is playing or paused.
//! Catalog and flag checks happen before [`PlaybackState::start`] is called.

use super::error::SessionError;

/// Active video and its playing/paused flag
///
/// Invariant: `playing` implies `active.is_some()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    active: Option<String>,
    playing: bool,
}

/// Snapshot of the active video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub id: &'a str,
    pub playing: bool,
}

impl PlaybackState {
    /// Create an idle playback state
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the active, playing video
    ///
    /// Any previously active video is stopped first; its ID is returned.
    pub fn start(&mut self, id: &str) -> Option<String> {
        let stopped = self.stop().ok();
        log::debug!("Playback started: {}", id);
        self.active = Some(id.to_string());
        self.playing = true;
        stopped
    }

    /// Clear the active video, returning its ID
    pub fn stop(&mut self) -> Result<String, SessionError> {
        let id = self.active.take().ok_or(SessionError::NoneActive)?;
        self.playing = false;
        log::debug!("Playback stopped: {}", id);
        Ok(id)
    }

    /// Pause the active video, returning its ID
    pub fn pause(&mut self) -> Result<&str, SessionError> {
        let id = self.active.as_deref().ok_or(SessionError::NoneActive)?;
        if !self.playing {
            return Err(SessionError::AlreadyPaused { id: id.to_string() });
        }
        self.playing = false;
        log::debug!("Playback paused: {}", id);
        Ok(id)
    }

    /// Resume the paused video, returning its ID
    pub fn resume(&mut self) -> Result<&str, SessionError> {
        let id = self.active.as_deref().ok_or(SessionError::NoneActive)?;
        if self.playing {
            return Err(SessionError::NotPaused { id: id.to_string() });
        }
        self.playing = true;
        log::debug!("Playback resumed: {}", id);
        Ok(id)
    }

    /// The active video, if any
    pub fn current(&self) -> Option<NowPlaying<'_>> {
        self.active.as_deref().map(|id| NowPlaying {
            id,
            playing: self.playing,
        })
    }

    /// Whether `id` is the active video
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}
