//! Session error taxonomy
//!
//! Every failure a command can report. None of these are fatal: the engine
//! returns them and the caller decides how to present them.

use serde::Serialize;
use thiserror::Error;

/// Failure reported by a session command
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum SessionError {
    #[error("Video does not exist: {id}")]
    NotFound { id: String },

    #[error("Video is currently flagged: {id}")]
    Flagged { id: String, reason: Option<String> },

    #[error("Video is already flagged: {id}")]
    AlreadyFlagged { id: String },

    #[error("Video is not flagged: {id}")]
    NotFlagged { id: String },

    #[error("Playlist does not exist: {name}")]
    PlaylistNotFound { name: String },

    #[error("A playlist with the same name already exists: {name}")]
    PlaylistAlreadyExists { name: String },

    #[error("Video already added to {playlist}: {id}")]
    AlreadyInPlaylist { playlist: String, id: String },

    #[error("Video is not in {playlist}: {id}")]
    NotInPlaylist { playlist: String, id: String },

    #[error("No video is currently playing")]
    NoneActive,

    #[error("Video already paused: {id}")]
    AlreadyPaused { id: String },

    #[error("Video is not paused: {id}")]
    NotPaused { id: String },

    /// Search (with its term) or random pick (without) found nothing eligible
    #[error("No eligible videos")]
    EmptyResult { term: Option<String> },
}

/// Stable tag for each [`SessionError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Flagged,
    AlreadyFlagged,
    NotFlagged,
    PlaylistNotFound,
    PlaylistAlreadyExists,
    AlreadyInPlaylist,
    NotInPlaylist,
    NoneActive,
    AlreadyPaused,
    NotPaused,
    EmptyResult,
}

impl SessionError {
    /// The kind of this error, without its payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NotFound { .. } => ErrorKind::NotFound,
            SessionError::Flagged { .. } => ErrorKind::Flagged,
            SessionError::AlreadyFlagged { .. } => ErrorKind::AlreadyFlagged,
            SessionError::NotFlagged { .. } => ErrorKind::NotFlagged,
            SessionError::PlaylistNotFound { .. } => ErrorKind::PlaylistNotFound,
            SessionError::PlaylistAlreadyExists { .. } => ErrorKind::PlaylistAlreadyExists,
            SessionError::AlreadyInPlaylist { .. } => ErrorKind::AlreadyInPlaylist,
            SessionError::NotInPlaylist { .. } => ErrorKind::NotInPlaylist,
            SessionError::NoneActive => ErrorKind::NoneActive,
            SessionError::AlreadyPaused { .. } => ErrorKind::AlreadyPaused,
            SessionError::NotPaused { .. } => ErrorKind::NotPaused,
            SessionError::EmptyResult { .. } => ErrorKind::EmptyResult,
        }
    }

    pub(crate) fn not_found(id: &str) -> Self {
        SessionError::NotFound { id: id.to_string() }
    }
}
