//! Successful command outcomes
//!
//! Each variant carries what a front end needs to describe the outcome,
//! including side effects such as an implicitly stopped video.

use super::error::SessionError;
use crate::model::Video;
use serde::Serialize;

/// Result of every session command
pub type CommandResult = Result<Response, SessionError>;

/// A video together with its moderation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoView {
    #[serde(flatten)]
    pub video: Video,
    pub flagged: bool,
    /// Only meaningful when `flagged`; `None` means no reason was supplied
    pub flag_reason: Option<String>,
}

/// A video that started playing, and the one it replaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playback {
    pub video: Video,
    pub stopped: Option<Video>,
}

/// The active video as reported by show-current
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Current {
    pub video: VideoView,
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Response {
    VideoCount {
        count: usize,
    },
    /// Every catalog video, sorted by title
    VideoList {
        videos: Vec<VideoView>,
    },
    Playing(Playback),
    Stopped {
        video: Video,
    },
    Paused {
        video: Video,
    },
    Resumed {
        video: Video,
    },
    NowPlaying {
        current: Option<Current>,
    },
    PlaylistCreated {
        name: String,
    },
    AddedToPlaylist {
        playlist: String,
        video: Video,
    },
    /// Display names, newest first
    Playlists {
        names: Vec<String>,
    },
    PlaylistContents {
        name: String,
        videos: Vec<VideoView>,
    },
    RemovedFromPlaylist {
        playlist: String,
        video: Video,
    },
    PlaylistCleared {
        name: String,
    },
    PlaylistDeleted {
        name: String,
    },
    /// `played` is `None` when the selection was declined
    SearchResults {
        term: String,
        hits: Vec<Video>,
        played: Option<Playback>,
    },
    VideoFlagged {
        video: Video,
        reason: Option<String>,
        stopped: bool,
    },
    VideoAllowed {
        video: Video,
    },
}
