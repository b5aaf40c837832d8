//! The command surface of a session

use super::search::SearchField;
use serde::Serialize;

/// One user-facing session operation with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Count,
    ListVideos,
    Play { id: String },
    PlayRandom,
    Stop,
    Pause,
    Resume,
    ShowCurrent,
    CreatePlaylist { name: String },
    AddToPlaylist { playlist: String, id: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    RemoveFromPlaylist { playlist: String, id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    Search { term: String, field: SearchField },
    Flag { id: String, reason: Option<String> },
    Allow { id: String },
}
