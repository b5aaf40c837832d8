//! Session-state engine
//!
//! Playback, flags, playlists and search over an immutable catalog,
//! composed by [`SessionEngine`].

mod command;
mod engine;
mod error;
mod flags;
mod playback;
mod playlists;
mod response;
mod search;

pub use command::Command;
pub use engine::SessionEngine;
pub use error::{ErrorKind, SessionError};
pub use flags::FlagRegistry;
pub use playback::{NowPlaying, PlaybackState};
pub use playlists::PlaylistStore;
pub use response::{CommandResult, Current, Playback, Response, VideoView};
pub use search::{search, SearchField, SearchResults, SelectionPrompt};
