//! Video Session - in-memory video catalog command processor
//!
//! This library keeps the session state of a video browser over a fixed
//! catalog: the playing/paused video, named playlists and flagged videos.

pub mod cli;
pub mod config;
pub mod model;
pub mod session;
pub mod source;

pub use config::{OutputFormat, SessionConfig};
pub use session::{Command, CommandResult, Response, SessionEngine, SessionError};
