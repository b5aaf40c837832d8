//! Data model for the video catalog and session-owned collections
//!
//! These types are independent of both the catalog file format
//! and the way command results are rendered.

mod catalog;
mod library;
mod playlist;
mod video;

pub use catalog::VideoCatalog;
pub use library::Library;
pub use playlist::{playlist_key, Playlist};
pub use video::Video;
