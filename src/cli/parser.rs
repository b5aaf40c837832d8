//! Command-line grammar
//!
//! Each line is a command word (case-insensitive) followed by
//! whitespace-separated arguments.

use crate::session::{Command, SearchField};
use thiserror::Error;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Exit,
    Blank,
}

/// A line that does not form a valid command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Unknown command: {0}. Type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Arity(&'static str),
}

/// Command words with their argument synopsis, as shown by HELP
pub const COMMANDS: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    ("SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    ("PLAY <video_id>", "Plays specified video."),
    ("PLAY_RANDOM", "Plays a random video from the library."),
    ("STOP", "Stop the current video."),
    ("PAUSE", "Pause the current video."),
    ("CONTINUE", "Resume the current paused video."),
    ("SHOW_PLAYING", "Displays the title, video_id and tags of the current video."),
    ("CREATE_PLAYLIST <playlist_name>", "Creates a new (empty) playlist."),
    ("ADD_TO_PLAYLIST <playlist_name> <video_id>", "Adds the video to the playlist."),
    ("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>", "Removes the video from the playlist."),
    ("CLEAR_PLAYLIST <playlist_name>", "Removes all videos from the playlist."),
    ("DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    ("SHOW_PLAYLIST <playlist_name>", "List all the videos in this playlist."),
    ("SHOW_ALL_PLAYLISTS", "Display all the available playlists."),
    ("SEARCH_VIDEOS <search_term>", "Display all the videos whose titles contain the search_term."),
    ("SEARCH_VIDEOS_WITH_TAG <tag_name>", "Display all videos whose tags contains the provided tag."),
    ("FLAG_VIDEO <video_id> [reason]", "Mark a video as flagged."),
    ("ALLOW_VIDEO <video_id>", "Removes a flag from a video."),
    ("HELP", "Displays help."),
    ("EXIT", "Terminates the program execution."),
];

fn synopsis(word: &str) -> &'static str {
    COMMANDS
        .iter()
        .map(|(synopsis, _)| *synopsis)
        .find(|s| s.split_whitespace().next() == Some(word))
        .unwrap_or("HELP")
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Input, UsageError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Input::Blank);
    };
    let word = word.to_uppercase();
    let args: Vec<&str> = words.collect();

    let arg = |n: usize| -> Result<String, UsageError> {
        args.get(n)
            .map(|a| a.to_string())
            .ok_or(UsageError::Arity(synopsis(&word)))
    };
    let rest = |from: usize| -> Option<String> {
        (args.len() > from).then(|| args[from..].join(" "))
    };

    let command = match word.as_str() {
        "HELP" => return Ok(Input::Help),
        "EXIT" => return Ok(Input::Exit),
        "NUMBER_OF_VIDEOS" => Command::Count,
        "SHOW_ALL_VIDEOS" => Command::ListVideos,
        "PLAY" => Command::Play { id: arg(0)? },
        "PLAY_RANDOM" => Command::PlayRandom,
        "STOP" => Command::Stop,
        "PAUSE" => Command::Pause,
        "CONTINUE" => Command::Resume,
        "SHOW_PLAYING" => Command::ShowCurrent,
        "CREATE_PLAYLIST" => Command::CreatePlaylist { name: arg(0)? },
        "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
            playlist: arg(0)?,
            id: arg(1)?,
        },
        "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
        "SHOW_PLAYLIST" => Command::ShowPlaylist { name: arg(0)? },
        "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
            playlist: arg(0)?,
            id: arg(1)?,
        },
        "CLEAR_PLAYLIST" => Command::ClearPlaylist { name: arg(0)? },
        "DELETE_PLAYLIST" => Command::DeletePlaylist { name: arg(0)? },
        "SEARCH_VIDEOS" => Command::Search {
            term: rest(0).ok_or(UsageError::Arity(synopsis(&word)))?,
            field: SearchField::ByTitle,
        },
        "SEARCH_VIDEOS_WITH_TAG" => Command::Search {
            term: rest(0).ok_or(UsageError::Arity(synopsis(&word)))?,
            field: SearchField::ByTag,
        },
        "FLAG_VIDEO" => Command::Flag {
            id: arg(0)?,
            reason: rest(1),
        },
        "ALLOW_VIDEO" => Command::Allow { id: arg(0)? },
        _ => return Err(UsageError::Unknown(word.clone())),
    };

    Ok(Input::Command(command))
}
