//! Presentation of command results
//!
//! Text output reproduces the classic message lines; JSON output emits one
//! `{command, outcome, kind, payload}` object per command.

use super::parser::{UsageError, COMMANDS};
use crate::model::{Video, VideoCatalog};
use crate::session::{Command, CommandResult, Playback, Response, SessionError, VideoView};
use serde_json::{json, Value};

/// Shown in place of a missing flag reason
pub const NO_REASON: &str = "Not supplied";

fn reason_text(reason: Option<&str>) -> &str {
    reason.unwrap_or(NO_REASON)
}

/// `Title (id) [#tag #tag]`
pub fn format_video(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tag_line())
}

/// [`format_video`] plus the flag annotation when flagged
pub fn format_view(view: &VideoView) -> String {
    let mut details = format_video(&view.video);
    if view.flagged {
        details.push_str(&format!(
            " - FLAGGED (reason: {})",
            reason_text(view.flag_reason.as_deref())
        ));
    }
    details
}

fn playback_lines(playback: &Playback, lines: &mut Vec<String>) {
    if let Some(stopped) = &playback.stopped {
        lines.push(format!("Stopping video: {}", stopped.title));
    }
    lines.push(format!("Playing video: {}", playback.video.title));
}

fn success_lines(response: &Response) -> Vec<String> {
    let mut lines = Vec::new();
    match response {
        Response::VideoCount { count } => lines.push(format!("{} videos in the library", count)),
        Response::VideoList { videos } => {
            lines.push("Here's a list of all available videos:".to_string());
            lines.extend(videos.iter().map(format_view));
        }
        Response::Playing(playback) => playback_lines(playback, &mut lines),
        Response::Stopped { video } => lines.push(format!("Stopping video: {}", video.title)),
        Response::Paused { video } => lines.push(format!("Pausing video: {}", video.title)),
        Response::Resumed { video } => lines.push(format!("Continuing video: {}", video.title)),
        Response::NowPlaying { current: None } => {
            lines.push("No video is currently playing".to_string())
        }
        Response::NowPlaying {
            current: Some(current),
        } => {
            let mut details = format_view(&current.video);
            if current.paused {
                details.push_str(" - PAUSED");
            }
            lines.push(format!("Currently playing: {}", details));
        }
        Response::PlaylistCreated { name } => {
            lines.push(format!("Successfully created new playlist: {}", name))
        }
        Response::AddedToPlaylist { playlist, video } => {
            lines.push(format!("Added video to {}: {}", playlist, video.title))
        }
        Response::Playlists { names } if names.is_empty() => {
            lines.push("No playlists exist yet".to_string())
        }
        Response::Playlists { names } => {
            lines.push("Showing all playlists:".to_string());
            lines.extend(names.iter().cloned());
        }
        Response::PlaylistContents { name, videos } => {
            lines.push(format!("Showing playlist: {}", name));
            if videos.is_empty() {
                lines.push("   No videos here yet".to_string());
            }
            lines.extend(videos.iter().map(|v| format!("   {}", format_view(v))));
        }
        Response::RemovedFromPlaylist { playlist, video } => {
            lines.push(format!("Removed video from {}: {}", playlist, video.title))
        }
        Response::PlaylistCleared { name } => {
            lines.push(format!("Successfully removed all videos from {}", name))
        }
        Response::PlaylistDeleted { name } => lines.push(format!("Deleted playlist: {}", name)),
        // Hits were already shown by the selection prompt
        Response::SearchResults { played, .. } => {
            if let Some(playback) = played {
                playback_lines(playback, &mut lines);
            }
        }
        Response::VideoFlagged {
            video,
            reason,
            stopped,
        } => {
            if *stopped {
                lines.push(format!("Stopping video: {}", video.title));
            }
            lines.push(format!(
                "Successfully flagged video: {} (reason: {})",
                video.title,
                reason_text(reason.as_deref())
            ));
        }
        Response::VideoAllowed { video } => lines.push(format!(
            "Successfully removed flag from video: {}",
            video.title
        )),
    }
    lines
}

fn failure_prefix(command: &Command) -> String {
    match command {
        Command::Play { .. } | Command::PlayRandom | Command::Search { .. } => {
            "Cannot play video".to_string()
        }
        Command::Stop => "Cannot stop video".to_string(),
        Command::Pause => "Cannot pause video".to_string(),
        Command::Resume => "Cannot continue video".to_string(),
        Command::CreatePlaylist { .. } => "Cannot create playlist".to_string(),
        Command::AddToPlaylist { playlist, .. } => format!("Cannot add video to {}", playlist),
        Command::ShowPlaylist { name } => format!("Cannot show playlist {}", name),
        Command::RemoveFromPlaylist { playlist, .. } => {
            format!("Cannot remove video from {}", playlist)
        }
        Command::ClearPlaylist { name } => format!("Cannot clear playlist {}", name),
        Command::DeletePlaylist { name } => format!("Cannot delete playlist {}", name),
        Command::Flag { .. } => "Cannot flag video".to_string(),
        Command::Allow { .. } => "Cannot remove flag from video".to_string(),
        Command::Count | Command::ListVideos | Command::ShowCurrent | Command::ShowAllPlaylists => {
            "Cannot run command".to_string()
        }
    }
}

fn failure_line(command: &Command, error: &SessionError, catalog: &impl VideoCatalog) -> String {
    let reason = match error {
        SessionError::AlreadyPaused { id } => {
            let title = catalog.lookup(id).map_or(id.as_str(), |v| v.title.as_str());
            return format!("Video already paused: {}", title);
        }
        SessionError::EmptyResult { term: Some(term) } => {
            return format!("No search results for {}", term)
        }
        SessionError::EmptyResult { term: None } => return "No videos available".to_string(),
        SessionError::NotFound { .. } => "Video does not exist".to_string(),
        SessionError::Flagged { reason, .. } => format!(
            "Video is currently flagged (reason: {})",
            reason_text(reason.as_deref())
        ),
        SessionError::AlreadyFlagged { .. } => "Video is already flagged".to_string(),
        SessionError::NotFlagged { .. } => "Video is not flagged".to_string(),
        SessionError::PlaylistNotFound { .. } => "Playlist does not exist".to_string(),
        SessionError::PlaylistAlreadyExists { .. } => {
            "A playlist with the same name already exists".to_string()
        }
        SessionError::AlreadyInPlaylist { .. } => "Video already added".to_string(),
        SessionError::NotInPlaylist { .. } => "Video is not in playlist".to_string(),
        SessionError::NoneActive => "No video is currently playing".to_string(),
        SessionError::NotPaused { .. } => "Video is not paused".to_string(),
    };
    format!("{}: {}", failure_prefix(command), reason)
}

/// Message lines for a command result
pub fn render_text(
    command: &Command,
    result: &CommandResult,
    catalog: &impl VideoCatalog,
) -> Vec<String> {
    match result {
        Ok(response) => success_lines(response),
        Err(error) => vec![failure_line(command, error, catalog)],
    }
}

/// `{command, outcome, kind, payload}` object for a command result
pub fn render_json(command: &Command, result: &CommandResult) -> serde_json::Result<Value> {
    let (outcome, body) = match result {
        Ok(response) => ("success", serde_json::to_value(response)?),
        Err(error) => ("error", serde_json::to_value(error)?),
    };

    let mut report = json!({
        "command": command,
        "outcome": outcome,
    });
    if let (Value::Object(report), Value::Object(body)) = (&mut report, body) {
        report.extend(body);
    }
    Ok(report)
}

/// HELP listing as a JSON report
pub fn help_json() -> Value {
    let commands: Vec<Value> = COMMANDS
        .iter()
        .map(|(synopsis, description)| json!({ "synopsis": synopsis, "description": description }))
        .collect();
    json!({
        "outcome": "success",
        "kind": "help",
        "payload": { "commands": commands },
    })
}

/// Unparseable input line as a JSON report
pub fn usage_json(error: &UsageError) -> Value {
    json!({
        "outcome": "error",
        "kind": "usage",
        "payload": { "message": error.to_string() },
    })
}
