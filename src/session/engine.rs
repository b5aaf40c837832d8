//! Session orchestration
//!
//! Owns the playback state, flag registry and playlist store for one
//! session and exposes one method per command. Component errors are passed
//! through unchanged; the only cross-cutting rules are that playing a video
//! stops the active one, and flagging the active video stops it.

use super::command::Command;
use super::error::SessionError;
use super::flags::FlagRegistry;
use super::playback::PlaybackState;
use super::playlists::PlaylistStore;
use super::response::{CommandResult, Current, Playback, Response, VideoView};
use super::search::{self, SearchField, SelectionPrompt};
use crate::model::{Video, VideoCatalog};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One session over a fixed catalog
pub struct SessionEngine<C: VideoCatalog, P: SelectionPrompt> {
    catalog: C,
    prompt: P,
    playback: PlaybackState,
    flags: FlagRegistry,
    playlists: PlaylistStore,
    rng: StdRng,
}

impl<C: VideoCatalog, P: SelectionPrompt> SessionEngine<C, P> {
    /// Create a new session with empty state
    pub fn new(catalog: C, prompt: P) -> Self {
        Self {
            catalog,
            prompt,
            playback: PlaybackState::new(),
            flags: FlagRegistry::new(),
            playlists: PlaylistStore::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for random picks
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Run a single command
    pub fn execute(&mut self, command: &Command) -> CommandResult {
        log::debug!("Executing {:?}", command);
        match command {
            Command::Count => Ok(self.count()),
            Command::ListVideos => Ok(self.list_videos()),
            Command::Play { id } => self.play(id),
            Command::PlayRandom => self.play_random(),
            Command::Stop => self.stop(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::ShowCurrent => Ok(self.show_current()),
            Command::CreatePlaylist { name } => self.create_playlist(name),
            Command::AddToPlaylist { playlist, id } => self.add_to_playlist(playlist, id),
            Command::ShowAllPlaylists => Ok(self.show_all_playlists()),
            Command::ShowPlaylist { name } => self.show_playlist(name),
            Command::RemoveFromPlaylist { playlist, id } => {
                self.remove_from_playlist(playlist, id)
            }
            Command::ClearPlaylist { name } => self.clear_playlist(name),
            Command::DeletePlaylist { name } => self.delete_playlist(name),
            Command::Search { term, field } => self.search(term, *field),
            Command::Flag { id, reason } => self.flag(id, reason.as_deref()),
            Command::Allow { id } => self.allow(id),
        }
    }

    fn video(&self, id: &str) -> Result<Video, SessionError> {
        self.catalog
            .lookup(id)
            .cloned()
            .ok_or_else(|| SessionError::not_found(id))
    }

    fn view(&self, video: &Video) -> VideoView {
        let flag = self.flags.is_flagged(&video.id);
        VideoView {
            video: video.clone(),
            flagged: flag.is_some(),
            flag_reason: flag.flatten().map(str::to_string),
        }
    }

    fn start(&mut self, id: &str) -> Result<Playback, SessionError> {
        let video = self.video(id)?;
        self.flags.ensure_visible(id)?;

        let stopped = self
            .playback
            .start(id)
            .and_then(|prev| self.catalog.lookup(&prev).cloned());
        Ok(Playback { video, stopped })
    }

    /// Number of videos in the catalog, flagged ones included
    pub fn count(&self) -> Response {
        Response::VideoCount {
            count: self.catalog.len(),
        }
    }

    /// Every catalog video sorted by title, with flag annotations
    pub fn list_videos(&self) -> Response {
        let mut videos: Vec<&Video> = self.catalog.list_all().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        Response::VideoList {
            videos: videos.into_iter().map(|v| self.view(v)).collect(),
        }
    }

    pub fn play(&mut self, id: &str) -> CommandResult {
        self.start(id).map(Response::Playing)
    }

    /// Play a uniformly chosen visible video
    pub fn play_random(&mut self) -> CommandResult {
        let eligible: Vec<String> = self
            .catalog
            .list_all()
            .iter()
            .filter(|v| self.flags.is_flagged(&v.id).is_none())
            .map(|v| v.id.clone())
            .collect();

        if eligible.is_empty() {
            return Err(SessionError::EmptyResult { term: None });
        }
        let pick = self.rng.random_range(0..eligible.len());
        self.play(&eligible[pick])
    }

    pub fn stop(&mut self) -> CommandResult {
        let id = self.playback.stop()?;
        Ok(Response::Stopped {
            video: self.video(&id)?,
        })
    }

    pub fn pause(&mut self) -> CommandResult {
        let id = self.playback.pause()?.to_string();
        Ok(Response::Paused {
            video: self.video(&id)?,
        })
    }

    pub fn resume(&mut self) -> CommandResult {
        let id = self.playback.resume()?.to_string();
        Ok(Response::Resumed {
            video: self.video(&id)?,
        })
    }

    pub fn show_current(&self) -> Response {
        let current = self.playback.current().and_then(|now| {
            self.catalog.lookup(now.id).map(|video| Current {
                video: self.view(video),
                paused: !now.playing,
            })
        });
        Response::NowPlaying { current }
    }

    pub fn create_playlist(&mut self, name: &str) -> CommandResult {
        self.playlists.create(name)?;
        Ok(Response::PlaylistCreated {
            name: name.to_string(),
        })
    }

    pub fn add_to_playlist(&mut self, playlist: &str, id: &str) -> CommandResult {
        let video = self
            .playlists
            .add_video(playlist, id, &self.catalog, &self.flags)?;
        Ok(Response::AddedToPlaylist {
            playlist: playlist.to_string(),
            video: video.clone(),
        })
    }

    pub fn show_all_playlists(&self) -> Response {
        Response::Playlists {
            names: self.playlists.list().into_iter().map(str::to_string).collect(),
        }
    }

    /// Playlist contents in insertion order; flagged members are annotated, not hidden
    pub fn show_playlist(&self, name: &str) -> CommandResult {
        let playlist = self.playlists.get(name)?;
        let videos = playlist
            .videos()
            .iter()
            .filter_map(|id| self.catalog.lookup(id))
            .map(|v| self.view(v))
            .collect();
        Ok(Response::PlaylistContents {
            name: name.to_string(),
            videos,
        })
    }

    pub fn remove_from_playlist(&mut self, playlist: &str, id: &str) -> CommandResult {
        let video = self.playlists.remove_video(playlist, id, &self.catalog)?;
        Ok(Response::RemovedFromPlaylist {
            playlist: playlist.to_string(),
            video: video.clone(),
        })
    }

    pub fn clear_playlist(&mut self, name: &str) -> CommandResult {
        self.playlists.clear(name)?;
        Ok(Response::PlaylistCleared {
            name: name.to_string(),
        })
    }

    pub fn delete_playlist(&mut self, name: &str) -> CommandResult {
        self.playlists.delete(name)?;
        Ok(Response::PlaylistDeleted {
            name: name.to_string(),
        })
    }

    /// Search visible videos and offer the hits for playback
    pub fn search(&mut self, term: &str, field: SearchField) -> CommandResult {
        let results = search::search(&self.catalog, &self.flags, term, field);
        if results.is_empty() {
            return Err(SessionError::EmptyResult {
                term: Some(term.to_string()),
            });
        }

        let answer = self.prompt.read_selection(term, &results);
        let chosen = answer
            .as_deref()
            .and_then(|line| results.select(line))
            .map(|v| v.id.clone());
        let hits: Vec<Video> = results.videos().iter().map(|&v| v.clone()).collect();

        let played = match chosen {
            Some(id) => Some(self.start(&id)?),
            None => None,
        };
        Ok(Response::SearchResults {
            term: term.to_string(),
            hits,
            played,
        })
    }

    pub fn search_by_title(&mut self, term: &str) -> CommandResult {
        self.search(term, SearchField::ByTitle)
    }

    pub fn search_by_tag(&mut self, tag: &str) -> CommandResult {
        self.search(tag, SearchField::ByTag)
    }

    /// Flag a video, stopping it if it is the active one
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> CommandResult {
        self.flags.flag(&self.catalog, id, reason)?;
        let stopped = self.playback.is_active(id) && self.playback.stop().is_ok();
        let reason = self.flags.is_flagged(id).flatten().map(str::to_string);
        Ok(Response::VideoFlagged {
            video: self.video(id)?,
            reason,
            stopped,
        })
    }

    pub fn allow(&mut self, id: &str) -> CommandResult {
        self.flags.allow(&self.catalog, id)?;
        Ok(Response::VideoAllowed {
            video: self.video(id)?,
        })
    }
}
