// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playback context and navigation.
//!
//! [`PlaybackContextManager`] owns everything about what is playing: the page
//! of tracks addressed by the active index, the playlist context that page
//! belongs to, the play mode and the media sink. User intents (play this
//! track, next, previous, a track ended) are resolved against the context so
//! that navigation crosses page boundaries and shuffle stays within the right
//! scope.
//!
//! # Suspension and staleness
//!
//! The manager lives on the UI thread and never blocks. Work that has to wait
//! is split in two:
//!
//! * Media loads are tagged with a [`LoadToken`]. Readiness, failure and end of
//!   track reports carrying any token but the latest are ignored, so a slow
//!   load can never override a newer selection.
//! * Populating the global shuffle cache is a task for the catalog worker. The
//!   request records the manager's generation, which every user intent bumps;
//!   when the result arrives the random play only happens if no newer intent
//!   came in meanwhile.
//!
//! Failures never propagate to the caller. They are logged, converted to a
//! [`PlaybackError`] and emitted as [`PlaybackEvent::Error`].

mod global_cache;
pub mod matching;


use std::sync::{Arc, mpsc::Sender};

use log::{debug, info, warn};

use crate::{
    catalog::{self, CancelToken},
    error::{CatalogError, PlaybackError},
    events::AppEvent,
    model::{ContextKind, Direction, PlayMode, PlaylistContext, Track, TrackKey, context},
    player::{LoadToken, MediaSink, PlayerState},
    playback::global_cache::{CacheRequest, GlobalCache},
    tasks::AppTask,
};

/// Notifications emitted by the playback core for the user interface.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    NowPlayingChanged(Track),
    StateChanged { is_playing: bool, mode: PlayMode },
    ProgressChanged { current_time: f64, duration: f64 },
    VolumeChanged { volume: f32, muted: bool },
    PageChanged { page: usize, total_pages: usize },
    Notice(String),
    Error(PlaybackError),
}

/// Result of asking the manager to play the active track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The source was handed to the sink; playback starts when it is ready.
    Loading(LoadToken),
    NothingToPlay,
    Failed,
}

/// How a list of rows relates to what is playing, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightScope {
    /// The rows are the page the manager is playing from.
    PlayingPage,
    /// The rows are a page of some other listing.
    OtherPage,
    /// The rows are a short, complete list shown in full.
    CompleteList,
}

/// Chooses an index in `0..len`.
pub trait TrackPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random choice.
pub struct RandomPicker;

impl TrackPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::random_range(0..len)
    }
}

impl<F: FnMut(usize) -> usize> TrackPicker for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Mutable session state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// The tracks addressed by `active_index`.
    pub visible_page: Vec<Track>,
    pub active_index: Option<usize>,
    pub mode: PlayMode,
    pub context: PlaylistContext,
    pub volume: f32,
    pub muted: bool,
    pub is_playing: bool,
    pub now_playing: Option<Track>,
    pub current_time: f64,
    pub duration: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            visible_page: Vec::new(),
            active_index: None,
            mode: PlayMode::default(),
            context: PlaylistContext::default(),
            volume: 1.0,
            muted: false,
            is_playing: false,
            now_playing: None,
            current_time: 0.0,
            duration: 0.0,
        }
    }
}

pub struct PlaybackContextManager {
    state: PlaybackState,

    sink: Box<dyn MediaSink>,
    picker: Box<dyn TrackPicker>,

    event_tx: Sender<AppEvent>,
    task_tx: Sender<AppTask>,

    server_url: String,
    page_size: usize,

    generation: u64,
    load_token: LoadToken,
    load_pending: bool,
    sink_loaded: bool,

    global_cache: GlobalCache,
    global_cancel: CancelToken,
    inconsistencies: u64,
}

impl PlaybackContextManager {
    /// Creates a manager driving `sink`.
    ///
    /// # Arguments
    ///
    /// * `sink` - The media sink, exclusively owned from now on.
    /// * `event_tx` - Channel receiving [`AppEvent::Playback`] notifications.
    /// * `task_tx` - Channel to the catalog worker, used to populate the global
    ///   shuffle cache.
    /// * `server_url` - Base URL playback URLs are built from.
    /// * `page_size` - Tracks per page of an all-tracks context.
    pub fn new(
        sink: Box<dyn MediaSink>,
        event_tx: Sender<AppEvent>,
        task_tx: Sender<AppTask>,
        server_url: &str,
        page_size: usize,
    ) -> Self {
        Self {
            state: PlaybackState::default(),
            sink,
            picker: Box::new(RandomPicker),
            event_tx,
            task_tx,
            server_url: server_url.trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
            generation: 0,
            load_token: LoadToken::default(),
            load_pending: false,
            sink_loaded: false,
            global_cache: GlobalCache::default(),
            global_cancel: CancelToken::new(),
            inconsistencies: 0,
        }
    }

    /// Replaces the random source used by shuffle.
    pub fn with_picker(mut self, picker: Box<dyn TrackPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn mode(&self) -> PlayMode {
        self.state.mode
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of times the current track was missing from its own context.
    pub fn inconsistency_count(&self) -> u64 {
        self.inconsistencies
    }

    /// The track at the active index of the visible page.
    pub fn current_track(&self) -> Option<&Track> {
        self.state
            .active_index
            .and_then(|i| self.state.visible_page.get(i))
    }

    pub fn player_state(&self) -> PlayerState {
        if self.state.is_playing {
            PlayerState::Playing
        } else if self.sink_loaded || self.load_pending {
            PlayerState::Paused
        } else {
            PlayerState::Stopped
        }
    }

    /// The global shuffle list, if it has been populated.
    pub fn global_tracks(&self) -> Option<Arc<[Track]>> {
        self.global_cache.tracks().cloned()
    }

    /// Changes the page size used for all-tracks contexts.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        let ctx = &mut self.state.context;
        if ctx.kind == ContextKind::AllTracks {
            ctx.total_pages = context::total_pages(ctx.full_list.len(), self.page_size);
            ctx.current_page = ctx.current_page.clamp(1, ctx.total_pages);
        }
    }

    /// Sets the visible page and context and starts playing `list[index]`.
    ///
    /// When `context` is `None` the prior context is kept. A context without a
    /// full list adopts `list` as its full list.
    pub fn play_from_list(
        &mut self,
        list: Vec<Track>,
        index: usize,
        context: Option<PlaylistContext>,
    ) -> PlayOutcome {
        if index >= list.len() {
            warn!("Play request for index {} of a {} track list", index, list.len());
            return PlayOutcome::NothingToPlay;
        }

        self.generation += 1;

        let mut context = context.unwrap_or_else(|| self.state.context.clone());
        if context.kind != ContextKind::Unknown && context.full_list.is_empty() {
            context.full_list = Arc::from(list.clone());
        }

        self.state.visible_page = list;
        self.state.active_index = Some(index);
        self.state.context = context;

        self.play_current()
    }

    /// Loads the active track into the sink, replacing whatever was playing.
    ///
    /// Playback begins once the sink reports the load ready via
    /// [`on_media_ready`](Self::on_media_ready).
    pub fn play_current(&mut self) -> PlayOutcome {
        let Some(track) = self.current_track().cloned() else {
            debug!("Nothing to play");
            return PlayOutcome::NothingToPlay;
        };

        if self.state.is_playing {
            if let Err(e) = self.sink.pause() {
                warn!("Failed to pause before switching source: {:#}", e);
            }
            self.state.is_playing = false;
            self.emit_state();
        }

        self.load_token = self.load_token.next();
        self.sink_loaded = false;
        self.state.current_time = 0.0;
        self.state.duration = track.duration_secs as f64;
        self.state.now_playing = Some(track.clone());
        self.emit(PlaybackEvent::NowPlayingChanged(track.clone()));

        let url = catalog::media_url(&self.server_url, &track.media_ref);
        info!("Loading '{}' from {}", track.title, url);

        match self.sink.load(&url, self.load_token) {
            Ok(()) => {
                self.load_pending = true;
                PlayOutcome::Loading(self.load_token)
            }
            Err(e) => {
                self.load_pending = false;
                self.report(PlaybackError::MediaLoad {
                    title: track.title,
                    reason: format!("{:#}", e),
                });
                PlayOutcome::Failed
            }
        }
    }

    /// Moves to the next or previous track as the play mode dictates.
    pub fn advance(&mut self, direction: Direction) {
        self.generation += 1;

        match (self.state.mode, self.state.context.kind) {
            (PlayMode::Shuffle, ContextKind::AllTracks) => self.play_random_global(),
            (PlayMode::Shuffle, _) => self.play_random_in_context(),
            _ => self.step_in_context(direction),
        }
    }

    /// Steps circularly through the context's full list.
    ///
    /// Without a full list the step wraps within the visible page instead.
    pub fn step_in_context(&mut self, direction: Direction) {
        if self.state.context.full_list.is_empty() {
            let len = self.state.visible_page.len();
            if len == 0 {
                return;
            }
            let index = match (self.state.active_index, direction) {
                (Some(i), Direction::Next) => (i + 1) % len,
                (Some(i), Direction::Previous) => (i + len - 1) % len,
                (None, Direction::Next) => 0,
                (None, Direction::Previous) => len - 1,
            };
            self.state.active_index = Some(index);
            self.play_current();
            return;
        }

        let Some(current) = self.current_track().cloned() else {
            debug!("No active track to step from");
            return;
        };

        let Some(position) = self.state.context.position_of(&current) else {
            self.record_inconsistency(&current);
            return;
        };

        let len = self.state.context.full_list.len();
        let target = match direction {
            Direction::Next => (position + 1) % len,
            Direction::Previous => (position + len - 1) % len,
        };

        self.switch_to_global_index(target);
    }

    /// Plays a uniformly random track from the context's full list.
    pub fn play_random_in_context(&mut self) {
        let len = self.state.context.full_list.len();
        if len == 0 {
            self.play_random_global();
            return;
        }

        let index = self.picker.pick(len).min(len - 1);
        let track = self.state.context.full_list[index].clone();

        if self.switch_to_global_index(index) {
            let kind = self.state.context.kind;
            self.notice(format!("Shuffle in {}: {}", kind.label(), track.title));
        }
    }

    /// Plays a uniformly random track from the whole catalog.
    ///
    /// The first call populates the global cache through the catalog worker;
    /// calls made while that is in flight join it rather than starting another
    /// fetch. The pick is played as a one-track visible page and the displayed
    /// page is not changed.
    pub fn play_random_global(&mut self) {
        match self.global_cache.request(self.generation) {
            CacheRequest::Ready(tracks) => self.play_random_from(&tracks),
            CacheRequest::StartLoad => {
                info!("Populating global track list for shuffle");
                self.start_global_load();
            }
            CacheRequest::Joined => {
                debug!("Global track list already loading");
            }
        }
    }

    /// Starts populating the global cache without a shuffle waiting on it.
    /// Does nothing once a population is running or done.
    pub fn prefetch_global_cache(&mut self) {
        if self.global_cache.prefetch() {
            info!("Prefetching global track list");
            self.start_global_load();
        }
    }

    /// Aborts an in-flight global cache population between catalog requests.
    pub fn cancel_global_load(&self) {
        self.global_cancel.cancel();
    }

    fn start_global_load(&mut self) {
        let task = AppTask::LoadGlobalTracks {
            cancel: self.global_cancel.clone(),
        };
        if self.task_tx.send(task).is_err() {
            let waiting = self.global_cache.fail();
            if waiting.is_some() {
                self.report(PlaybackError::CatalogFetch(CatalogError::Http(
                    "catalog worker unavailable".to_string(),
                )));
            }
        }
    }

    /// Completes a global cache population started by this manager.
    ///
    /// If the shuffle request that triggered the population is still the
    /// latest user intent, a random track is played now.
    pub fn on_global_tracks_loaded(&mut self, result: Result<Vec<Track>, CatalogError>) {
        match result {
            Ok(tracks) => {
                info!("Global track list holds {} tracks", tracks.len());
                let waiting = self.global_cache.complete(tracks);
                match waiting {
                    Some(generation) if generation == self.generation => {
                        if let Some(tracks) = self.global_cache.tracks().cloned() {
                            self.play_random_from(&tracks);
                        }
                    }
                    Some(generation) => {
                        debug!(
                            "Dropping shuffle request from generation {} (now {})",
                            generation, self.generation
                        );
                    }
                    None => {}
                }
            }
            Err(e) => {
                warn!("Failed to populate global track list: {}", e);
                if self.global_cache.fail() == Some(self.generation) {
                    self.report(PlaybackError::CatalogFetch(e));
                }
            }
        }
    }

    fn play_random_from(&mut self, tracks: &Arc<[Track]>) {
        if tracks.is_empty() {
            self.notice("No tracks available to shuffle".to_string());
            return;
        }

        let index = self.picker.pick(tracks.len()).min(tracks.len() - 1);
        let track = tracks[index].clone();

        self.state.visible_page = vec![track.clone()];
        self.state.active_index = Some(0);

        if self.play_current() != PlayOutcome::Failed {
            self.notice(format!("Shuffle: {} by {}", track.title, track.artist));
        }
    }

    /// Makes the track at `index` of the full list active and plays it,
    /// bringing its page into view first if necessary.
    fn switch_to_global_index(&mut self, index: usize) -> bool {
        let Some(target) = self.state.context.full_list.get(index).cloned() else {
            return false;
        };

        if let Some(position) = self.position_in_visible(&target) {
            self.state.active_index = Some(position);
            self.play_current();
            return true;
        }

        if self.state.context.kind == ContextKind::AllTracks {
            if let Err(e) = self.resolve_page_for_index(index) {
                self.report(e);
                return false;
            }
            match self.position_in_visible(&target) {
                Some(position) => {
                    self.state.active_index = Some(position);
                    self.play_current();
                    true
                }
                None => {
                    self.record_inconsistency(&target);
                    false
                }
            }
        } else {
            self.state.visible_page = vec![target];
            self.state.active_index = Some(0);
            self.play_current();
            true
        }
    }

    /// Brings the page holding `global_index` of an all-tracks context into
    /// the visible page.
    ///
    /// The full list is already in memory, so this is a slice operation. The
    /// active index follows the playing track if it is on the new page.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::PageResolution`] if the context is not an
    /// all-tracks context or the page is out of range.
    pub fn resolve_page_for_index(&mut self, global_index: usize) -> Result<(), PlaybackError> {
        let ctx = &self.state.context;
        let page = PlaylistContext::page_for_index(global_index, self.page_size);
        let out_of_range = PlaybackError::PageResolution {
            page,
            total_pages: ctx.total_pages,
        };

        if ctx.kind != ContextKind::AllTracks || global_index >= ctx.full_list.len() {
            return Err(out_of_range);
        }

        let Some(slice) = ctx.page_slice(page, self.page_size) else {
            return Err(out_of_range);
        };

        if page == ctx.current_page && self.is_visible_page(slice) {
            return Ok(());
        }

        let slice = slice.to_vec();
        let total_pages = ctx.total_pages;
        let playing = self.current_track().cloned();

        self.state.visible_page = slice;
        self.state.context.current_page = page;
        self.state.active_index = playing.and_then(|t| self.position_in_visible(&t));

        debug!("Resolved page {} of {}", page, total_pages);
        self.emit(PlaybackEvent::PageChanged { page, total_pages });

        Ok(())
    }

    /// Cycles the play mode `Sequential -> Shuffle -> RepeatOne`.
    pub fn cycle_mode(&mut self) {
        self.set_mode(self.state.mode.cycle());
    }

    pub fn set_mode(&mut self, mode: PlayMode) {
        self.state.mode = mode;
        self.emit_state();
    }

    /// Handles the sink reaching the end of the current track.
    pub fn on_track_ended(&mut self, token: LoadToken) {
        if token != self.load_token {
            debug!("Ignoring end of superseded track");
            return;
        }

        match self.state.mode {
            PlayMode::RepeatOne => self.replay(),
            PlayMode::Shuffle => self.advance(Direction::Next),
            PlayMode::Sequential => self.continue_sequence(),
        }
    }

    fn replay(&mut self) {
        let result = self.sink.seek_to(0.0).and_then(|_| self.sink.play());
        match result {
            Ok(()) => {
                self.state.current_time = 0.0;
                self.state.is_playing = true;
                self.emit(PlaybackEvent::ProgressChanged {
                    current_time: 0.0,
                    duration: self.state.duration,
                });
                self.emit_state();
            }
            Err(e) => self.report(PlaybackError::MediaLoad {
                title: self.now_playing_title(),
                reason: format!("{:#}", e),
            }),
        }
    }

    fn continue_sequence(&mut self) {
        let Some(active) = self.state.active_index else {
            self.stop_playback(None);
            return;
        };

        if active + 1 < self.state.visible_page.len() {
            self.state.active_index = Some(active + 1);
            self.play_current();
            return;
        }

        if self.state.context.kind != ContextKind::AllTracks {
            self.stop_playback(Some("Playlist complete"));
            return;
        }

        let current = self.state.visible_page[active].clone();
        let Some(position) = self.state.context.position_of(&current) else {
            self.record_inconsistency(&current);
            self.stop_playback(None);
            return;
        };

        let next = position + 1;
        match self.resolve_page_for_index(next) {
            Ok(()) => {
                let target = self.state.context.full_list[next].clone();
                let index = self.position_in_visible(&target).unwrap_or(0);
                self.state.active_index = Some(index);
                self.play_current();
                let page = self.state.context.current_page;
                self.notice(format!("Advanced to page {}", page));
            }
            Err(e) => {
                // Running off the final page is the normal end of the list.
                debug!("Sequence finished: {}", e);
                self.stop_playback(Some("Playlist complete"));
            }
        }
    }

    fn stop_playback(&mut self, notice: Option<&str>) {
        if let Err(e) = self.sink.stop() {
            warn!("Failed to stop playback: {:#}", e);
        }
        self.state.is_playing = false;
        self.load_pending = false;
        self.sink_loaded = false;
        self.emit_state();

        if let Some(notice) = notice {
            self.notice(notice.to_string());
        }
    }

    /// The sink finished loading the source for `token`.
    pub fn on_media_ready(&mut self, token: LoadToken) {
        if token != self.load_token || !self.load_pending {
            debug!("Ignoring readiness of superseded load");
            return;
        }

        self.load_pending = false;
        self.sink_loaded = true;

        match self.sink.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.emit_state();
            }
            Err(e) => self.report(PlaybackError::MediaLoad {
                title: self.now_playing_title(),
                reason: format!("{:#}", e),
            }),
        }
    }

    /// The sink rejected the source for `token`. Not retried.
    pub fn on_media_failed(&mut self, token: LoadToken, reason: String) {
        if token != self.load_token {
            debug!("Ignoring failure of superseded load: {}", reason);
            return;
        }

        self.load_pending = false;
        self.sink_loaded = false;
        self.state.is_playing = false;
        self.emit_state();
        self.report(PlaybackError::MediaLoad {
            title: self.now_playing_title(),
            reason,
        });
    }

    pub fn on_progress(&mut self, current_time: f64) {
        self.state.current_time = current_time.max(0.0);
        self.emit_progress();
    }

    pub fn on_duration(&mut self, duration: f64) {
        if duration.is_finite() && duration > 0.0 {
            self.state.duration = duration;
            self.emit_progress();
        }
    }

    /// Pauses or resumes the loaded track.
    ///
    /// After playback has stopped the active track is loaded again. While a
    /// load is pending nothing happens.
    pub fn toggle_play_pause(&mut self) {
        if self.load_pending {
            return;
        }

        if !self.sink_loaded {
            self.play_current();
            return;
        }

        let playing = !self.state.is_playing;
        let result = if playing {
            self.sink.play()
        } else {
            self.sink.pause()
        };

        match result {
            Ok(()) => {
                self.state.is_playing = playing;
                self.emit_state();
            }
            Err(e) => self.report(PlaybackError::MediaLoad {
                title: self.now_playing_title(),
                reason: format!("{:#}", e),
            }),
        }
    }

    /// Seeks to `fraction` (clamped to `0..=1`) of the track's duration.
    pub fn seek(&mut self, fraction: f64) {
        if !self.sink_loaded || self.state.duration <= 0.0 {
            return;
        }

        let position = fraction.clamp(0.0, 1.0) * self.state.duration;
        if let Err(e) = self.sink.seek_to(position) {
            warn!("Seek failed: {:#}", e);
            return;
        }
        self.state.current_time = position;
        self.emit_progress();
    }

    pub fn seek_relative(&mut self, seconds: f64) {
        if self.state.duration > 0.0 {
            self.seek((self.state.current_time + seconds) / self.state.duration);
        }
    }

    /// Sets the output volume, clamped to `0..=1`.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if let Err(e) = self.sink.set_volume(volume) {
            warn!("Failed to set volume: {:#}", e);
            return;
        }
        self.state.volume = volume;
        self.emit_volume();
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.state.volume + delta);
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.state.muted;
        if let Err(e) = self.sink.set_muted(muted) {
            warn!("Failed to toggle mute: {:#}", e);
            return;
        }
        self.state.muted = muted;
        self.emit_volume();
    }

    /// Rows of `rows` to highlight as the playing track.
    ///
    /// In shuffle mode a pick that is not on the displayed page is not
    /// highlighted at all, except on complete lists.
    pub fn highlight_rows(&self, rows: &[TrackKey<'_>], scope: HighlightScope) -> Vec<usize> {
        let Some(track) = &self.state.now_playing else {
            return Vec::new();
        };

        if self.state.mode == PlayMode::Shuffle
            && scope != HighlightScope::CompleteList
            && !matching::is_present(rows, track)
        {
            return Vec::new();
        }

        let fallback = match scope {
            HighlightScope::PlayingPage if rows.len() == self.state.visible_page.len() => {
                self.state.active_index
            }
            _ => None,
        };

        matching::matching_rows(rows, track, fallback)
    }

    fn position_in_visible(&self, track: &Track) -> Option<usize> {
        self.state
            .visible_page
            .iter()
            .position(|t| t.same_track(track))
    }

    fn is_visible_page(&self, slice: &[Track]) -> bool {
        slice.len() == self.state.visible_page.len()
            && slice
                .iter()
                .zip(&self.state.visible_page)
                .all(|(a, b)| a.same_track(b))
    }

    fn now_playing_title(&self) -> String {
        self.state
            .now_playing
            .as_ref()
            .map(|t| t.title.clone())
            .unwrap_or_default()
    }

    fn record_inconsistency(&mut self, track: &Track) {
        self.inconsistencies += 1;
        let err = PlaybackError::ContextInconsistency {
            context: self.state.context.kind.label(),
        };
        warn!("{} ('{}' by {})", err, track.title, track.artist);
    }

    fn report(&mut self, err: PlaybackError) {
        warn!("{}", err);
        if matches!(err, PlaybackError::MediaLoad { .. }) {
            self.state.is_playing = false;
        }
        self.emit(PlaybackEvent::Error(err));
    }

    fn notice(&self, message: String) {
        info!("{}", message);
        self.emit(PlaybackEvent::Notice(message));
    }

    fn emit_state(&self) {
        self.emit(PlaybackEvent::StateChanged {
            is_playing: self.state.is_playing,
            mode: self.state.mode,
        });
    }

    fn emit_progress(&self) {
        self.emit(PlaybackEvent::ProgressChanged {
            current_time: self.state.current_time,
            duration: self.state.duration,
        });
    }

    fn emit_volume(&self) {
        self.emit(PlaybackEvent::VolumeChanged {
            volume: self.state.volume,
            muted: self.state.muted,
        });
    }

    fn emit(&self, event: PlaybackEvent) {
        if self.event_tx.send(AppEvent::Playback(event)).is_err() {
            debug!("Event channel closed");
        }
    }
}
