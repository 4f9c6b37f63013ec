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

use std::sync::mpsc::{self, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::{
    catalog::fake::FakeCatalog,
    config::AppConfig,
    model::{PlayMode, testing::tracks},
    player::recording::RecordingSink,
    tasks::{self, AppTask},
};

struct AppHarness {
    app: App,
    sink: RecordingSink,
    task_rx: Receiver<AppTask>,
}

impl AppHarness {
    fn new() -> Self {
        let config = AppConfig {
            search_debounce_ms: 0,
            ..AppConfig::default()
        };
        let (event_tx, event_rx) = mpsc::channel();
        let (task_tx, task_rx) = mpsc::channel();
        let sink = RecordingSink::default();
        let app = App::new(config, Box::new(sink.clone()), event_tx, event_rx, task_tx);

        let mut harness = Self { app, sink, task_rx };
        harness.pump();
        harness
    }

    fn send(&mut self, event: AppEvent) -> bool {
        handle_event(&mut self.app, event).unwrap()
    }

    /// Handles everything queued on the event channel, including events
    /// queued while handling.
    fn pump(&mut self) {
        while let Ok(event) = self.app.event_rx.try_recv() {
            handle_event(&mut self.app, event).unwrap();
        }
    }

    fn key(&mut self, code: KeyCode) {
        self.send(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        self.pump();
    }

    fn tasks(&self) -> Vec<AppTask> {
        self.task_rx.try_iter().collect()
    }

    /// The generation of the only view load requested since the last call.
    fn view_generation(&self) -> u64 {
        let tasks = self.tasks();
        assert_eq!(tasks.len(), 1, "unexpected tasks {:?}", tasks);
        match &tasks[0] {
            AppTask::LoadHome { generation }
            | AppTask::LoadAlbums { generation, .. }
            | AppTask::LoadAlbum { generation, .. } => *generation,
            other => panic!("not a view load: {:?}", other),
        }
    }

    fn show_tracks(&mut self, count: usize) {
        self.key(KeyCode::Char('3'));
        assert_eq!(self.global_loads(), 1);
        self.send(AppEvent::GlobalTracksLoaded(Ok(tracks("Song", count))));
    }

    /// Number of global track list loads requested since the last call.
    fn global_loads(&self) -> usize {
        self.tasks()
            .iter()
            .filter(|task| matches!(task, AppTask::LoadGlobalTracks { .. }))
            .count()
    }

    /// Runs queued tasks against `catalog` until the application stops
    /// asking for more.
    fn serve(&mut self, catalog: &FakeCatalog) {
        loop {
            let pending = self.tasks();
            if pending.is_empty() {
                break;
            }
            for task in pending {
                tasks::run_task(catalog, &self.app.event_tx, task).unwrap();
            }
            self.pump();
        }
    }
}

fn task_name(task: &AppTask) -> &'static str {
    match task {
        AppTask::LoadAudioConfig => "audio config",
        AppTask::LoadHome { .. } => "home",
        AppTask::LoadAlbums { .. } => "albums",
        AppTask::LoadAlbum { .. } => "album",
        AppTask::LoadGlobalTracks { .. } => "global tracks",
    }
}

#[test]
fn test_exit_and_fatal_error() {
    let mut h = AppHarness::new();
    assert!(!h.send(AppEvent::ExitApplication));
    assert!(handle_event(&mut h.app, AppEvent::FatalError("boom".to_string())).is_err());
}

#[test]
fn test_superseded_view_result_is_dropped() {
    let mut h = AppHarness::new();

    h.key(KeyCode::Char('2'));
    let albums_generation = h.view_generation();
    h.key(KeyCode::Char('3'));
    assert_eq!(h.global_loads(), 1);

    h.send(AppEvent::AlbumsLoaded {
        generation: albums_generation,
        page: CollectionPage {
            collections: vec![Collection {
                id: 1,
                name: "Album 1".to_string(),
                artist: None,
                track_count: 1,
                cover_ref: None,
            }],
            pagination: Default::default(),
        },
    });
    assert!(h.app.browser.albums.is_empty());
    assert!(h.app.browser.loading);

    h.send(AppEvent::GlobalTracksLoaded(Ok(tracks("Song", 3))));
    assert_eq!(h.app.browser.tracks.len(), 3);
    assert!(!h.app.browser.loading);
}

#[test]
fn test_enter_plays_selected_track() {
    let mut h = AppHarness::new();
    h.show_tracks(3);

    h.key(KeyCode::Char('j'));
    h.key(KeyCode::Enter);

    let loads = h.sink.loads();
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].0, "http://127.0.0.1:5000/audios/Song/001.mp3");
    assert_eq!(
        h.app.playback.current_track().map(|t| t.title.as_str()),
        Some("Song 1")
    );
}

#[test]
fn test_track_end_moves_to_next_track() {
    let mut h = AppHarness::new();
    h.show_tracks(3);
    h.key(KeyCode::Enter);

    let token = h.sink.last_token().unwrap();
    h.send(AppEvent::MediaReady(token));
    assert!(h.app.playback.state().is_playing);

    h.send(AppEvent::TrackEnded(token));
    assert_eq!(
        h.app.playback.current_track().map(|t| t.title.as_str()),
        Some("Song 1")
    );
    assert_eq!(h.sink.loads().len(), 2);
}

#[test]
fn test_playback_page_change_moves_tracks_view() {
    let mut h = AppHarness::new();
    h.send(AppEvent::AudioConfigLoaded(Some(2)));
    h.show_tracks(5);
    assert_eq!(h.app.browser.tracks_total_pages(), 3);

    h.key(KeyCode::Char('j'));
    h.key(KeyCode::Enter);
    let token = h.sink.last_token().unwrap();
    h.send(AppEvent::MediaReady(token));
    h.send(AppEvent::TrackEnded(token));
    h.pump();

    assert_eq!(
        h.app.playback.current_track().map(|t| t.title.as_str()),
        Some("Song 2")
    );
    assert_eq!(h.app.browser.tracks_page, 2);
}

#[test]
fn test_search_shows_matching_tracks() {
    let mut h = AppHarness::new();
    h.tasks();

    h.key(KeyCode::Char('/'));
    h.key(KeyCode::Char('s'));
    h.key(KeyCode::Char('o'));
    assert!(h.tasks().is_empty());

    h.send(AppEvent::Tick);
    assert_eq!(h.app.browser.view, MainView::Tracks);
    assert_eq!(h.global_loads(), 1);

    let mut all = tracks("Song", 3);
    all.extend(tracks("Tune", 2));
    h.send(AppEvent::GlobalTracksLoaded(Ok(all)));

    assert_eq!(h.app.browser.tracks.len(), 3);
    assert!(h.app.browser.tracks.iter().all(|t| t.title.starts_with("Song")));
}

#[test]
fn test_startup_loads_home_before_global_tracks() {
    let mut h = AppHarness::new();
    h.app.start().unwrap();
    h.pump();

    let queued = h.tasks();
    let names: Vec<_> = queued.iter().map(task_name).collect();
    assert_eq!(names, ["audio config", "home"]);

    let generation = match &queued[1] {
        AppTask::LoadHome { generation } => *generation,
        other => panic!("expected a home load, got {:?}", other),
    };
    h.send(AppEvent::HomeLoaded {
        generation,
        recent: tracks("Recent", 2),
        albums: Vec::new(),
    });
    assert_eq!(h.global_loads(), 1);
}

#[test]
fn test_tracks_view_joins_global_load() {
    let mut h = AppHarness::new();
    h.app.playback.prefetch_global_cache();
    assert_eq!(h.global_loads(), 1);

    h.key(KeyCode::Char('3'));
    h.key(KeyCode::Char('3'));
    assert_eq!(h.global_loads(), 0);
    assert!(h.app.browser.loading);

    h.send(AppEvent::GlobalTracksLoaded(Ok(tracks("Song", 4))));
    assert!(!h.app.browser.loading);
    assert_eq!(h.app.browser.tracks.len(), 4);
}

#[test]
fn test_catalog_is_walked_once_per_session() {
    let catalog = FakeCatalog::with_albums(10, 3);
    let mut h = AppHarness::new();
    h.app.start().unwrap();
    h.pump();
    h.key(KeyCode::Char('3'));

    h.serve(&catalog);

    // one detail per album for the global list, five for the home view
    assert_eq!(catalog.detail_calls(), 15);
    assert_eq!(h.app.browser.view, MainView::Tracks);
    assert_eq!(h.app.browser.tracks.len(), 30);
    assert!(!h.app.browser.loading);
}

#[test]
fn test_failed_global_load_ends_tracks_view_load() {
    let mut h = AppHarness::new();
    h.key(KeyCode::Char('3'));
    assert_eq!(h.global_loads(), 1);

    h.send(AppEvent::GlobalTracksLoaded(Err(
        crate::error::CatalogError::Status(503),
    )));
    assert!(!h.app.browser.loading);
    assert_eq!(
        h.app.toasts.iter().last().map(|t| t.severity),
        Some(crate::toast::Severity::Error)
    );

    h.key(KeyCode::Char('3'));
    assert_eq!(h.global_loads(), 1);
}

#[test]
fn test_exit_cancels_global_load() {
    let mut h = AppHarness::new();
    h.app.playback.prefetch_global_cache();
    let cancel = match h.tasks().pop() {
        Some(AppTask::LoadGlobalTracks { cancel }) => cancel,
        other => panic!("expected a global load, got {:?}", other),
    };

    assert!(!h.send(AppEvent::ExitApplication));
    assert!(cancel.is_cancelled());
}

#[test]
fn test_tracks_view_uses_global_cache_once_loaded() {
    let mut h = AppHarness::new();
    h.app.playback.prefetch_global_cache();
    h.tasks();

    h.send(AppEvent::GlobalTracksLoaded(Ok(tracks("Song", 12))));
    h.app.search.update("Song 1", std::time::Instant::now());
    h.app.search.take_now();
    h.key(KeyCode::Char('3'));

    assert!(h.tasks().is_empty());
    assert!(!h.app.browser.loading);
    // "Song 1", "Song 10" and "Song 11"
    assert_eq!(h.app.browser.tracks.len(), 3);
}

#[test]
fn test_notices_become_toasts() {
    let mut h = AppHarness::new();
    h.send(AppEvent::Playback(PlaybackEvent::Notice(
        "Playlist complete".to_string(),
    )));
    assert_eq!(
        h.app.toasts.iter().last().map(|t| t.message.as_str()),
        Some("Playlist complete")
    );
}

#[test]
fn test_stale_view_failure_is_silent() {
    let mut h = AppHarness::new();
    let home_generation = h.view_generation_after(KeyCode::Char('1'));
    h.key(KeyCode::Char('2'));
    h.tasks();

    h.send(AppEvent::ViewLoadFailed {
        generation: home_generation,
        error: crate::error::CatalogError::NotFound,
    });
    assert!(h.app.toasts.is_empty());
}

#[test]
fn test_playback_keys() {
    let mut h = AppHarness::new();
    h.key(KeyCode::Char('r'));
    assert_eq!(h.app.playback.mode(), PlayMode::Shuffle);

    h.key(KeyCode::Char('-'));
    assert!((h.app.playback.state().volume - 0.95).abs() < 1e-6);
    assert!((h.app.config().volume - 0.95).abs() < 1e-6);

    h.key(KeyCode::Char('m'));
    assert!(h.app.playback.state().muted);
}

impl AppHarness {
    fn view_generation_after(&mut self, code: KeyCode) -> u64 {
        self.tasks();
        self.key(code);
        self.view_generation()
    }
}
