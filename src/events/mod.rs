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

//! Application events and the main event loop.
//!
//! Everything that happens to the application arrives as an [`AppEvent`] on a
//! single channel: key presses, the periodic tick, reports from the media
//! player, results from the catalog worker and notifications from the
//! playback core. The UI thread handles them one at a time and redraws after
//! each, so application state is only ever touched from that thread.

mod handlers;
mod key_handlers;

#[cfg(test)]
mod tests;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    browser::MainView,
    error::CatalogError,
    model::{Collection, CollectionDetail, CollectionPage, Track},
    player::LoadToken,
    playback::PlaybackEvent,
    render::draw,
};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,

    Playback(PlaybackEvent),

    // Media player reports
    MediaReady(LoadToken),
    MediaFailed(LoadToken, String),
    TrackEnded(LoadToken),
    TimeChanged(f64),
    DurationChanged(f64),

    // Catalog results
    AudioConfigLoaded(Option<usize>),
    HomeLoaded {
        generation: u64,
        recent: Vec<Track>,
        albums: Vec<Collection>,
    },
    AlbumsLoaded {
        generation: u64,
        page: CollectionPage,
    },
    AlbumLoaded {
        generation: u64,
        album: CollectionDetail,
    },
    ViewLoadFailed {
        generation: u64,
        error: CatalogError,
    },
    GlobalTracksLoaded(Result<Vec<Track>, CatalogError>),

    SetMainView(MainView),
    OpenAlbum(i64),

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event)? {
            break;
        }
        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies one event to the application, returning `false` once the
/// application should exit.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<bool> {
    use handlers::*;

    match event {
        AppEvent::ExitApplication => {
            app.playback.cancel_global_load();
            return Ok(false);
        }
        AppEvent::FatalError(message) => return handle_fatal_error(message),

        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app)?,

        AppEvent::Playback(event) => handle_playback_event(app, event),

        AppEvent::MediaReady(token) => app.playback.on_media_ready(token),
        AppEvent::MediaFailed(token, reason) => app.playback.on_media_failed(token, reason),
        AppEvent::TrackEnded(token) => app.playback.on_track_ended(token),
        AppEvent::TimeChanged(secs) => app.playback.on_progress(secs),
        AppEvent::DurationChanged(secs) => app.playback.on_duration(secs),

        AppEvent::AudioConfigLoaded(per_page) => handle_audio_config_loaded(app, per_page),
        AppEvent::HomeLoaded {
            generation,
            recent,
            albums,
        } => handle_home_loaded(app, generation, recent, albums),
        AppEvent::AlbumsLoaded { generation, page } => handle_albums_loaded(app, generation, page),
        AppEvent::AlbumLoaded { generation, album } => handle_album_loaded(app, generation, album),
        AppEvent::ViewLoadFailed { generation, error } => {
            handle_view_load_failed(app, generation, error)
        }
        AppEvent::GlobalTracksLoaded(result) => handle_global_tracks_loaded(app, result),

        AppEvent::SetMainView(view) => handle_set_main_view(app, view)?,
        AppEvent::OpenAlbum(id) => handle_open_album(app, id)?,

        AppEvent::Error(message) => handle_error(app, message),
    }

    Ok(true)
}
