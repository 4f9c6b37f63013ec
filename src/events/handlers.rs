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

//! Handlers for non-key application events.

use std::{sync::Arc, time::Instant};

use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};

use crate::{
    App,
    browser::MainView,
    catalog,
    error::CatalogError,
    model::{Collection, CollectionDetail, CollectionPage, Track},
    playback::PlaybackEvent,
    tasks::AppTask,
};

pub(super) fn handle_tick(app: &mut App) -> Result<()> {
    let now = Instant::now();
    app.toasts.tick(now);

    if let Some(query) = app.search.take_due(now) {
        debug!("Search settled on '{}'", query);
        apply_search(app)?;
    }

    Ok(())
}

pub(super) fn handle_playback_event(app: &mut App, event: PlaybackEvent) {
    match event {
        PlaybackEvent::NowPlayingChanged(track) => {
            debug!("Now playing '{}' by {}", track.title, track.artist);
        }
        PlaybackEvent::PageChanged { page, .. } => {
            let context = &app.playback.state().context;
            app.browser.follow_playback_page(context, page);
        }
        PlaybackEvent::VolumeChanged { volume, .. } => app.config.volume = volume,
        PlaybackEvent::Notice(message) => app.toasts.info(message, Instant::now()),
        PlaybackEvent::Error(err) => app.toasts.error(err.to_string(), Instant::now()),
        PlaybackEvent::StateChanged { .. } | PlaybackEvent::ProgressChanged { .. } => {}
    }
}

pub(super) fn handle_audio_config_loaded(app: &mut App, server_value: Option<usize>) {
    let per_page = app.config.tracks_per_page(server_value);
    info!("Showing {} tracks per page", per_page);
    app.playback.set_page_size(per_page);
    app.browser.set_tracks_per_page(per_page);
}

pub(super) fn handle_home_loaded(
    app: &mut App,
    generation: u64,
    recent: Vec<Track>,
    albums: Vec<Collection>,
) {
    if !app.browser.accepts(generation) {
        debug!("Dropping stale home view result");
        return;
    }
    app.browser.set_home(recent, albums);
    app.browser.finish_load();
    app.playback.prefetch_global_cache();
}

pub(super) fn handle_albums_loaded(app: &mut App, generation: u64, page: CollectionPage) {
    if !app.browser.accepts(generation) {
        debug!("Dropping stale album list result");
        return;
    }
    app.browser.set_albums(page);
    app.browser.finish_load();
}

pub(super) fn handle_album_loaded(app: &mut App, generation: u64, album: CollectionDetail) {
    if !app.browser.accepts(generation) {
        debug!("Dropping stale album result");
        return;
    }
    app.browser.set_album(album);
    app.browser.finish_load();
}

/// Completes the global track list, then builds a track list view that was
/// waiting for it.
pub(super) fn handle_global_tracks_loaded(
    app: &mut App,
    result: Result<Vec<Track>, CatalogError>,
) {
    let failure = result.as_ref().err().map(ToString::to_string);
    app.playback.on_global_tracks_loaded(result);

    let Some(generation) = app.tracks_waiting.take() else {
        return;
    };
    if !app.browser.accepts(generation) {
        debug!("Dropping stale track list result");
        return;
    }

    match app.playback.global_tracks() {
        Some(all) => show_tracks(app, all),
        None => {
            app.browser.finish_load();
            let message = format!(
                "Failed to load {}: {}",
                MainView::Tracks.title(),
                failure.unwrap_or_default()
            );
            warn!("{}", message);
            app.toasts.error(message, Instant::now());
        }
    }
}

pub(super) fn handle_view_load_failed(app: &mut App, generation: u64, err: CatalogError) {
    if !app.browser.accepts(generation) {
        return;
    }
    app.browser.finish_load();
    warn!("Failed to load {}: {}", app.browser.view.title(), err);
    app.toasts.error(
        format!("Failed to load {}: {}", app.browser.view.title(), err),
        Instant::now(),
    );
}

pub(super) fn handle_set_main_view(app: &mut App, view: MainView) -> Result<()> {
    app.browser.show(view);
    load_view(app)
}

pub(super) fn handle_open_album(app: &mut App, id: i64) -> Result<()> {
    app.browser.show(MainView::AlbumDetail);
    let generation = app.browser.begin_load();
    app.task_tx.send(AppTask::LoadAlbum { generation, id })?;
    Ok(())
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.toasts.error(message, Instant::now());
}

pub(super) fn handle_fatal_error(message: String) -> Result<bool> {
    error!("{}", message);
    Err(anyhow!(message))
}

/// Loads whatever the current view shows.
pub(super) fn load_view(app: &mut App) -> Result<()> {
    match app.browser.view {
        MainView::Home => {
            let generation = app.browser.begin_load();
            app.task_tx.send(AppTask::LoadHome { generation })?;
        }
        MainView::Albums => {
            let page = app.browser.albums_page();
            load_albums(app, page)?;
        }
        MainView::AlbumDetail => {
            if let Some(id) = app.browser.album.as_ref().map(|a| a.id) {
                handle_open_album(app, id)?;
            }
        }
        MainView::Tracks => load_tracks(app)?,
    }
    Ok(())
}

pub(super) fn load_albums(app: &mut App, page: usize) -> Result<()> {
    let generation = app.browser.begin_load();
    app.task_tx.send(AppTask::LoadAlbums {
        generation,
        page,
        per_page: app.config.albums_per_page,
        search: app.search.applied().map(str::to_string),
    })?;
    Ok(())
}

/// Shows all tracks, filtered by the applied search.
///
/// The list is built from the global track list, so a view opened while that
/// is still loading waits for it instead of walking the catalog again.
pub(super) fn load_tracks(app: &mut App) -> Result<()> {
    let generation = app.browser.begin_load();

    match app.playback.global_tracks() {
        Some(all) => {
            app.tracks_waiting = None;
            show_tracks(app, all);
        }
        None => {
            app.tracks_waiting = Some(generation);
            app.playback.prefetch_global_cache();
        }
    }
    Ok(())
}

fn show_tracks(app: &mut App, all: Arc<[Track]>) {
    let search = app.search.applied().map(str::to_string);
    let tracks = match &search {
        Some(query) => Arc::from(catalog::filter_tracks(&all, query)),
        None => all,
    };
    app.browser.set_tracks(tracks, search);
    app.browser.finish_load();
}

/// Reloads the current view for a changed search.
///
/// Views that cannot be searched switch to the track list.
pub(super) fn apply_search(app: &mut App) -> Result<()> {
    match app.browser.view {
        MainView::Albums => load_albums(app, 1),
        MainView::Tracks => load_tracks(app),
        MainView::Home | MainView::AlbumDetail => {
            if app.search.applied().is_none() {
                return Ok(());
            }
            app.browser.show(MainView::Tracks);
            load_tracks(app)
        }
    }
}
