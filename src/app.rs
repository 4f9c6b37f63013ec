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

//! Application state.

use std::sync::mpsc::{Receiver, Sender};

use anyhow::Result;

use crate::{
    browser::{MainView, MediaBrowser},
    commander::Commander,
    config::AppConfig,
    events::AppEvent,
    model::search::SearchQuery,
    player::MediaSink,
    playback::PlaybackContextManager,
    tasks::AppTask,
    theme::Theme,
    toast::ToastManager,
};

/// Everything the UI thread owns.
pub struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,
    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) playback: PlaybackContextManager,

    pub(crate) browser: MediaBrowser,
    pub(crate) commander: Commander,
    pub(crate) search: SearchQuery,
    pub(crate) toasts: ToastManager,

    /// Generation of a track list view waiting for the global track list.
    pub(crate) tracks_waiting: Option<u64>,
}

impl App {
    /// Creates the application state around a media sink.
    ///
    /// Events from the sink and from background workers must be sent on
    /// `event_tx`; they are received on `event_rx`.
    pub fn new(
        config: AppConfig,
        sink: Box<dyn MediaSink>,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        task_tx: Sender<AppTask>,
    ) -> Self {
        let page_size = config.tracks_per_page(None);

        let mut playback = PlaybackContextManager::new(
            sink,
            event_tx.clone(),
            task_tx.clone(),
            config.server_url(),
            page_size,
        );
        playback.set_volume(config.volume);

        Self {
            theme: Theme::default(),
            playback,
            browser: MediaBrowser::new(page_size),
            commander: Commander::new(),
            search: SearchQuery::new(config.search_debounce()),
            toasts: ToastManager::new(config.toast_ttl()),
            tracks_waiting: None,
            event_tx,
            event_rx,
            task_tx,
            config,
        }
    }

    /// Requests the initial data: the server's page size and the home view.
    /// The global track list is fetched once the home view has loaded.
    pub fn start(&mut self) -> Result<()> {
        self.task_tx.send(AppTask::LoadAudioConfig)?;
        self.event_tx.send(AppEvent::SetMainView(MainView::Home))?;
        Ok(())
    }

    /// A sender for feeding events into the application.
    pub fn event_sender(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// The configuration, with the volume the session ended on.
    pub fn config(&self) -> AppConfig {
        AppConfig {
            volume: self.playback.state().volume,
            ..self.config.clone()
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
