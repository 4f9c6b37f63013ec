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

//! Media browser state management.
//!
//! This module holds what the catalog views display: the home screen with
//! recently added tracks and recommended albums, the paged album list, a
//! single album, and the paged list of all tracks. It tracks selection in each
//! view and knows how a selection in a view maps onto a playlist context.
//!
//! Every catalog load is tagged with a view generation. Opening another view
//! bumps the generation so results from a superseded load are dropped.

use std::sync::Arc;

use ratatui::widgets::{ListState, TableState};

use crate::{
    model::{
        Collection, CollectionDetail, CollectionPage, ContextKind, Pagination, PlaylistContext,
        ScopeKey, Track, TrackKey, context,
    },
    playback::HighlightScope,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    #[default]
    Home,
    Albums,
    AlbumDetail,
    Tracks,
}

impl MainView {
    pub fn title(self) -> &'static str {
        match self {
            MainView::Home => "Home",
            MainView::Albums => "Albums",
            MainView::AlbumDetail => "Album",
            MainView::Tracks => "Tracks",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomePane {
    #[default]
    Recent,
    Albums,
}

/// What activating the selection in the current view should do.
#[derive(Debug)]
pub(crate) enum Activation {
    Play {
        list: Vec<Track>,
        index: usize,
        context: PlaylistContext,
    },
    OpenAlbum(i64),
}

#[derive(Default)]
pub(crate) struct MediaBrowser {
    pub(crate) view: MainView,
    history: Vec<MainView>,
    generation: u64,
    pub(crate) loading: bool,

    pub(crate) home_pane: HomePane,
    pub(crate) recent: Vec<Track>,
    pub(crate) recommended: Vec<Collection>,

    pub(crate) albums: Vec<Collection>,
    pub(crate) albums_pagination: Pagination,

    pub(crate) album: Option<CollectionDetail>,

    pub(crate) tracks: Arc<[Track]>,
    pub(crate) tracks_page: usize,
    tracks_per_page: usize,
    tracks_search: Option<String>,

    pub(crate) recent_state: ListState,
    pub(crate) recommended_state: ListState,
    pub(crate) albums_state: ListState,
    pub(crate) album_state: TableState,
    pub(crate) tracks_state: TableState,
}

impl MediaBrowser {
    pub(crate) fn new(tracks_per_page: usize) -> Self {
        Self {
            tracks: Arc::from(Vec::new()),
            tracks_page: 1,
            tracks_per_page: tracks_per_page.max(1),
            ..Self::default()
        }
    }

    pub(crate) fn set_tracks_per_page(&mut self, per_page: usize) {
        self.tracks_per_page = per_page.max(1);
        self.tracks_page = self.tracks_page.clamp(1, self.tracks_total_pages());
    }

    /// Switches to `view`, remembering the current one for [`back`](Self::back).
    pub(crate) fn show(&mut self, view: MainView) {
        if view != self.view {
            self.history.push(self.view);
            self.view = view;
        }
    }

    pub(crate) fn back(&mut self) -> Option<MainView> {
        let view = self.history.pop()?;
        self.view = view;
        Some(view)
    }

    /// Starts a load for the current view, superseding any in flight.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Whether a result tagged with `generation` is still wanted.
    pub(crate) fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub(crate) fn finish_load(&mut self) {
        self.loading = false;
    }

    pub(crate) fn set_home(&mut self, recent: Vec<Track>, recommended: Vec<Collection>) {
        self.recent = recent;
        self.recommended = recommended;
        self.recent_state.select((!self.recent.is_empty()).then_some(0));
        self.recommended_state
            .select((!self.recommended.is_empty()).then_some(0));
    }

    pub(crate) fn set_albums(&mut self, page: CollectionPage) {
        self.albums = page.collections;
        self.albums_pagination = page.pagination;
        self.albums_state.select((!self.albums.is_empty()).then_some(0));
    }

    pub(crate) fn set_album(&mut self, album: CollectionDetail) {
        self.album_state
            .select((!album.tracks.is_empty()).then_some(0));
        self.album = Some(album);
    }

    pub(crate) fn set_tracks(&mut self, tracks: Arc<[Track]>, search: Option<String>) {
        self.tracks = tracks;
        self.tracks_search = search;
        self.tracks_page = 1;
        self.select_first_track();
    }

    pub(crate) fn tracks_total_pages(&self) -> usize {
        context::total_pages(self.tracks.len(), self.tracks_per_page)
    }

    /// The tracks on the displayed page of the all-tracks view.
    pub(crate) fn tracks_page_slice(&self) -> &[Track] {
        let start = (self.tracks_page - 1) * self.tracks_per_page;
        if start >= self.tracks.len() {
            return &[];
        }
        let end = (start + self.tracks_per_page).min(self.tracks.len());
        &self.tracks[start..end]
    }

    /// Moves the all-tracks view by `delta` pages, returning whether it moved.
    pub(crate) fn turn_tracks_page(&mut self, delta: isize) -> bool {
        let target = self.tracks_page.saturating_add_signed(delta);
        if target < 1 || target > self.tracks_total_pages() || target == self.tracks_page {
            return false;
        }
        self.tracks_page = target;
        self.select_first_track();
        true
    }

    /// The album list page `delta` pages away, if there is one.
    pub(crate) fn albums_target_page(&self, delta: isize) -> Option<usize> {
        let p = &self.albums_pagination;
        let target = p.current_page.saturating_add_signed(delta);
        (target >= 1 && target <= p.total_pages && target != p.current_page).then_some(target)
    }

    pub(crate) fn albums_page(&self) -> usize {
        self.albums_pagination.current_page.max(1)
    }

    /// Keeps the all-tracks view on the page playback moved to.
    ///
    /// Only applies while the view shows the list the context plays from.
    pub(crate) fn follow_playback_page(&mut self, context: &PlaylistContext, page: usize) {
        if context.kind != ContextKind::AllTracks || !Arc::ptr_eq(&context.full_list, &self.tracks)
        {
            return;
        }
        let page = page.clamp(1, self.tracks_total_pages());
        if page != self.tracks_page {
            self.tracks_page = page;
            self.select_first_track();
        }
    }

    pub(crate) fn next_home_pane(&mut self) {
        self.home_pane = match self.home_pane {
            HomePane::Recent => HomePane::Albums,
            HomePane::Albums => HomePane::Recent,
        };
    }

    pub(crate) fn select_next(&mut self) {
        match self.view {
            MainView::Home => match self.home_pane {
                HomePane::Recent => Self::next(&mut self.recent_state, self.recent.len()),
                HomePane::Albums => {
                    Self::next(&mut self.recommended_state, self.recommended.len())
                }
            },
            MainView::Albums => Self::next(&mut self.albums_state, self.albums.len()),
            MainView::AlbumDetail => {
                let len = self.album.as_ref().map_or(0, |a| a.tracks.len());
                Self::next(&mut self.album_state, len);
            }
            MainView::Tracks => {
                let len = self.tracks_page_slice().len();
                Self::next(&mut self.tracks_state, len);
            }
        }
    }

    pub(crate) fn select_previous(&mut self) {
        match self.view {
            MainView::Home => match self.home_pane {
                HomePane::Recent => Self::previous(&mut self.recent_state, self.recent.len()),
                HomePane::Albums => {
                    Self::previous(&mut self.recommended_state, self.recommended.len())
                }
            },
            MainView::Albums => Self::previous(&mut self.albums_state, self.albums.len()),
            MainView::AlbumDetail => {
                let len = self.album.as_ref().map_or(0, |a| a.tracks.len());
                Self::previous(&mut self.album_state, len);
            }
            MainView::Tracks => {
                let len = self.tracks_page_slice().len();
                Self::previous(&mut self.tracks_state, len);
            }
        }
    }

    /// Resolves the selection in the current view.
    pub(crate) fn activation(&self) -> Option<Activation> {
        match self.view {
            MainView::Home => match self.home_pane {
                HomePane::Recent => {
                    let index = self.recent_state.selected()?;
                    (index < self.recent.len()).then(|| Activation::Play {
                        list: self.recent.clone(),
                        index,
                        context: PlaylistContext::recent(self.recent.clone()),
                    })
                }
                HomePane::Albums => {
                    let index = self.recommended_state.selected()?;
                    self.recommended
                        .get(index)
                        .map(|album| Activation::OpenAlbum(album.id))
                }
            },
            MainView::Albums => {
                let index = self.albums_state.selected()?;
                self.albums
                    .get(index)
                    .map(|album| Activation::OpenAlbum(album.id))
            }
            MainView::AlbumDetail => {
                let album = self.album.as_ref()?;
                let index = self.album_state.selected()?;
                (index < album.tracks.len()).then(|| Activation::Play {
                    list: album.tracks.clone(),
                    index,
                    context: PlaylistContext::album(album.id, album.tracks.clone()),
                })
            }
            MainView::Tracks => {
                let page = self.tracks_page_slice();
                let index = self.tracks_state.selected()?;
                (index < page.len()).then(|| Activation::Play {
                    list: page.to_vec(),
                    index,
                    context: PlaylistContext::all_tracks(
                        self.tracks.clone(),
                        self.tracks_search.clone(),
                        self.tracks_page,
                        self.tracks_per_page,
                    ),
                })
            }
        }
    }

    /// The track rows on screen in the current view, if it shows any.
    pub(crate) fn track_rows(&self) -> Vec<TrackKey<'_>> {
        match self.view {
            MainView::Home => self.recent.iter().map(Track::key).collect(),
            MainView::AlbumDetail => self
                .album
                .as_ref()
                .map(|a| a.tracks.iter().map(Track::key).collect())
                .unwrap_or_default(),
            MainView::Tracks => self.tracks_page_slice().iter().map(Track::key).collect(),
            MainView::Albums => Vec::new(),
        }
    }

    /// How the track rows of the current view relate to `playing`.
    pub(crate) fn highlight_scope(&self, playing: &PlaylistContext) -> HighlightScope {
        let plays_this = match self.view {
            MainView::Home | MainView::Albums => return HighlightScope::CompleteList,
            MainView::AlbumDetail => {
                playing.kind == ContextKind::Album
                    && self.album.as_ref().map(|a| ScopeKey::Album(a.id)) == playing.scope_key
            }
            MainView::Tracks => {
                playing.kind == ContextKind::AllTracks
                    && Arc::ptr_eq(&playing.full_list, &self.tracks)
                    && playing.current_page == self.tracks_page
            }
        };

        if plays_this {
            HighlightScope::PlayingPage
        } else {
            HighlightScope::OtherPage
        }
    }

    fn select_first_track(&mut self) {
        let has_rows = !self.tracks_page_slice().is_empty();
        self.tracks_state.select(has_rows.then_some(0));
    }

    fn next<S: Selectable>(state: &mut S, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    fn previous<S: Selectable>(state: &mut S, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        state.select(Some(i));
    }
}

/// List and table state share selection handling.
trait Selectable {
    fn selected(&self) -> Option<usize>;
    fn select(&mut self, index: Option<usize>);
}

impl Selectable for ListState {
    fn selected(&self) -> Option<usize> {
        ListState::selected(self)
    }

    fn select(&mut self, index: Option<usize>) {
        ListState::select(self, index);
    }
}

impl Selectable for TableState {
    fn selected(&self) -> Option<usize> {
        TableState::selected(self)
    }

    fn select(&mut self, index: Option<usize>) {
        TableState::select(self, index);
    }
}
