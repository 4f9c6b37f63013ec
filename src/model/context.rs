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

//! Playlist context.
//!
//! A playlist context describes the logical scope the user is playing
//! through, independently of which page of it is currently displayed. Previous
//! and next are always resolved against the context's full list.

use std::sync::Arc;

use crate::model::Track;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextKind {
    AllTracks,
    Album,
    Recent,
    #[default]
    Unknown,
}

impl ContextKind {
    pub fn label(self) -> &'static str {
        match self {
            ContextKind::AllTracks => "all tracks",
            ContextKind::Album => "album",
            ContextKind::Recent => "recently added",
            ContextKind::Unknown => "current list",
        }
    }
}

/// Identifies which instance of a context kind is meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKey {
    Album(i64),
    Search(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistContext {
    pub kind: ContextKind,
    pub scope_key: Option<ScopeKey>,
    /// The complete ordering for this scope, shared with the view that built
    /// it.
    pub full_list: Arc<[Track]>,
    /// One-based page currently resident in the visible page.
    pub current_page: usize,
    pub total_pages: usize,
}

impl Default for PlaylistContext {
    fn default() -> Self {
        Self {
            kind: ContextKind::Unknown,
            scope_key: None,
            full_list: Arc::from(Vec::new()),
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PlaylistContext {
    /// The paginated all-tracks context, optionally narrowed by a search.
    pub fn all_tracks(
        full_list: Arc<[Track]>,
        search: Option<String>,
        current_page: usize,
        page_size: usize,
    ) -> Self {
        let total_pages = total_pages(full_list.len(), page_size);
        Self {
            kind: ContextKind::AllTracks,
            scope_key: search.filter(|s| !s.is_empty()).map(ScopeKey::Search),
            full_list,
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn album(album_id: i64, tracks: Vec<Track>) -> Self {
        Self {
            kind: ContextKind::Album,
            scope_key: Some(ScopeKey::Album(album_id)),
            full_list: Arc::from(tracks),
            ..Self::default()
        }
    }

    pub fn recent(tracks: Vec<Track>) -> Self {
        Self {
            kind: ContextKind::Recent,
            full_list: Arc::from(tracks),
            ..Self::default()
        }
    }

    /// Position of `track` in the full list by identity tuple.
    pub fn position_of(&self, track: &Track) -> Option<usize> {
        self.full_list.iter().position(|t| t.same_track(track))
    }

    /// The one-based page holding `global_index`.
    pub fn page_for_index(global_index: usize, page_size: usize) -> usize {
        global_index / page_size.max(1) + 1
    }

    /// The tracks making up one-based page `page`, or `None` when the page is
    /// out of range.
    pub fn page_slice(&self, page: usize, page_size: usize) -> Option<&[Track]> {
        let page_size = page_size.max(1);
        if page == 0 || page > self.total_pages {
            return None;
        }
        let start = (page - 1) * page_size;
        if start >= self.full_list.len() {
            return None;
        }
        let end = (start + page_size).min(self.full_list.len());
        Some(&self.full_list[start..end])
    }
}

/// Number of pages needed to show `len` items, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::tracks;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(120, 50), 3);
    }

    #[test]
    fn test_page_slice_bounds() {
        let ctx = PlaylistContext::all_tracks(Arc::from(tracks("T", 120)), None, 1, 50);
        assert_eq!(ctx.total_pages, 3);

        let page = ctx.page_slice(2, 50).unwrap();
        assert_eq!(page.len(), 50);
        assert_eq!(page[0].title, "T 50");

        let last = ctx.page_slice(3, 50).unwrap();
        assert_eq!(last.len(), 20);
        assert_eq!(last[19].title, "T 119");

        assert!(ctx.page_slice(0, 50).is_none());
        assert!(ctx.page_slice(4, 50).is_none());
    }

    #[test]
    fn test_all_tracks_context_clamps_page_and_drops_empty_search() {
        let ctx = PlaylistContext::all_tracks(Arc::from(tracks("T", 10)), Some(String::new()), 7, 50);
        assert_eq!(ctx.current_page, 1);
        assert_eq!(ctx.scope_key, None);

        let ctx = PlaylistContext::all_tracks(Arc::from(tracks("T", 10)), Some("t".into()), 1, 50);
        assert_eq!(ctx.scope_key, Some(ScopeKey::Search("t".into())));
    }

    #[test]
    fn test_page_for_index() {
        assert_eq!(PlaylistContext::page_for_index(0, 50), 1);
        assert_eq!(PlaylistContext::page_for_index(49, 50), 1);
        assert_eq!(PlaylistContext::page_for_index(50, 50), 2);
    }
}
