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

//! In-memory catalog used by unit tests.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    catalog::CatalogSource,
    error::CatalogError,
    model::{
        Collection, CollectionDetail, CollectionPage, Pagination, context::total_pages,
        testing::album_tracks,
    },
};

pub(crate) struct FakeCatalog {
    albums: Vec<CollectionDetail>,
    failing_collections: Mutex<Vec<i64>>,
    listing_error: Mutex<Option<CatalogError>>,
    listing_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    per_page: usize,
}

impl FakeCatalog {
    /// A catalog of `albums` albums with ids starting at 1, each holding
    /// `tracks_per_album` tracks.
    pub(crate) fn with_albums(albums: usize, tracks_per_album: usize) -> Self {
        let albums = (1..=albums as i64)
            .map(|id| CollectionDetail {
                id,
                name: format!("Album {}", id),
                artist: Some("Artist".to_string()),
                cover_ref: None,
                tracks: album_tracks(id, tracks_per_album),
            })
            .collect();

        Self {
            albums,
            failing_collections: Mutex::new(Vec::new()),
            listing_error: Mutex::new(None),
            listing_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            per_page: 50,
        }
    }

    pub(crate) fn fail_collection(&self, id: i64) {
        self.failing_collections.lock().unwrap().push(id);
    }

    pub(crate) fn fail_listing(&self, err: CatalogError) {
        *self.listing_error.lock().unwrap() = Some(err);
    }

    pub(crate) fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for FakeCatalog {
    fn list_collections(
        &self,
        page: usize,
        per_page: usize,
        search: Option<&str>,
    ) -> Result<CollectionPage, CatalogError> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.listing_error.lock().unwrap().clone() {
            return Err(err);
        }

        let search = search.map(str::to_lowercase);
        let matching: Vec<&CollectionDetail> = self
            .albums
            .iter()
            .filter(|a| {
                search
                    .as_deref()
                    .is_none_or(|s| a.name.to_lowercase().contains(s))
            })
            .collect();

        let collections = matching
            .iter()
            .skip((page.max(1) - 1) * per_page)
            .take(per_page)
            .map(|a| Collection {
                id: a.id,
                name: a.name.clone(),
                artist: a.artist.clone(),
                track_count: a.tracks.len() as u32,
                cover_ref: None,
            })
            .collect();

        Ok(CollectionPage {
            collections,
            pagination: Pagination {
                current_page: page,
                per_page,
                total_pages: total_pages(matching.len(), per_page),
                total_items: matching.len(),
            },
        })
    }

    fn get_collection(&self, id: i64) -> Result<CollectionDetail, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_collections.lock().unwrap().contains(&id) {
            return Err(CatalogError::Status(500));
        }
        self.albums
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    fn audio_per_page(&self) -> Result<usize, CatalogError> {
        Ok(self.per_page)
    }
}
