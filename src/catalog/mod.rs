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

//! Remote media catalog access.
//!
//! The catalog is read through the [`CatalogSource`] trait so that loaders can
//! be exercised without a server. The aggregate loaders in this module build
//! the lists the views and the playback core need out of the two primitive
//! listing calls.

mod http;
mod wire;

pub use http::HttpCatalog;

#[cfg(test)]
pub(crate) mod fake;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use log::{debug, warn};

use crate::{
    error::CatalogError,
    model::{CollectionDetail, CollectionPage, Track},
};

/// Collections requested per listing call when walking the whole catalog.
pub const COLLECTION_PAGE_SIZE: usize = 100;

pub const RECENT_COLLECTIONS: usize = 5;
pub const RECENT_TRACKS_PER_COLLECTION: usize = 2;
pub const RECENT_TRACKS_LIMIT: usize = 10;

/// Number of albums shown on the home view.
pub const RECOMMENDED_ALBUMS: usize = 8;

/// Read access to the media catalog.
pub trait CatalogSource {
    /// Lists one page of collections, optionally filtered by a search string.
    fn list_collections(
        &self,
        page: usize,
        per_page: usize,
        search: Option<&str>,
    ) -> Result<CollectionPage, CatalogError>;

    /// Fetches a collection with all of its tracks.
    fn get_collection(&self, id: i64) -> Result<CollectionDetail, CatalogError>;

    /// The server's preferred number of tracks per page.
    fn audio_per_page(&self) -> Result<usize, CatalogError>;
}

/// Shared flag used to abandon a long running catalog walk.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.is_cancelled() {
            Err(CatalogError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Builds the playback URL for a track's media reference.
///
/// Each path segment is percent-encoded separately so that the separators
/// survive, and Windows separators are normalised first.
pub fn media_url(base_url: &str, media_ref: &str) -> String {
    let path = media_ref
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!("{}/audios/{}", base_url.trim_end_matches('/'), path)
}

/// Fetches every track in the catalog, in collection order.
///
/// The collection listing is walked page by page, then each collection's
/// detail is fetched. A collection that fails to load is skipped; a failing
/// listing aborts the walk.
///
/// # Errors
///
/// Returns [`CatalogError::Cancelled`] if `cancel` is triggered between
/// requests, or the listing error if a collection page cannot be read.
pub fn fetch_all_tracks<C: CatalogSource + ?Sized>(
    source: &C,
    cancel: &CancelToken,
) -> Result<Vec<Track>, CatalogError> {
    let mut collections = Vec::new();
    let mut page = 1;

    loop {
        cancel.check()?;
        let listing = source.list_collections(page, COLLECTION_PAGE_SIZE, None)?;
        let exhausted =
            listing.collections.is_empty() || page >= listing.pagination.total_pages;
        collections.extend(listing.collections);
        if exhausted {
            break;
        }
        page += 1;
    }

    debug!("Fetching tracks for {} collections", collections.len());

    let mut tracks = Vec::new();
    for collection in &collections {
        cancel.check()?;
        match source.get_collection(collection.id) {
            Ok(detail) => tracks.extend(detail.tracks),
            Err(e) => warn!("Skipping collection {} ({}): {}", collection.id, collection.name, e),
        }
    }

    Ok(tracks)
}

/// Fetches the "recently added" list: the first few tracks of the newest
/// collections.
///
/// # Errors
///
/// Returns an error if the collection listing cannot be read.
pub fn fetch_recent_tracks<C: CatalogSource + ?Sized>(
    source: &C,
) -> Result<Vec<Track>, CatalogError> {
    let listing = source.list_collections(1, RECENT_COLLECTIONS, None)?;

    let mut tracks = Vec::new();
    for collection in listing.collections.iter().take(RECENT_COLLECTIONS) {
        match source.get_collection(collection.id) {
            Ok(detail) => tracks.extend(
                detail
                    .tracks
                    .into_iter()
                    .take(RECENT_TRACKS_PER_COLLECTION),
            ),
            Err(e) => warn!("Skipping recent collection {}: {}", collection.id, e),
        }
    }

    tracks.truncate(RECENT_TRACKS_LIMIT);
    Ok(tracks)
}

/// Case-insensitive substring filter over title, artist and album name.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<Track> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tracks.to_vec();
    }

    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query)
                || t.artist.to_lowercase().contains(&query)
                || t.album_title.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::FakeCatalog;

    #[test]
    fn test_media_url_encodes_segments() {
        assert_eq!(
            media_url("http://host:5000/", "Album One\\01 Song #1.mp3"),
            "http://host:5000/audios/Album%20One/01%20Song%20%231.mp3"
        );
        assert_eq!(media_url("http://host", "/a//b.ogg"), "http://host/audios/a/b.ogg");
    }

    #[test]
    fn test_fetch_all_tracks_walks_every_page() {
        let catalog = FakeCatalog::with_albums(230, 2);

        let tracks = fetch_all_tracks(&catalog, &CancelToken::new()).unwrap();

        assert_eq!(tracks.len(), 460);
        assert_eq!(catalog.listing_calls(), 3);
        assert_eq!(tracks[0].album_id, 1);
        assert_eq!(tracks[459].album_id, 230);
    }

    #[test]
    fn test_fetch_all_tracks_skips_failing_collection() {
        let catalog = FakeCatalog::with_albums(3, 4);
        catalog.fail_collection(2);

        let tracks = fetch_all_tracks(&catalog, &CancelToken::new()).unwrap();

        assert_eq!(tracks.len(), 8);
        assert!(tracks.iter().all(|t| t.album_id != 2));
    }

    #[test]
    fn test_fetch_all_tracks_reports_listing_failure() {
        let catalog = FakeCatalog::with_albums(3, 4);
        catalog.fail_listing(CatalogError::Forbidden);

        assert_eq!(
            fetch_all_tracks(&catalog, &CancelToken::new()),
            Err(CatalogError::Forbidden)
        );
    }

    #[test]
    fn test_fetch_all_tracks_honours_cancellation() {
        let catalog = FakeCatalog::with_albums(3, 4);
        let cancel = CancelToken::new();
        cancel.cancel();

        assert_eq!(fetch_all_tracks(&catalog, &cancel), Err(CatalogError::Cancelled));
        assert_eq!(catalog.listing_calls(), 0);
    }

    #[test]
    fn test_fetch_recent_tracks_takes_two_per_collection() {
        let catalog = FakeCatalog::with_albums(12, 6);

        let tracks = fetch_recent_tracks(&catalog).unwrap();

        assert_eq!(tracks.len(), RECENT_TRACKS_LIMIT);
        assert_eq!(tracks[0].album_id, 1);
        assert_eq!(tracks[1].album_id, 1);
        assert_eq!(tracks[2].album_id, 2);
    }

    #[test]
    fn test_filter_tracks_matches_title_artist_album() {
        let mut tracks = crate::model::testing::tracks("Song", 3);
        tracks[1].artist = "The Beatles".to_string();
        tracks[2].album_title = "Abbey Road".to_string();

        assert_eq!(filter_tracks(&tracks, "").len(), 3);
        assert_eq!(filter_tracks(&tracks, "song 0").len(), 1);
        assert_eq!(filter_tracks(&tracks, "BEATLES")[0].title, "Song 1");
        assert_eq!(filter_tracks(&tracks, " abbey ")[0].title, "Song 2");
        assert!(filter_tracks(&tracks, "zeppelin").is_empty());
    }
}
