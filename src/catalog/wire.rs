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

//! JSON shapes returned by the media server.
//!
//! Every endpoint wraps its payload in the same envelope; the payloads are
//! converted into the domain model here so nothing outside the catalog module
//! sees the wire field names.

use serde::Deserialize;

use crate::{
    error::CatalogError,
    model::{
        Collection, CollectionDetail, CollectionPage, Pagination, Track, UNKNOWN_ARTIST,
        UNKNOWN_TITLE,
    },
};

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    status: String,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> Envelope<T> {
    pub(crate) fn into_data(self) -> Result<T, CatalogError> {
        if self.status != "success" {
            return Err(CatalogError::Api(
                self.message.unwrap_or_else(|| format!("status {}", self.status)),
            ));
        }
        self.data
            .ok_or_else(|| CatalogError::Decode("response has no data".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsData {
    collections: Vec<WireCollection>,
    pagination: WirePagination,
}

#[derive(Debug, Deserialize)]
struct WireCollection {
    collection_id: i64,
    collection_name: String,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    audio_count: Option<u32>,
    #[serde(default)]
    cover_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WirePagination {
    current_page: usize,
    #[serde(default)]
    per_page: usize,
    total_pages: usize,
    total_items: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionDetailData {
    collection_id: i64,
    collection_name: String,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    cover_path: Option<String>,
    #[serde(default)]
    tracks: Vec<WireTrack>,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    artist: Option<String>,
    relative_path: String,
    #[serde(default)]
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AudioConfigData {
    #[serde(rename = "audioPerPage")]
    audio_per_page: usize,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<CollectionsData> for CollectionPage {
    fn from(data: CollectionsData) -> Self {
        let collections = data
            .collections
            .into_iter()
            .map(|c| Collection {
                id: c.collection_id,
                name: c.collection_name,
                artist: non_empty(c.artist),
                track_count: c.audio_count.unwrap_or(0),
                cover_ref: non_empty(c.cover_path),
            })
            .collect();

        let p = data.pagination;
        CollectionPage {
            collections,
            pagination: Pagination {
                current_page: p.current_page.max(1),
                per_page: p.per_page,
                total_pages: p.total_pages.max(1),
                total_items: p.total_items,
            },
        }
    }
}

impl From<CollectionDetailData> for CollectionDetail {
    fn from(data: CollectionDetailData) -> Self {
        let artist = non_empty(data.artist);
        let cover_ref = non_empty(data.cover_path);

        // Tracks inherit the album they were listed under.
        let tracks = data
            .tracks
            .into_iter()
            .map(|t| Track {
                title: non_empty(t.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
                artist: non_empty(t.artist)
                    .or_else(|| artist.clone())
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
                album_id: data.collection_id,
                album_title: data.collection_name.clone(),
                album_cover: cover_ref.clone(),
                media_ref: t.relative_path,
                duration_secs: t.duration.filter(|d| d.is_finite() && *d > 0.0).unwrap_or(0.0)
                    as u64,
            })
            .collect();

        CollectionDetail {
            id: data.collection_id,
            name: data.collection_name,
            artist,
            cover_ref,
            tracks,
        }
    }
}

impl AudioConfigData {
    pub(crate) fn audio_per_page(&self) -> usize {
        self.audio_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_listing_parses() {
        let json = r#"{
            "status": "success",
            "data": {
                "collections": [
                    {"collection_id": 7, "collection_name": "Blue Train", "artist": "John Coltrane",
                     "audio_count": 5, "cover_path": "covers/7.jpg"},
                    {"collection_id": 8, "collection_name": "Untitled", "artist": "", "cover_path": null}
                ],
                "pagination": {"current_page": 2, "per_page": 20, "total_pages": 3, "total_items": 42}
            },
            "message": "ok"
        }"#;

        let envelope: Envelope<CollectionsData> = serde_json::from_str(json).unwrap();
        let page = CollectionPage::from(envelope.into_data().unwrap());

        assert_eq!(page.collections.len(), 2);
        assert_eq!(page.collections[0].name, "Blue Train");
        assert_eq!(page.collections[0].track_count, 5);
        assert_eq!(page.collections[1].artist, None);
        assert_eq!(page.collections[1].cover_ref, None);
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, 42);
    }

    #[test]
    fn test_collection_detail_fills_defaults() {
        let json = r#"{
            "status": "success",
            "data": {
                "collection_id": 3,
                "collection_name": "Kind of Blue",
                "artist": "Miles Davis",
                "cover_path": "covers/3.jpg",
                "audio_count": 2,
                "tracks": [
                    {"title": "So What", "artist": "Miles Davis", "relative_path": "kob/01.flac", "duration": 562.4},
                    {"title": null, "relative_path": "kob/02.flac", "duration": null}
                ]
            }
        }"#;

        let envelope: Envelope<CollectionDetailData> = serde_json::from_str(json).unwrap();
        let detail = CollectionDetail::from(envelope.into_data().unwrap());

        assert_eq!(detail.tracks.len(), 2);
        assert_eq!(detail.tracks[0].duration_secs, 562);
        assert_eq!(detail.tracks[0].album_title, "Kind of Blue");
        assert_eq!(detail.tracks[1].title, UNKNOWN_TITLE);
        assert_eq!(detail.tracks[1].artist, "Miles Davis");
        assert_eq!(detail.tracks[1].album_cover.as_deref(), Some("covers/3.jpg"));
        assert_eq!(detail.tracks[1].duration_secs, 0);
    }

    #[test]
    fn test_error_status_is_api_error() {
        let json = r#"{"status": "error", "message": "Collection not found"}"#;
        let envelope: Envelope<CollectionDetailData> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err(),
            CatalogError::Api("Collection not found".to_string())
        );
    }

    #[test]
    fn test_audio_config_parses() {
        let json = r#"{"status": "success", "data": {"audioPerPage": 40}}"#;
        let envelope: Envelope<AudioConfigData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_data().unwrap().audio_per_page(), 40);
    }
}
