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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the tracks
//! and collections served by the remote media catalog, together with the
//! playback enums shared by the playback core and the user interface.

pub mod context;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ContextKind, PlaylistContext, ScopeKey};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One playable item from the catalog.
///
/// Tracks carry no stable identifier, so "is this the same track" questions
/// are answered by comparing the `(title, artist, media_ref)` tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album_id: i64,
    pub album_title: String,
    pub album_cover: Option<String>,
    /// Path of the audio file relative to the server's media root.
    pub media_ref: String,
    pub duration_secs: u64,
}

impl Track {
    /// Returns `true` if both tracks share the same identity tuple.
    pub fn same_track(&self, other: &Track) -> bool {
        self.title == other.title && self.artist == other.artist && self.media_ref == other.media_ref
    }

    /// The identity of this track as a rendered row would describe it.
    pub fn key(&self) -> TrackKey<'_> {
        TrackKey {
            title: &self.title,
            artist: &self.artist,
            media_ref: Some(&self.media_ref),
        }
    }
}

/// What a rendered row knows about the track it displays.
///
/// Summarised views may not carry the media reference, in which case matching
/// degrades to title and artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackKey<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub media_ref: Option<&'a str>,
}

/// Summary of a collection (an album) as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub artist: Option<String>,
    pub track_count: u32,
    pub cover_ref: Option<String>,
}

/// A collection together with its complete track list.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDetail {
    pub id: i64,
    pub name: String,
    pub artist: Option<String>,
    pub cover_ref: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 0,
            total_pages: 1,
            total_items: 0,
        }
    }
}

/// One page of the collection listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPage {
    pub collections: Vec<Collection>,
    pub pagination: Pagination,
}

/// How the next track is chosen when the current one ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayMode {
    #[default]
    Sequential,
    Shuffle,
    RepeatOne,
}

impl PlayMode {
    /// The next mode in the `Sequential -> Shuffle -> RepeatOne` cycle.
    pub fn cycle(self) -> Self {
        match self {
            PlayMode::Sequential => PlayMode::Shuffle,
            PlayMode::Shuffle => PlayMode::RepeatOne,
            PlayMode::RepeatOne => PlayMode::Sequential,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayMode::Sequential => "sequential",
            PlayMode::Shuffle => "shuffle",
            PlayMode::RepeatOne => "repeat one",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::track;

    #[test]
    fn test_play_mode_cycle_has_period_three() {
        for mode in [PlayMode::Sequential, PlayMode::Shuffle, PlayMode::RepeatOne] {
            assert_ne!(mode.cycle(), mode);
            assert_ne!(mode.cycle().cycle(), mode);
            assert_eq!(mode.cycle().cycle().cycle(), mode);
        }
    }

    #[test]
    fn test_same_track_compares_identity_tuple() {
        let a = track("Song", "Artist", "a/song.mp3");
        let mut b = a.clone();
        b.album_id = 99;
        b.duration_secs = 1;
        assert!(a.same_track(&b));

        let c = track("Song", "Artist", "b/song.mp3");
        assert!(!a.same_track(&c));
    }
}
