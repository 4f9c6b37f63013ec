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

//! Track fixtures shared by unit tests.

use crate::model::Track;

pub(crate) fn track(title: &str, artist: &str, media_ref: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        album_id: 1,
        album_title: "Album".to_string(),
        album_cover: None,
        media_ref: media_ref.to_string(),
        duration_secs: 180,
    }
}

/// Builds `count` distinct tracks named `{prefix} 0`, `{prefix} 1` and so on.
pub(crate) fn tracks(prefix: &str, count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| {
            track(
                &format!("{} {}", prefix, i),
                "Artist",
                &format!("{}/{:03}.mp3", prefix, i),
            )
        })
        .collect()
}

pub(crate) fn album_tracks(album_id: i64, count: usize) -> Vec<Track> {
    tracks(&format!("Album {}", album_id), count)
        .into_iter()
        .map(|mut t| {
            t.album_id = album_id;
            t.album_title = format!("Album {}", album_id);
            t
        })
        .collect()
}
