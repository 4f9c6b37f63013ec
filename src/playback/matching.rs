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

//! Matching the playing track against rendered rows.
//!
//! Rows do not always carry everything a [`Track`] does, so matching degrades
//! through three stages: the exact identity tuple, then title and artist, then
//! the position of the active index. Duplicate titles by the same artist are
//! indistinguishable and all of them match.

use crate::model::{Track, TrackKey};

fn same_text(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

fn exact(row: &TrackKey<'_>, track: &Track) -> bool {
    row.media_ref == Some(track.media_ref.as_str())
        && same_text(row.title, &track.title)
        && same_text(row.artist, &track.artist)
}

fn loose(row: &TrackKey<'_>, track: &Track) -> bool {
    same_text(row.title, &track.title) && same_text(row.artist, &track.artist)
}

/// Rows representing `track`, by the first matching stage that finds any.
///
/// `fallback_index` is only used when neither identity stage matches.
pub fn matching_rows(
    rows: &[TrackKey<'_>],
    track: &Track,
    fallback_index: Option<usize>,
) -> Vec<usize> {
    let exact_rows: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| exact(row, track))
        .map(|(i, _)| i)
        .collect();
    if !exact_rows.is_empty() {
        return exact_rows;
    }

    let loose_rows: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| loose(row, track))
        .map(|(i, _)| i)
        .collect();
    if !loose_rows.is_empty() {
        return loose_rows;
    }

    fallback_index
        .filter(|&i| i < rows.len())
        .into_iter()
        .collect()
}

/// Whether `track` appears among `rows` at all.
///
/// A row without a media reference is accepted on title and artist alone.
pub fn is_present(rows: &[TrackKey<'_>], track: &Track) -> bool {
    rows.iter().any(|row| {
        loose(row, track) && row.media_ref.is_none_or(|r| r == track.media_ref)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::track;

    fn row<'a>(title: &'a str, artist: &'a str, media_ref: Option<&'a str>) -> TrackKey<'a> {
        TrackKey {
            title,
            artist,
            media_ref,
        }
    }

    #[test]
    fn test_exact_match_wins() {
        let current = track("Song", "Artist", "b.mp3");
        let rows = [
            row("Song", "Artist", Some("a.mp3")),
            row("Song", "Artist", Some("b.mp3")),
        ];
        assert_eq!(matching_rows(&rows, &current, Some(0)), vec![1]);
    }

    #[test]
    fn test_falls_back_to_title_and_artist() {
        let current = track("Song", "Artist", "b.mp3");
        let rows = [row("Other", "Artist", None), row(" Song ", "Artist", None)];
        assert_eq!(matching_rows(&rows, &current, Some(0)), vec![1]);
    }

    #[test]
    fn test_duplicates_all_match() {
        let current = track("Song", "Artist", "x.mp3");
        let rows = [
            row("Song", "Artist", None),
            row("Intro", "Artist", None),
            row("Song", "Artist", None),
        ];
        assert_eq!(matching_rows(&rows, &current, None), vec![0, 2]);
    }

    #[test]
    fn test_falls_back_to_position() {
        let current = track("Song", "Artist", "x.mp3");
        let rows = [row("A", "B", None), row("C", "D", None)];
        assert_eq!(matching_rows(&rows, &current, Some(1)), vec![1]);
        assert!(matching_rows(&rows, &current, Some(2)).is_empty());
        assert!(matching_rows(&rows, &current, None).is_empty());
    }

    #[test]
    fn test_presence_respects_media_ref_when_known() {
        let current = track("Song", "Artist", "x.mp3");
        assert!(is_present(&[row("Song", "Artist", None)], &current));
        assert!(is_present(&[row("Song", "Artist", Some("x.mp3"))], &current));
        assert!(!is_present(&[row("Song", "Artist", Some("y.mp3"))], &current));
        assert!(!is_present(&[], &current));
    }
}
