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

//! Error types.
//!
//! [`CatalogError`] describes failures talking to the remote catalog.
//! [`PlaybackError`] is the taxonomy the playback core reports to the user
//! interface; no playback operation lets an error escape to the event loop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("access denied by server")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("server reported an error: {0}")]
    Api(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The media sink rejected the source.
    #[error("unable to play {title}: {reason}")]
    MediaLoad { title: String, reason: String },

    #[error("catalog unavailable: {0}")]
    CatalogFetch(#[from] CatalogError),

    /// The current track could not be found in the playlist context.
    #[error("current track is not part of the {context} list")]
    ContextInconsistency { context: &'static str },

    #[error("page {page} is out of range (1..={total_pages})")]
    PageResolution { page: usize, total_pages: usize },
}
