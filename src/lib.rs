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

//! # audiodeck
//!
//! A terminal client for the audio library of a self-hosted media server.
//!
//! The library holds the whole application; the binary only sets up the
//! terminal and the worker threads. The heart of it is the
//! [`playback::PlaybackContextManager`], which decides what plays next when
//! the user navigates or a track ends, across pages of the track list, within
//! an album, and in shuffle mode across the whole catalog.
//!
//! ## Architecture
//!
//! * The **UI thread** owns the [`App`] state and handles [`events::AppEvent`]s
//!   from a single `std::sync::mpsc` channel, redrawing after each.
//! * The **task worker** ([`tasks`]) performs blocking catalog requests over
//!   HTTP and sends the results back as events.
//! * The **player worker** ([`player`]) drives libmpv and reports load,
//!   progress and end of track events, each tagged with the load it belongs
//!   to.

mod app;
pub mod browser;
pub mod catalog;
mod commander;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod playback;
pub mod player;
mod render;
pub mod tasks;
pub mod theme;
mod toast;
pub mod util;

pub use app::App;
