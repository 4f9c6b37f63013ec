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

use anyhow::Result;
use log::{debug, warn};

use crate::{
    catalog::{self, CancelToken, RECOMMENDED_ALBUMS},
    error::CatalogError,
    events::AppEvent,
    tasks::TaskContext,
};

/// Sends the outcome of a view load, tagged with its generation.
fn send_view_result<T>(
    ctx: &TaskContext,
    generation: u64,
    result: Result<T, CatalogError>,
    loaded: impl FnOnce(T) -> AppEvent,
) -> Result<()> {
    let event = match result {
        Ok(data) => loaded(data),
        Err(error) => {
            warn!("View load {} failed: {}", generation, error);
            AppEvent::ViewLoadFailed { generation, error }
        }
    };
    ctx.event_tx.send(event)?;

    Ok(())
}

pub(super) fn load_audio_config(ctx: &TaskContext) -> Result<()> {
    let per_page = match ctx.catalog.audio_per_page() {
        Ok(per_page) => Some(per_page),
        Err(e) => {
            warn!("Failed to read audio config, using default: {}", e);
            None
        }
    };
    ctx.event_tx.send(AppEvent::AudioConfigLoaded(per_page))?;

    Ok(())
}

pub(super) fn load_home(ctx: &TaskContext, generation: u64) -> Result<()> {
    let result = catalog::fetch_recent_tracks(ctx.catalog).and_then(|recent| {
        let albums = ctx
            .catalog
            .list_collections(1, RECOMMENDED_ALBUMS, None)?
            .collections;
        Ok((recent, albums))
    });

    send_view_result(ctx, generation, result, |(recent, albums)| {
        AppEvent::HomeLoaded {
            generation,
            recent,
            albums,
        }
    })
}

pub(super) fn load_albums(
    ctx: &TaskContext,
    generation: u64,
    page: usize,
    per_page: usize,
    search: Option<&str>,
) -> Result<()> {
    let result = ctx.catalog.list_collections(page, per_page, search);

    send_view_result(ctx, generation, result, |page| AppEvent::AlbumsLoaded {
        generation,
        page,
    })
}

pub(super) fn load_album(ctx: &TaskContext, generation: u64, id: i64) -> Result<()> {
    let result = ctx.catalog.get_collection(id);

    send_view_result(ctx, generation, result, |album| AppEvent::AlbumLoaded {
        generation,
        album,
    })
}

pub(super) fn load_global_tracks(ctx: &TaskContext, cancel: &CancelToken) -> Result<()> {
    let result = catalog::fetch_all_tracks(ctx.catalog, cancel);

    if matches!(result, Err(CatalogError::Cancelled)) {
        debug!("Global track load cancelled");
        return Ok(());
    }

    ctx.event_tx.send(AppEvent::GlobalTracksLoaded(result))?;

    Ok(())
}
