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

//! Asynchronous application task processing.
//!
//! This module offloads blocking work, every request to the media server, from
//! the main UI thread. A dedicated worker translates [`AppTask`] requests into
//! catalog calls and sends the results back to the application as
//! [`AppEvent`]s.
//!
//! Results for views carry the generation of the request that produced them,
//! so the UI can discard results for a view the user has already left.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use log::{debug, error};

use crate::{
    catalog::{CancelToken, CatalogSource},
    events::AppEvent,
};

#[derive(Debug)]
pub enum AppTask {
    LoadAudioConfig,

    LoadHome {
        generation: u64,
    },
    LoadAlbums {
        generation: u64,
        page: usize,
        per_page: usize,
        search: Option<String>,
    },
    LoadAlbum {
        generation: u64,
        id: i64,
    },

    LoadGlobalTracks {
        cancel: CancelToken,
    },
}

/// Spawns a background thread to process application tasks.
///
/// Tasks are processed one at a time, in the order they were sent.
///
/// # Arguments
///
/// * `catalog` - The catalog source the worker reads from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub fn spawn_task_worker<C>(catalog: C, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>)
where
    C: CatalogSource + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            debug!("Processing task {:?}", task);

            let ctx = TaskContext {
                catalog: &catalog,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        debug!("Task channel closed, worker exiting");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    catalog: &'a dyn CatalogSource,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadAudioConfig => handlers::load_audio_config(ctx),
        AppTask::LoadHome { generation } => handlers::load_home(ctx, generation),
        AppTask::LoadAlbums {
            generation,
            page,
            per_page,
            search,
        } => handlers::load_albums(ctx, generation, page, per_page, search.as_deref()),
        AppTask::LoadAlbum { generation, id } => handlers::load_album(ctx, generation, id),
        AppTask::LoadGlobalTracks { cancel } => handlers::load_global_tracks(ctx, &cancel),
    }
}

/// Runs `task` on the calling thread.
#[cfg(test)]
pub(crate) fn run_task(
    catalog: &dyn CatalogSource,
    event_tx: &Sender<AppEvent>,
    task: AppTask,
) -> Result<()> {
    handle_task(task, &TaskContext { catalog, event_tx })
}
