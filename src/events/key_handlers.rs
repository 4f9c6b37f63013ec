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

//! Keyboard input routing.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    browser::{Activation, MainView},
    commander::CommanderAction,
    events::{
        AppEvent,
        handlers::{apply_search, load_albums},
    },
    model::Direction,
};

/// Maps keyboard input to application actions and playback commands.
///
/// The search line sees every key first; while it is active it consumes all
/// of them. Otherwise keys are handled as:
///
/// * **Application Control**: `q` quits.
/// * **Views**: `1` home, `2` albums, `3` tracks, `Esc` back.
/// * **Navigation**: `j`/`k` move the selection, `h`/`l` switch the home pane,
///   `[`/`]` turn the page, `Enter` plays the selection or opens an album.
/// * **Playback**: space play/pause, `n`/`p` next and previous, `r` cycles the
///   play mode, `,`/`.` seek, `-`/`=` volume, `m` mute.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    match app.commander.handle_event(&Event::Key(key)) {
        CommanderAction::Ignored => process_global_key_event(app, key),
        CommanderAction::Handled => Ok(()),
        CommanderAction::Changed(text) => {
            app.search.update(&text, Instant::now());
            Ok(())
        }
        CommanderAction::Submitted(text) => {
            app.search.update(&text, Instant::now());
            if app.search.take_now().is_some() {
                apply_search(app)?;
            }
            Ok(())
        }
        CommanderAction::Cleared => {
            let had_query = app.search.applied().is_some();
            app.search.clear();
            if had_query {
                apply_search(app)?;
            }
            Ok(())
        }
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Home))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::Albums))?,
        KeyCode::Char('3') => app.event_tx.send(AppEvent::SetMainView(MainView::Tracks))?,
        KeyCode::Esc => {
            app.browser.back();
        }

        KeyCode::Char('j') | KeyCode::Down => app.browser.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.browser.select_previous(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
            if app.browser.view == MainView::Home {
                app.browser.next_home_pane();
            }
        }

        KeyCode::Enter => match app.browser.activation() {
            Some(Activation::Play {
                list,
                index,
                context,
            }) => {
                app.playback.play_from_list(list, index, Some(context));
            }
            Some(Activation::OpenAlbum(id)) => app.event_tx.send(AppEvent::OpenAlbum(id))?,
            None => {}
        },

        KeyCode::Char('[') => turn_page(app, -1)?,
        KeyCode::Char(']') => turn_page(app, 1)?,

        KeyCode::Char(' ') => app.playback.toggle_play_pause(),
        KeyCode::Char('n') => app.playback.advance(Direction::Next),
        KeyCode::Char('p') => app.playback.advance(Direction::Previous),
        KeyCode::Char('r') => app.playback.cycle_mode(),

        KeyCode::Char(',') => app.playback.seek_relative(-app.config.seek_step_secs),
        KeyCode::Char('.') => app.playback.seek_relative(app.config.seek_step_secs),
        KeyCode::Char('-') => app.playback.adjust_volume(-app.config.volume_step),
        KeyCode::Char('=') | KeyCode::Char('+') => {
            app.playback.adjust_volume(app.config.volume_step)
        }
        KeyCode::Char('m') => app.playback.toggle_mute(),

        _ => {}
    }

    Ok(())
}

fn turn_page(app: &mut App, delta: isize) -> Result<()> {
    match app.browser.view {
        MainView::Tracks => {
            app.browser.turn_tracks_page(delta);
        }
        MainView::Albums => {
            if let Some(page) = app.browser.albums_target_page(delta) {
                load_albums(app, page)?;
            }
        }
        MainView::Home | MainView::AlbumDetail => {}
    }
    Ok(())
}
