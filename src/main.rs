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
//! A terminal audio player for a self-hosted media server.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

use std::{
    io,
    sync::mpsc::{self, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use audiodeck::{
    App,
    catalog::HttpCatalog,
    config,
    events::{AppEvent, process_events},
    logging,
    player::AudioPlayer,
    tasks::spawn_task_worker,
    theme::Theme,
    util::term,
};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// The entry point of the application.
///
/// Loads configuration, starts logging and the workers, runs the event loop
/// and saves the configuration on the way out.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config).context("Failed to initialise logging")?;
    info!("Using media server {}", config.server_url());

    let (event_tx, event_rx) = mpsc::channel();
    let (task_tx, task_rx) = mpsc::channel();

    let catalog = HttpCatalog::new(config.server_url(), config.request_timeout());
    spawn_task_worker(catalog, task_rx, event_tx.clone());

    let player = AudioPlayer::new(event_tx.clone()).context("Failed to start audio player")?;

    let mut app = App::new(config, Box::new(player), event_tx, event_rx, task_tx);

    let mut terminal = setup_terminal(app.theme())?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = config::save_config(&app.config()) {
        warn!("Failed to save configuration: {}", e);
    }

    if let Err(e) = &res {
        error!("{:#}", e);
    }
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(theme: &Theme) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    term::set_background(theme.background()).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort and
/// does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    term::reset_background().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads, requests the initial data and enters
/// the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    spawn_input_thread(app.event_sender());
    spawn_tick_thread(app.event_sender());

    app.start().context("Failed to request initial data")?;

    process_events(terminal, app)
}

/// Translates raw key events to application events.
fn spawn_input_thread(event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if event_tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = event_tx.send(AppEvent::FatalError(format!("Input error: {}", e)));
                    break;
                }
            }
        }
    });
}

/// Sends a periodic tick, which drives search debouncing and toast expiry and
/// is the minimum "frame rate" for rendering.
fn spawn_tick_thread(event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while event_tx.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}
