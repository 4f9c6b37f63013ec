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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the core audio playback logic, leveraging `libmpv` for
//! decoding and playback control. It manages a background worker thread that
//! bridges the application's command-based interface and the low-level MPV
//! event and property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the playback
//!    core (load, play, pause, seek and so on).
//! 2. **Event Channel**: Sends [`AppEvent`]s back to the UI thread, tagging
//!    load completion and end of track with the [`LoadToken`] of the load they
//!    belong to.
//!
//! MPV starts files in the order `loadfile` commands are issued, so the worker
//! keeps a queue of issued tokens and pairs each `StartFile` event with the
//! oldest outstanding token.

#[cfg(any(feature = "mpv", test))]
use {anyhow::Result, log::warn};

use crate::player::LoadToken;

#[cfg(feature = "mpv")]
use {
    crate::events::AppEvent,
    anyhow::Context,
    log::{debug, error},
    mpv::Format,
    std::{
        collections::VecDeque,
        sync::mpsc::{Receiver, Sender},
        thread,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum AudioPlayerCommand {
    Load(String, LoadToken),
    Play,
    Pause,
    Stop,
    SeekTo(f64),
    SetVolume(f64),
    SetMuted(bool),
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to broadcast playback updates and errors.
#[cfg(feature = "mpv")]
pub(super) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The parts of the MPV handle used to switch sources.
#[cfg(any(feature = "mpv", test))]
trait SourceControl {
    fn set_paused(&mut self, paused: bool) -> Result<()>;
    fn load_file(&mut self, url: &str) -> Result<()>;
}

#[cfg(feature = "mpv")]
impl SourceControl for mpv::MpvHandler {
    fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.set_property("pause", paused)
            .map_err(|e| anyhow::anyhow!("Failed to pause: {:?}", e))
    }

    fn load_file(&mut self, url: &str) -> Result<()> {
        self.command(&["loadfile", url, "replace"])
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {:?}", url, e))
    }
}

/// Replaces the current source with `url`.
///
/// Sources are loaded paused; the owner starts playback once the file is
/// ready. A failed pause is logged and the load still goes ahead.
#[cfg(any(feature = "mpv", test))]
fn load_paused(control: &mut impl SourceControl, url: &str) -> Result<()> {
    if let Err(e) = control.set_paused(true) {
        warn!("Before loading {}: {:#}", url, e);
    }
    control.load_file(url)
}

/// Tracks which load the events coming out of MPV belong to.
#[cfg(feature = "mpv")]
#[derive(Default)]
struct LoadTracker {
    issued: VecDeque<LoadToken>,
    active: Option<LoadToken>,
}

#[cfg(feature = "mpv")]
impl LoadTracker {
    fn issue(&mut self, token: LoadToken) {
        self.issued.push_back(token);
    }

    fn start(&mut self) {
        self.active = self.issued.pop_front();
    }

    fn stop(&mut self) {
        self.issued.clear();
        self.active = None;
    }
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining pending commands and waiting briefly for MPV events.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel back to the application is closed.
#[cfg(feature = "mpv")]
fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        // Finished files stay loaded and paused at the end so that they can
        // be replayed by seeking; the end is observed through eof-reached.
        builder
            .set_option("keep-open", "yes")
            .context("Failed to set keep-open")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .context("Failed to observe eof-reached")?;

    let mut loads = LoadTracker::default();

    loop {
        process_commands(&mut handler, &command_rx, &mut loads)?;
        process_mpv_events(&mut handler, &mut loads, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// Failures of individual commands are logged rather than ending the worker;
/// a failed load is reported against its token.
#[cfg(feature = "mpv")]
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<AudioPlayerCommand>,
    loads: &mut LoadTracker,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        debug!("Player command {:?}", command);

        let result = match command {
            AudioPlayerCommand::Load(url, token) => {
                loads.issue(token);
                load_paused(handler, &url)
            }
            AudioPlayerCommand::Play => handler
                .set_property("pause", false)
                .map_err(|e| anyhow::anyhow!("Failed to resume: {:?}", e)),
            AudioPlayerCommand::Pause => handler
                .set_property("pause", true)
                .map_err(|e| anyhow::anyhow!("Failed to pause: {:?}", e)),
            AudioPlayerCommand::Stop => {
                loads.stop();
                handler
                    .command(&["stop"])
                    .map_err(|e| anyhow::anyhow!("Failed to stop: {:?}", e))
            }
            AudioPlayerCommand::SeekTo(seconds) => handler
                .command(&["seek", &seconds.to_string(), "absolute"])
                .map_err(|e| anyhow::anyhow!("Failed to seek: {:?}", e)),
            AudioPlayerCommand::SetVolume(percent) => handler
                .set_property("volume", percent)
                .map_err(|e| anyhow::anyhow!("Failed to set volume: {:?}", e)),
            AudioPlayerCommand::SetMuted(muted) => handler
                .set_property("mute", muted)
                .map_err(|e| anyhow::anyhow!("Failed to set mute: {:?}", e)),
        };

        if let Err(e) = result {
            warn!("{:#}", e);
        }
    }

    Ok(())
}

/// Polls for MPV events and forwards the ones the application cares about.
///
/// This function waits for up to 50ms for an event from the MPV context.
#[cfg(feature = "mpv")]
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    loads: &mut LoadTracker,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::StartFile => {
                loads.start();
                None
            }
            mpv::Event::FileLoaded => loads.active.map(AppEvent::MediaReady),
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) => {
                    Some(AppEvent::DurationChanged(duration))
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(AppEvent::TimeChanged(seconds))
                }
                ("eof-reached", Format::Flag(true)) => loads.active.map(AppEvent::TrackEnded),
                _ => None,
            },
            mpv::Event::EndFile(result) => {
                let token = loads.active.take();
                match (token, result) {
                    (Some(token), Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                        Some(AppEvent::TrackEnded(token))
                    }
                    (Some(token), Ok(mpv::EndFileReason::MPV_END_FILE_REASON_ERROR)) => Some(
                        AppEvent::MediaFailed(token, "the source could not be played".to_string()),
                    ),
                    (Some(token), Err(e)) => {
                        Some(AppEvent::MediaFailed(token, format!("{:?}", e)))
                    }
                    _ => None,
                }
            }
            _ => None,
        };

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeControl {
        pause_fails: bool,
        calls: Vec<String>,
    }

    impl SourceControl for FakeControl {
        fn set_paused(&mut self, paused: bool) -> Result<()> {
            self.calls.push(format!("pause {}", paused));
            if self.pause_fails {
                anyhow::bail!("property unavailable");
            }
            Ok(())
        }

        fn load_file(&mut self, url: &str) -> Result<()> {
            self.calls.push(format!("load {}", url));
            Ok(())
        }
    }

    #[test]
    fn test_source_is_paused_before_loading() {
        let mut control = FakeControl::default();

        load_paused(&mut control, "http://host/a.mp3").unwrap();

        assert_eq!(control.calls, ["pause true", "load http://host/a.mp3"]);
    }

    #[test]
    fn test_failed_pause_does_not_stop_load() {
        let mut control = FakeControl {
            pause_fails: true,
            ..FakeControl::default()
        };

        assert!(load_paused(&mut control, "http://host/b.mp3").is_ok());
        assert_eq!(control.calls.last().map(String::as_str), Some("load http://host/b.mp3"));
    }
}
