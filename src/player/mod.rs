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

//! Audio playback control.
//!
//! This module provides the [`MediaSink`] abstraction the playback core drives,
//! and the [`AudioPlayer`] handle implementing it. The handle does no audio
//! work itself; it forwards commands to a background worker that owns the
//! MPV context, so that slow media operations never block the UI thread.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

pub use commands::AudioPlayerCommand;

#[cfg(feature = "mpv")]
use crate::events::AppEvent;

/// Identifies one media load request.
///
/// Every load gets a fresh token; completion reports carrying an older token
/// belong to a superseded load and are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// The single playback device owned by the playback core.
///
/// Loading never starts playback by itself: the sink reports readiness for a
/// token and the owner then calls [`MediaSink::play`].
pub trait MediaSink {
    /// Replaces the current source with `url`, paused.
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()>;
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
    fn seek_to(&mut self, seconds: f64) -> Result<()>;
    /// Sets the output volume, `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32) -> Result<()>;
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the MPV worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send playback events (readiness, progress,
    ///   end of track and errors) back to the main event loop.
    #[cfg(feature = "mpv")]
    pub fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self::with_sender(command_tx))
    }

    /// Creates a handle that forwards commands to an existing channel.
    pub fn with_sender(command_tx: mpsc::Sender<AudioPlayerCommand>) -> Self {
        Self { command_tx }
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<()> {
        self.command_tx.send(command)?;
        Ok(())
    }
}

impl MediaSink for AudioPlayer {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
        self.send(AudioPlayerCommand::Load(url.to_string(), token))
    }

    fn play(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Pause)
    }

    fn stop(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Stop)
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.send(AudioPlayerCommand::SeekTo(seconds.max(0.0)))
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        // MPV volume is a percentage
        let percent = (volume.clamp(0.0, 1.0) * 100.0).round() as f64;
        self.send(AudioPlayerCommand::SetVolume(percent))
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        self.send(AudioPlayerCommand::SetMuted(muted))
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! A media sink that records the calls made to it.

    use std::sync::{Arc, Mutex};

    use anyhow::{Result, bail};

    use super::{LoadToken, MediaSink};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum SinkCall {
        Load(String, LoadToken),
        Play,
        Pause,
        Stop,
        SeekTo(f64),
        SetVolume(f32),
        SetMuted(bool),
    }

    #[derive(Clone, Default)]
    pub(crate) struct RecordingSink {
        calls: Arc<Mutex<Vec<SinkCall>>>,
        fail_loads: Arc<Mutex<bool>>,
    }

    impl RecordingSink {
        pub(crate) fn calls(&self) -> Vec<SinkCall> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn clear(&self) {
            self.calls.lock().unwrap().clear();
        }

        pub(crate) fn loads(&self) -> Vec<(String, LoadToken)> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    SinkCall::Load(url, token) => Some((url, token)),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn last_token(&self) -> Option<LoadToken> {
            self.loads().last().map(|(_, token)| *token)
        }

        pub(crate) fn set_fail_loads(&self, fail: bool) {
            *self.fail_loads.lock().unwrap() = fail;
        }

        fn record(&self, call: SinkCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl MediaSink for RecordingSink {
        fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
            if *self.fail_loads.lock().unwrap() {
                bail!("sink unavailable");
            }
            self.record(SinkCall::Load(url.to_string(), token));
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            self.record(SinkCall::Play);
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.record(SinkCall::Pause);
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.record(SinkCall::Stop);
            Ok(())
        }

        fn seek_to(&mut self, seconds: f64) -> Result<()> {
            self.record(SinkCall::SeekTo(seconds));
            Ok(())
        }

        fn set_volume(&mut self, volume: f32) -> Result<()> {
            self.record(SinkCall::SetVolume(volume));
            Ok(())
        }

        fn set_muted(&mut self, muted: bool) -> Result<()> {
            self.record(SinkCall::SetMuted(muted));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_player_forwards_commands() {
        let (tx, rx) = mpsc::channel();
        let mut player = AudioPlayer::with_sender(tx);

        let token = LoadToken::default().next();
        player.load("http://host/audios/a.mp3", token).unwrap();
        player.set_volume(0.42).unwrap();
        player.set_volume(3.0).unwrap();
        player.seek_to(-1.0).unwrap();
        player.play().unwrap();

        let commands: Vec<AudioPlayerCommand> = rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![
                AudioPlayerCommand::Load("http://host/audios/a.mp3".to_string(), token),
                AudioPlayerCommand::SetVolume(42.0),
                AudioPlayerCommand::SetVolume(100.0),
                AudioPlayerCommand::SeekTo(0.0),
                AudioPlayerCommand::Play,
            ]
        );
    }

    #[test]
    fn test_audio_player_reports_dead_worker() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut player = AudioPlayer::with_sender(tx);
        assert!(player.play().is_err());
    }

    #[test]
    fn test_load_tokens_are_distinct() {
        let first = LoadToken::default().next();
        let second = first.next();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
