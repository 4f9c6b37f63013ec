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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "audiodeck";

pub const DEFAULT_AUDIO_PER_PAGE: usize = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Base URL of the media server, without a trailing slash.
    pub server_url: String,

    /// Tracks per page in the tracks view. When unset the server's own
    /// setting is used.
    pub audio_per_page: Option<usize>,
    pub albums_per_page: usize,

    pub request_timeout_secs: u64,

    pub log_level: String,
    pub log_file: String,

    pub volume: f32,
    pub seek_step_secs: f64,
    pub volume_step: f32,

    pub search_debounce_ms: u64,
    pub toast_ttl_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server_url: "http://127.0.0.1:5000".to_string(),
            audio_per_page: None,
            albums_per_page: 20,
            request_timeout_secs: 15,
            log_level: "info".to_string(),
            log_file: "audiodeck.log".to_string(),
            volume: 1.0,
            seek_step_secs: 5.0,
            volume_step: 0.05,
            search_debounce_ms: 300,
            toast_ttl_ms: 3000,
        }
    }
}

impl AppConfig {
    pub fn server_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    /// Page size for the tracks view, preferring the local override.
    pub fn tracks_per_page(&self, server_value: Option<usize>) -> usize {
        self.audio_per_page
            .or(server_value)
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_AUDIO_PER_PAGE)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
