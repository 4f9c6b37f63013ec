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

//! Diagnostic logging.
//!
//! The terminal belongs to the user interface, so log records are written to a
//! file instead.

use std::time::SystemTime;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::AppConfig;

/// Installs the global logger described by the configuration.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger has already
/// been installed.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("ureq", LevelFilter::Warn)
        .level_for("rustls", LevelFilter::Warn)
        .chain(
            fern::log_file(&config.log_file)
                .with_context(|| format!("Failed to open log file {}", config.log_file))?,
        )
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
