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

//! Short-lived status messages.
//!
//! Notices and errors from the playback core and the catalog are shown as
//! toasts in the corner of the screen and dropped once their time to live has
//! passed. Expiry is driven by the application tick.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Toast {
    pub(crate) message: String,
    pub(crate) severity: Severity,
    expires_at: Instant,
}

pub(crate) struct ToastManager {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastManager {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub(crate) fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message.into(), Severity::Info, now);
    }

    pub(crate) fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message.into(), Severity::Error, now);
    }

    fn push(&mut self, message: String, severity: Severity, now: Instant) {
        // Repeating the newest message just extends its life
        if let Some(last) = self.toasts.back_mut()
            && last.message == message
            && last.severity == severity
        {
            last.expires_at = now + self.ttl;
            return;
        }

        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message,
            severity,
            expires_at: now + self.ttl,
        });
    }

    /// Drops expired toasts, returning whether anything changed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before != self.toasts.len()
    }

    /// Active toasts, oldest first.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = ToastManager::new(Duration::from_secs(3));
        toasts.info("Playlist complete", start);

        assert!(!toasts.tick(start + Duration::from_secs(2)));
        assert!(!toasts.is_empty());

        assert!(toasts.tick(start + Duration::from_secs(3)));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_repeated_message_extends_life() {
        let start = Instant::now();
        let mut toasts = ToastManager::new(Duration::from_secs(3));
        toasts.error("Failed to load", start);
        toasts.error("Failed to load", start + Duration::from_secs(2));

        assert_eq!(toasts.iter().count(), 1);
        toasts.tick(start + Duration::from_secs(4));
        assert_eq!(toasts.iter().count(), 1);
    }

    #[test]
    fn test_oldest_toast_is_dropped_when_full() {
        let now = Instant::now();
        let mut toasts = ToastManager::new(Duration::from_secs(3));
        for i in 0..MAX_TOASTS + 1 {
            toasts.info(format!("Notice {i}"), now);
        }

        let messages: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages.len(), MAX_TOASTS);
        assert_eq!(messages[0], "Notice 1");
    }
}
