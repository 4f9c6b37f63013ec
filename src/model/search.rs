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

//! Search query state.
//!
//! Keystrokes in the search line update the pending query text; the search
//! itself only runs once typing has paused for the debounce interval.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct SearchQuery {
    text: String,
    applied: String,
    changed_at: Option<Instant>,
    debounce: Duration,
}

impl SearchQuery {
    pub(crate) fn new(debounce: Duration) -> Self {
        Self {
            text: String::new(),
            applied: String::new(),
            changed_at: None,
            debounce,
        }
    }

    /// Records new query text typed at `now`.
    pub(crate) fn update(&mut self, text: &str, now: Instant) {
        if self.text != text {
            self.text = text.to_string();
            self.changed_at = Some(now);
        }
    }

    /// Returns the query to run if one is pending and the debounce interval has
    /// elapsed.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<String> {
        let changed_at = self.changed_at?;
        if now.duration_since(changed_at) < self.debounce {
            return None;
        }
        self.changed_at = None;
        self.apply()
    }

    /// Returns the pending query immediately, bypassing the debounce.
    pub(crate) fn take_now(&mut self) -> Option<String> {
        self.changed_at = None;
        self.apply()
    }

    fn apply(&mut self) -> Option<String> {
        let trimmed = self.text.trim().to_string();
        if trimmed == self.applied {
            return None;
        }
        self.applied = trimmed.clone();
        Some(trimmed)
    }

    /// The query currently in effect for loaded views.
    pub(crate) fn applied(&self) -> Option<&str> {
        (!self.applied.is_empty()).then_some(self.applied.as_str())
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.changed_at = None;
        self.applied.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_held_until_debounce_elapses() {
        let start = Instant::now();
        let mut search = SearchQuery::new(Duration::from_millis(300));

        search.update("abc", start);
        assert_eq!(search.take_due(start + Duration::from_millis(100)), None);
        assert_eq!(
            search.take_due(start + Duration::from_millis(300)),
            Some("abc".to_string())
        );
        assert_eq!(search.applied(), Some("abc"));
        assert_eq!(search.take_due(start + Duration::from_millis(600)), None);
    }

    #[test]
    fn test_typing_restarts_debounce() {
        let start = Instant::now();
        let mut search = SearchQuery::new(Duration::from_millis(300));

        search.update("a", start);
        search.update("ab", start + Duration::from_millis(200));
        assert_eq!(search.take_due(start + Duration::from_millis(400)), None);
        assert_eq!(
            search.take_due(start + Duration::from_millis(500)),
            Some("ab".to_string())
        );
    }

    #[test]
    fn test_unchanged_query_is_not_rerun() {
        let start = Instant::now();
        let mut search = SearchQuery::new(Duration::from_millis(300));

        search.update("rock ", start);
        assert_eq!(search.take_now(), Some("rock".to_string()));
        search.update("rock", start);
        assert_eq!(search.take_now(), None);

        search.update("", start);
        assert_eq!(search.take_now(), Some(String::new()));
        assert_eq!(search.applied(), None);
    }
}
