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

//! Session-wide track list used for shuffling across the whole catalog.
//!
//! The cache is populated at most once per session. While a population is in
//! flight further requests join it instead of starting another, and only the
//! most recent request's generation is remembered as waiting for the result.

use std::sync::Arc;

use crate::model::Track;

#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Empty,
    Loading {
        waiting: Option<u64>,
    },
    Ready(Arc<[Track]>),
}

/// What the caller has to do after asking for the cache.
#[derive(Debug, PartialEq)]
pub(crate) enum CacheRequest {
    Ready(Arc<[Track]>),
    /// The caller must start the population.
    StartLoad,
    /// A population is already running; the request has joined it.
    Joined,
}

#[derive(Debug, Default)]
pub(crate) struct GlobalCache {
    state: CacheState,
}

impl GlobalCache {
    /// Requests the cache on behalf of an operation of `generation`.
    pub(crate) fn request(&mut self, generation: u64) -> CacheRequest {
        match &mut self.state {
            CacheState::Ready(tracks) => return CacheRequest::Ready(Arc::clone(tracks)),
            CacheState::Loading { waiting } => {
                *waiting = Some(generation);
                return CacheRequest::Joined;
            }
            CacheState::Empty => {}
        }

        self.state = CacheState::Loading {
            waiting: Some(generation),
        };
        CacheRequest::StartLoad
    }

    /// Starts a population nobody is waiting for, if none has happened yet.
    pub(crate) fn prefetch(&mut self) -> bool {
        if matches!(self.state, CacheState::Empty) {
            self.state = CacheState::Loading { waiting: None };
            true
        } else {
            false
        }
    }

    /// Stores the populated list, returning the generation waiting for it.
    ///
    /// A result arriving when no population is in flight is ignored.
    pub(crate) fn complete(&mut self, tracks: Vec<Track>) -> Option<u64> {
        match std::mem::take(&mut self.state) {
            CacheState::Loading { waiting } => {
                self.state = CacheState::Ready(Arc::from(tracks));
                waiting
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns the cache to empty after a failed population so a later
    /// request can retry, returning the generation that was waiting.
    pub(crate) fn fail(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.state) {
            CacheState::Loading { waiting } => waiting,
            other => {
                self.state = other;
                None
            }
        }
    }

    pub(crate) fn tracks(&self) -> Option<&Arc<[Track]>> {
        match &self.state {
            CacheState::Ready(tracks) => Some(tracks),
            _ => None,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, CacheState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::tracks;

    #[test]
    fn test_second_request_joins_in_flight_load() {
        let mut cache = GlobalCache::default();

        assert_eq!(cache.request(1), CacheRequest::StartLoad);
        assert_eq!(cache.request(2), CacheRequest::Joined);
        assert!(cache.is_loading());

        assert_eq!(cache.complete(tracks("T", 3)), Some(2));
        match cache.request(3) {
            CacheRequest::Ready(list) => assert_eq!(list.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut cache = GlobalCache::default();

        assert_eq!(cache.request(1), CacheRequest::StartLoad);
        assert_eq!(cache.fail(), Some(1));
        assert!(cache.tracks().is_none());
        assert_eq!(cache.request(2), CacheRequest::StartLoad);
    }

    #[test]
    fn test_prefetch_has_no_waiter() {
        let mut cache = GlobalCache::default();

        assert!(cache.prefetch());
        assert!(!cache.prefetch());
        assert_eq!(cache.complete(tracks("T", 1)), None);
        assert!(!cache.prefetch());
    }

    #[test]
    fn test_late_result_after_ready_is_ignored() {
        let mut cache = GlobalCache::default();
        cache.request(1);
        cache.complete(tracks("T", 2));

        assert_eq!(cache.complete(tracks("U", 5)), None);
        assert_eq!(cache.tracks().map(|t| t.len()), Some(2));
    }
}
