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

//! Search line input logic and state management.
//!
//! `/` activates the search line. While it is active every key edits the
//! query; the caller debounces the edits into searches. Enter applies the
//! query at once and Esc clears it.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

/// What a key event did to the search line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommanderAction {
    /// The event was not for the search line.
    Ignored,
    /// The event was consumed without changing the query.
    Handled,
    Changed(String),
    Submitted(String),
    Cleared,
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> CommanderAction {
        let Event::Key(key_event) = event else {
            return CommanderAction::Ignored;
        };

        if !self.active {
            return match key_event.code {
                KeyCode::Char('/') => {
                    self.active = true;
                    CommanderAction::Handled
                }
                _ => CommanderAction::Ignored,
            };
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
                CommanderAction::Cleared
            }

            KeyCode::Enter => {
                self.active = false;
                CommanderAction::Submitted(self.input.value().trim().to_string())
            }

            _ => {
                let before = self.input.value().to_string();
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                if self.input.value() == before {
                    CommanderAction::Handled
                } else {
                    CommanderAction::Changed(self.input.value().trim().to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_inactive_commander_ignores_keys() {
        let mut commander = Commander::new();
        assert_eq!(
            commander.handle_event(&key(KeyCode::Char('q'))),
            CommanderAction::Ignored
        );
        assert!(!commander.active());
    }

    #[test]
    fn test_typing_changes_query() {
        let mut commander = Commander::new();
        assert_eq!(
            commander.handle_event(&key(KeyCode::Char('/'))),
            CommanderAction::Handled
        );
        assert_eq!(
            commander.handle_event(&key(KeyCode::Char('j'))),
            CommanderAction::Changed("j".to_string())
        );
        assert_eq!(
            commander.handle_event(&key(KeyCode::Char('a'))),
            CommanderAction::Changed("ja".to_string())
        );
        assert_eq!(
            commander.handle_event(&key(KeyCode::Enter)),
            CommanderAction::Submitted("ja".to_string())
        );
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "ja");
    }

    #[test]
    fn test_escape_clears_query() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char('/')));
        commander.handle_event(&key(KeyCode::Char('x')));

        assert_eq!(
            commander.handle_event(&key(KeyCode::Esc)),
            CommanderAction::Cleared
        );
        assert_eq!(commander.input.value(), "");
        assert!(!commander.active());
    }
}
