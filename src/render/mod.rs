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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod browser;
mod commander;
mod icons;
mod player;
mod toast;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    browser::MainView,
    render::{
        browser::draw_browser, commander::draw_commander, icons::ICON_LOADING,
        player::draw_player, toast::draw_toasts,
    },
};

const TABS: [(char, MainView); 3] = [
    ('1', MainView::Home),
    ('2', MainView::Albums),
    ('3', MainView::Tracks),
];

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header with the view tabs, the current view, the
/// player and the search line. Toasts are drawn over the top right of the
/// view.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    draw_browser(f, outer[1], app);
    draw_player(f, outer[2], app);
    draw_commander(f, outer[3], app);
    draw_toasts(f, outer[1], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let current = match app.browser.view {
        MainView::AlbumDetail => MainView::Albums,
        view => view,
    };

    let mut spans = Vec::new();
    for (key, view) in TABS {
        let style = if view == current {
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.hint_colour)
        };
        spans.push(Span::styled(format!(" {} {} ", key, view.title()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if app.browser.loading {
        let loading = Paragraph::new(format!("Loading{} ", ICON_LOADING))
            .style(Style::default().fg(app.theme.hint_colour))
            .alignment(Alignment::Right);
        f.render_widget(loading, chunks[1]);
    }
}
