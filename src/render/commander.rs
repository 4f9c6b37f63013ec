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

//! Render the search line.
//!
//! This module renders the search prompt, the current text and the cursor
//! while the search line is active, and the applied search otherwise.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const PROMPT: &str = "/";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = if commander.active() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::raw(commander.input.value()),
        ])
    } else if let Some(query) = app.search.applied() {
        Line::from(vec![
            Span::styled("search: ", Style::default().fg(theme.hint_colour)),
            Span::raw(query),
        ])
    } else {
        Line::from(Span::styled(
            "/ search   space play/pause   n/p next/previous   r mode   q quit",
            Style::default().fg(theme.hint_colour),
        ))
    };

    f.render_widget(
        Paragraph::new(line).style(
            Style::default()
                .fg(theme.commander_colour)
                .bg(theme.gauge_track_colour),
        ),
        container[0],
    );

    if commander.active() {
        let cursor_x = container[0].x + (PROMPT.len() + commander.input.visual_cursor()) as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
