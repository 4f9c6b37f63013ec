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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current track, the
//! elapsed and total time, the progress and volume gauges, and the play mode
//! and mute indicators.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    model::PlayMode,
    player::PlayerState,
    render::icons::{
        ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_REPEAT_ONE, ICON_SEQUENTIAL, ICON_SHUFFLE,
        ICON_STOP, ICON_VOLUME,
    },
    util::format::format_position,
};

/// Renders the main player widget including track info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = app.playback.state();

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    if let Some(track) = &state.now_playing {
        let icon = match app.playback.player_state() {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => ICON_STOP,
        };

        let track_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), bold).fg(Color::White),
            Span::styled(track.title.as_str(), bold).fg(theme.accent_colour),
            Span::raw(" from "),
            Span::styled(track.album_title.as_str(), bold).fg(theme.accent_colour),
            Span::raw(" by "),
            Span::styled(track.artist.as_str(), bold).fg(theme.accent_colour),
        ]);
        f.render_widget(Paragraph::new(track_line), info_chunks[0]);

        let remaining = (state.duration - state.current_time).max(0.0);

        let time_line = Line::from(vec![
            Span::styled(format_position(state.current_time), bold).fg(theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(format_position(state.duration), bold).fg(theme.accent_colour),
            Span::styled(" (-", bold).fg(Color::White),
            Span::styled(format_position(remaining), bold).fg(theme.accent_colour),
            Span::styled(")", bold).fg(Color::White),
        ]);

        f.render_widget(
            Paragraph::new(time_line).alignment(Alignment::Right),
            info_chunks[1],
        );
    } else {
        f.render_widget(
            Paragraph::new(" Nothing playing").fg(theme.hint_colour),
            info_chunks[0],
        );
    }

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    let mode_icon = match state.mode {
        PlayMode::Sequential => ICON_SEQUENTIAL,
        PlayMode::Shuffle => ICON_SHUFFLE,
        PlayMode::RepeatOne => ICON_REPEAT_ONE,
    };
    let mode_line = Line::from(vec![
        Span::styled(format!(" {} ", mode_icon), bold).fg(theme.accent_colour),
        Span::raw(state.mode.label()),
        Span::raw("  "),
        Span::raw(state.context.kind.label()).fg(theme.hint_colour),
    ]);
    f.render_widget(Paragraph::new(mode_line), control_chunks[0]);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(6),
        ])
        .split(control_chunks[1]);

    let volume_icon = if state.muted { ICON_MUTED } else { ICON_VOLUME };
    f.render_widget(
        Paragraph::new(volume_icon).fg(Color::White),
        volume_layout[0],
    );

    let vol_ratio = f64::from(state.volume).clamp(0.0, 1.0);
    let gauge_colour = if state.muted {
        theme.hint_colour
    } else {
        theme.accent_colour
    };

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_colour).bg(theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", (vol_ratio * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);

    let position = if state.duration > 0.0 {
        (state.current_time / state.duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}
