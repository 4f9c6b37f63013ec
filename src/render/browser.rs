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

//! Render the media browser interface.
//!
//! Each view is a bordered list or track table. Rows representing the playing
//! track are marked with the play icon, following the playback core's
//! matching rules.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Row, Table, TableState},
};

use crate::{
    App,
    browser::{HomePane, MainView},
    model::Track,
    render::icons::ICON_PLAY,
    theme::Theme,
    util::format::format_time,
};

/// Renders the current view of the media browser.
pub(crate) fn draw_browser(f: &mut Frame, area: Rect, app: &mut App) {
    let scope = app.browser.highlight_scope(&app.playback.state().context);
    let playing = app
        .playback
        .highlight_rows(&app.browser.track_rows(), scope);

    let theme = app.theme;
    let browser = &mut app.browser;

    match browser.view {
        MainView::Home => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);

            let recent: Vec<ListItem> = browser
                .recent
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    let marker = if playing.contains(&i) { ICON_PLAY } else { " " };
                    ListItem::new(format!("{} {}  {}", marker, t.title, t.artist))
                })
                .collect();
            render_list(
                f,
                chunks[0],
                " Recently Added ",
                recent,
                &mut browser.recent_state,
                browser.home_pane == HomePane::Recent,
                &theme,
            );

            let albums: Vec<ListItem> = browser
                .recommended
                .iter()
                .map(|a| ListItem::new(album_label(&a.name, a.artist.as_deref())))
                .collect();
            render_list(
                f,
                chunks[1],
                " Albums ",
                albums,
                &mut browser.recommended_state,
                browser.home_pane == HomePane::Albums,
                &theme,
            );
        }

        MainView::Albums => {
            let p = &browser.albums_pagination;
            let title = format!(" Albums ({}/{}) ", p.current_page, p.total_pages.max(1));
            let items: Vec<ListItem> = browser
                .albums
                .iter()
                .map(|a| {
                    ListItem::new(format!(
                        "{}  ({} tracks)",
                        album_label(&a.name, a.artist.as_deref()),
                        a.track_count
                    ))
                })
                .collect();
            render_list(
                f,
                area,
                &title,
                items,
                &mut browser.albums_state,
                true,
                &theme,
            );
        }

        MainView::AlbumDetail => {
            let (title, rows) = match &browser.album {
                Some(album) => (
                    format!(" {} ", album_label(&album.name, album.artist.as_deref())),
                    track_rows(&album.tracks, &playing, &theme),
                ),
                None => (" Album ".to_string(), Vec::new()),
            };
            render_track_table(f, area, &title, rows, &mut browser.album_state, &theme);
        }

        MainView::Tracks => {
            let title = format!(
                " Tracks ({}/{}, {} total) ",
                browser.tracks_page,
                browser.tracks_total_pages(),
                browser.tracks.len()
            );
            let rows = track_rows(browser.tracks_page_slice(), &playing, &theme);
            render_track_table(f, area, &title, rows, &mut browser.tracks_state, &theme);
        }
    }
}

fn album_label(name: &str, artist: Option<&str>) -> String {
    match artist {
        Some(artist) if !artist.is_empty() => format!("{} by {}", name, artist),
        _ => name.to_string(),
    }
}

fn track_rows(tracks: &[Track], playing: &[usize], theme: &Theme) -> Vec<Row<'static>> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_playing = playing.contains(&i);
            let marker = if is_playing { ICON_PLAY } else { "" };
            let title_style = if is_playing {
                Style::default()
                    .fg(theme.playing_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_track_fg)
            };

            Row::new(vec![
                Cell::from(Line::from(marker).style(Style::default().fg(theme.playing_fg))),
                Cell::from(
                    Line::from(format_time(track.duration_secs))
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(track.artist.clone()).style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(track.album_title.clone())
                        .style(Style::default().fg(theme.table_album_fg)),
                ),
                Cell::from(Line::from(track.title.clone()).style(title_style)),
            ])
        })
        .collect()
}

fn render_track_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    rows: Vec<Row<'static>>,
    state: &mut TableState,
    theme: &Theme,
) {
    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(""),
            Cell::from(Line::from("Time").alignment(Alignment::Right)),
            Cell::from(""),
            Cell::from("Artist"),
            Cell::from("Album"),
            Cell::from("Title"),
        ])
        .style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1),
    )
    .row_highlight_style(Style::default().bg(theme.selection_bg).fg(theme.table_track_fg))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(theme.accent_colour)),
    );

    f.render_stateful_widget(table, area, state);
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let style = if is_active {
        Style::default().fg(theme.accent_colour)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(style),
        )
        .highlight_style(Style::default().bg(theme.selection_bg).fg(theme.table_track_fg))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
