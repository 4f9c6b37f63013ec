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

//! Terminal emulator styling.
//!
//! The background colour of the whole terminal window is set with OSC 11 and
//! restored with OSC 111. Most modern terminals (XTerm, iTerm2, Alacritty,
//! Kitty) support these sequences; others ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Sets the terminal background. Colours other than RGB are ignored.
pub fn set_background(colour: Color) -> io::Result<()> {
    let Color::Rgb(r, g, b) = colour else {
        return Ok(());
    };
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;#{:02x}{:02x}{:02x}\x07", r, g, b)?;
    stdout.flush()
}

/// Restores the background configured in the terminal emulator.
pub fn reset_background() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
