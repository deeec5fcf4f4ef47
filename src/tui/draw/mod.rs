//! TUI rendering: header, terminal output, input bar, and keyboard overlay.

mod header;
mod input;
mod keyboard;
mod output;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::emulators::Palette;

use super::app::App;
use super::constants::{INPUT_HEIGHT, rgb};

/// Resolved ratatui colors for the current palette.
#[derive(Clone, Copy)]
pub(crate) struct Colors {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
}

impl From<Palette> for Colors {
    fn from(p: Palette) -> Self {
        Self {
            bg: rgb(p.bg),
            fg: rgb(p.fg),
            dim: rgb(p.dim),
            accent: rgb(p.accent),
        }
    }
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let colors = Colors::from(app.session.palette());
    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);

    let keyboard_height = if app.session.show_keyboard() {
        keyboard::height()
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(keyboard_height),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0], colors);
    output::draw_output(f, app, chunks[1], colors);
    input::draw_input(f, app, chunks[2], colors);
    if keyboard_height > 0 {
        keyboard::draw_keyboard(f, app, chunks[3], colors);
    }
}
