//! Header bar: emulator name and year, command hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::Colors;

pub(crate) fn hint_text(show_keyboard: bool) -> String {
    format!(
        "/emu to switch • /keyboard to {} • /help ",
        if show_keyboard { "hide" } else { "show" }
    )
}

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, colors: Colors) {
    let emu = app.session.emulator();
    let style = Style::default().fg(colors.bg).bg(colors.accent);

    let title = Line::from(Span::styled(
        format!(" {} ({})", emu.name, emu.year),
        style.add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title).style(style), area);

    let hints = Line::from(Span::styled(hint_text(app.session.show_keyboard()), style));
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
}
