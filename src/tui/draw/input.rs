//! Input bar: prompt label, typed text (or boot placeholder), and send button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::Colors;

const BOOT_PLACEHOLDER: &str = "BOOTING...";

pub(crate) fn draw_input(f: &mut Frame, app: &App, area: Rect, colors: Colors) {
    let emu = app.session.emulator();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = match emu.prompt.trim() {
        "" => ">",
        p => p,
    };
    let label_style = Style::default().fg(colors.fg).add_modifier(Modifier::BOLD);
    let text = if app.session.is_booted() {
        Span::styled(app.input.clone(), Style::default().fg(colors.fg))
    } else {
        Span::styled(BOOT_PLACEHOLDER, Style::default().fg(colors.dim))
    };
    let line = Line::from(vec![Span::styled(format!("{} ", label), label_style), text]);
    f.render_widget(Paragraph::new(line), inner);

    let button = format!("[{}]", if emu.uppercase { "RUN" } else { "Send" });
    let button_style = if app.input_enabled() && !app.input.trim().is_empty() {
        Style::default().fg(colors.bg).bg(colors.fg)
    } else {
        Style::default().fg(colors.dim)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(button, button_style))).alignment(Alignment::Right),
        inner,
    );

    if app.input_enabled() {
        let offset = (label.chars().count() + 1 + app.input.chars().count()) as u16;
        f.set_cursor_position(Position::new(
            inner.x + offset.min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}
