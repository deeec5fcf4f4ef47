//! Terminal output pane: transcript, loading block, and ready cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::session::EntryKind;

use super::super::app::App;
use super::super::text::entry_lines;
use super::super::constants::ERROR_COLOR;
use super::Colors;

fn build_lines(app: &App, width: usize, colors: Colors) -> Vec<Line<'static>> {
    let emu = app.session.emulator();
    let mut lines = Vec::new();

    for entry in app.session.history() {
        let style = match entry.kind {
            EntryKind::Error => Style::default().fg(ERROR_COLOR),
            EntryKind::User => Style::default().fg(colors.dim),
            EntryKind::System | EntryKind::Response => Style::default().fg(colors.fg),
        };
        let content = if emu.uppercase && entry.kind != EntryKind::Response {
            entry.content.to_uppercase()
        } else {
            entry.content.clone()
        };
        for line in entry_lines(&content, width) {
            lines.push(Line::from(Span::styled(line, style)));
        }
    }

    if app.session.is_loading() {
        let block = if emu.uppercase { "█" } else { "▓" };
        lines.push(Line::from(Span::styled(block, Style::default().fg(colors.dim))));
    } else if app.session.is_booted() {
        lines.push(Line::from(Span::styled(
            format!("{}█", emu.prompt),
            Style::default().fg(colors.fg),
        )));
    }
    lines
}

pub(crate) fn draw_output(f: &mut Frame, app: &mut App, area: Rect, colors: Colors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let lines = build_lines(app, inner.width as usize, colors);
    app.last_max_scroll = lines.len().saturating_sub(inner.height as usize);
    let scroll = app.scroll_line().min(u16::MAX as usize) as u16;

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
