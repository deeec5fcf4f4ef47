//! Keyboard overlay with the most recently pressed key lit.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::keyboard::KEYBOARD_LAYOUT;
use super::Colors;

/// Rows plus the block border.
pub(crate) fn height() -> u16 {
    KEYBOARD_LAYOUT.len() as u16 + 2
}

pub(crate) fn draw_keyboard(f: &mut Frame, app: &App, area: Rect, colors: Colors) {
    let pressed = app.pressed_key();
    let key_style = Style::default().fg(colors.dim);
    let lit_style = Style::default()
        .fg(colors.bg)
        .bg(colors.fg)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, cap) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let label = if *cap == "SPACE" {
                    format!("[{:^24}]", "")
                } else {
                    format!("[{}]", cap)
                };
                let style = if pressed == Some(*cap) { lit_style } else { key_style };
                spans.push(Span::styled(label, style));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.dim))
        .title(Span::styled(" KEYBOARD ", Style::default().fg(colors.accent)))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(colors.bg));
    f.render_widget(
        Paragraph::new(rows).block(block).alignment(Alignment::Center),
        area,
    );
}
