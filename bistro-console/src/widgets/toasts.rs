use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::toast::{ToastKind, Toasts};

/// Newest toasts stacked in the top-right corner
pub fn render(f: &mut Frame, area: Rect, toasts: &Toasts) {
    let width = 44.min(area.width);
    let mut y = area.y + 1;
    for toast in toasts.items().iter().rev().take(4) {
        if y + 3 > area.bottom() {
            break;
        }
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
        };
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(toast.message.clone())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
            rect,
        );
        y += 3;
    }
}
