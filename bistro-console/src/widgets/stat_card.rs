use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(f: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(card, area);
}
