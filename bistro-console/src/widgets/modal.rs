//! Centered modal dialogs: form, detail, delete confirmation

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::forms::{FieldValue, FormState};

fn frame(f: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

pub fn render_form(f: &mut Frame, area: Rect, form: &FormState, submitting: bool) {
    let area = centered_rect(60, 80, area);
    let inner = frame(f, area, &form.title, Color::Cyan);

    let mut lines = Vec::new();
    let mut cursor = None;
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = format!("{:<24}", field.label);
        let mut spans = vec![Span::styled(label.clone(), label_style), Span::raw(field.display())];
        match &field.value {
            FieldValue::Text { input, hint } => {
                if let Some(hint) = hint {
                    spans.push(Span::styled(format!("  ({hint})"), Style::default().fg(Color::DarkGray)));
                }
                if focused {
                    cursor = Some((
                        inner.x + label.chars().count() as u16 + input.visual_cursor() as u16,
                        inner.y + lines.len() as u16,
                    ));
                }
            }
            FieldValue::Choice { .. } => {
                spans.push(Span::styled("  < >", Style::default().fg(Color::DarkGray)));
            }
            FieldValue::Toggle(_) => {}
        }
        lines.push(Line::from(spans));
        if let Some(error) = form.errors.get(field.name) {
            lines.push(Line::from(Span::styled(
                format!("{:<24}{error}", ""),
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines.push(Line::raw(""));
    lines.push(if submitting {
        Line::from(Span::styled("Saving...", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            "Tab/Up/Down move  Space toggles  Enter saves  Esc cancels",
            Style::default().fg(Color::DarkGray),
        ))
    });

    f.render_widget(Paragraph::new(lines), inner);
    if let Some(position) = cursor
        && !submitting
    {
        f.set_cursor_position(position);
    }
}

pub fn render_detail(f: &mut Frame, area: Rect, title: &str, rows: &[(&'static str, String)]) {
    let area = centered_rect(60, 70, area);
    let inner = frame(f, area, title, Color::Blue);
    let mut lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
                Span::raw(value.clone()),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "e edit  d delete  Esc close",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_confirm(f: &mut Frame, area: Rect, message: &str, submitting: bool) {
    let area = centered_rect(50, 25, area);
    let inner = frame(f, area, "Confirm Delete", Color::Red);
    let footer = if submitting {
        Span::styled("Deleting...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("y confirm  n/Esc cancel", Style::default().fg(Color::DarkGray))
    };
    let text = vec![Line::raw(message.to_string()), Line::raw(""), Line::from(footer)];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
