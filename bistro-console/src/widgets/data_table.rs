//! Searchable, paginated table widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell as TableCell, Paragraph, Row, Table, TableState};
use serde::Serialize;
use shared::table::{Cell, DataTable, EMPTY_PLACEHOLDER, PageButton, TableView};

use super::tone_color;

/// Everything the widget needs besides the table itself
pub struct TableFrame<'a> {
    pub title: &'a str,
    pub selected: usize,
    pub searching: bool,
    pub loading: bool,
}

pub fn render<T: Serialize>(
    f: &mut Frame,
    area: Rect,
    table: &DataTable<T>,
    view: &TableView<'_, T>,
    frame: &TableFrame<'_>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if table.options.searchable { 3 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    if table.options.searchable {
        let style = if frame.searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let search = Paragraph::new(table.state.search().to_string())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(" Search (/) "));
        f.render_widget(search, chunks[0]);
        if frame.searching {
            f.set_cursor_position((
                chunks[0].x + table.state.search().chars().count() as u16 + 1,
                chunks[0].y + 1,
            ));
        }
    }

    let title = table.options.title.as_deref().unwrap_or(frame.title);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::Cyan));

    if frame.loading {
        let spinner = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        f.render_widget(spinner, chunks[1]);
        return;
    }

    let header = Row::new(table.headers().into_iter().map(|h| TableCell::from(h.to_string())))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let widths = vec![Constraint::Fill(1); table.columns.len().max(1)];

    if view.is_empty() {
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);
        f.render_widget(Table::new(Vec::<Row>::new(), widths).header(header), inner);
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let line = Rect {
            y: inner.y + inner.height.min(2),
            height: 1.min(inner.height),
            ..inner
        };
        f.render_widget(placeholder, line);
        return;
    }

    let rows = table.cells(view).into_iter().map(|cells| Row::new(cells.into_iter().map(cell)));
    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = TableState::default().with_selected(Some(frame.selected));
    f.render_stateful_widget(widget, chunks[1], &mut state);

    if view.pager_visible() {
        f.render_widget(Paragraph::new(pager_line(view)), chunks[2]);
    }
}

fn cell(c: Cell) -> TableCell<'static> {
    match c.tone {
        Some(tone) => TableCell::from(Span::styled(
            format!(" {} ", c.text),
            Style::default().fg(Color::Black).bg(tone_color(tone)),
        )),
        None => TableCell::from(c.text),
    }
}

/// "Showing a to b of n entries  < 1 … 4 [5] 6 … 10 >"
pub fn pager_line<T>(view: &TableView<'_, T>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::raw(view.summary()), Span::raw("   ")];
    spans.push(Span::styled("< Prev ", if view.prev_disabled() { dim } else { Style::default() }));
    for button in &view.buttons {
        match button {
            PageButton::Page(p) if *p == view.page => spans.push(Span::styled(
                format!("[{p}] "),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            PageButton::Page(p) => spans.push(Span::raw(format!("{p} "))),
            PageButton::Ellipsis => spans.push(Span::styled("… ", dim)),
        }
    }
    spans.push(Span::styled("Next >", if view.next_disabled() { dim } else { Style::default() }));
    Line::from(spans)
}
