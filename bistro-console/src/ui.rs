//! Frame layout: sidebar, header, page content, log panel, toasts

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;
use crate::pages::{CrudPage, Listing, ListPage, Modal, Resource};
use crate::route::Route;
use crate::widgets::data_table::{self, TableFrame};
use crate::widgets::{chart, modal, stat_card, toasts};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if app.route() == Route::Login {
        render_login(f, area, app);
        toasts::render(f, area, &app.toasts);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(if app.show_logs { 8 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(rows[1]);

    render_header(f, rows[0], app);
    render_sidebar(f, body[0], app.route());
    render_content(f, body[1], app);
    if app.show_logs {
        render_logs(f, rows[2], app);
    }
    render_help(f, rows[3], app);
    toasts::render(f, area, &app.toasts);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let user = app.session.user().unwrap_or("-");
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Bistro ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(" Back Office | "),
        Span::styled(app.route().title(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(user.to_string(), Style::default().fg(Color::Green)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, current: Route) {
    let items: Vec<ListItem> = Route::NAV
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let style = if *route == current {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} {}", i + 1, route.title())).style(style)
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Navigation ")),
        area,
    );
}

fn render_logs(f: &mut Frame, area: Rect, app: &App) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.searching {
        "type to filter  Enter/Esc done".to_string()
    } else {
        let mut text = String::from("1-7 pages  / search  [ ] pages  r reload  l logs  L logout  q quit");
        match app.route() {
            Route::Staff => text.push_str("  n new  Enter view  e edit  d delete"),
            Route::Menu => text.push_str("  n new  Enter view  e edit  d delete  a availability  c category"),
            _ => {}
        }
        text
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    let searching = app.searching;
    match app.route() {
        Route::Dashboard => render_dashboard(f, area, app),
        Route::Staff => render_crud(f, area, &mut app.staff, "Staff", searching),
        Route::Menu => render_menu(f, area, app),
        Route::Orders => render_list(f, area, &mut app.orders, "Orders", searching),
        Route::Reservations => {
            render_list(f, area, &mut app.reservations, "Reservations", searching)
        }
        Route::Inventory => render_list(f, area, &mut app.inventory, "Inventory", searching),
        Route::Reports => render_reports(f, area, app),
        Route::Login => {}
    }
}

fn render_crud<R: Resource>(
    f: &mut Frame,
    area: Rect,
    page: &mut CrudPage<R>,
    title: &str,
    searching: bool,
) {
    let frame = TableFrame {
        title,
        selected: page.selected,
        searching,
        loading: page.loading,
    };
    let view = page.table.view(&page.rows);
    data_table::render(f, area, &page.table, &view, &frame);
    render_crud_modal(f, area, page);
}

fn render_crud_modal<R: Resource>(f: &mut Frame, area: Rect, page: &CrudPage<R>) {
    match &page.modal {
        Some(Modal::Form { state, .. }) => modal::render_form(f, area, state, page.is_submitting),
        Some(Modal::Detail(record)) => {
            modal::render_detail(f, area, &record.display_name(), &record.detail())
        }
        Some(Modal::ConfirmDelete(record)) => modal::render_confirm(
            f,
            area,
            &format!("Delete {}? This cannot be undone.", record.display_name()),
            page.is_submitting,
        ),
        None => {}
    }
}

fn render_menu(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" Category (c): "),
            Span::styled(app.menu.category_label(), Style::default().fg(Color::Yellow)),
        ])),
        chunks[0],
    );

    let frame = TableFrame {
        title: "Menu",
        selected: app.menu.selected,
        searching: app.searching,
        loading: app.menu.loading,
    };
    let (table, view) = app.menu.table_view();
    data_table::render(f, chunks[1], table, &view, &frame);
    render_crud_modal(f, area, &*app.menu);
}

fn render_list<T: Listing>(
    f: &mut Frame,
    area: Rect,
    page: &mut ListPage<T>,
    title: &str,
    searching: bool,
) {
    let frame = TableFrame {
        title,
        selected: 0,
        searching,
        loading: page.loading,
    };
    let view = page.table.view(&page.rows);
    data_table::render(f, area, &page.table, &view, &frame);
}

fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.dashboard.data else {
        let text = if app.dashboard.loading { "Loading..." } else { "No data available" };
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8), Constraint::Length(8)])
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let stats = &data.stats;
    stat_card::render(f, cards[0], "Revenue", &format!("${}", stats.revenue.round_dp(2)), Color::Green);
    stat_card::render(f, cards[1], "Staff", &stats.staff_count.to_string(), Color::Cyan);
    stat_card::render(f, cards[2], "Orders", &stats.order_count.to_string(), Color::Yellow);
    stat_card::render(f, cards[3], "Reservations", &stats.reservation_count.to_string(), Color::Magenta);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    chart::render(f, charts[0], "Weekly Sales", &data.sales);
    chart::render(f, charts[1], "Sales by Category", &data.sales_by_category);

    let recent: Vec<ListItem> = data
        .recent_orders
        .iter()
        .map(|o| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("#{:<4} {:<20} ${:>8}  ", o.id, o.customer, o.total.round_dp(2))),
                Span::styled(
                    o.status.label(),
                    Style::default().fg(crate::widgets::tone_color(crate::pages::order_tone(o.status))),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(recent).block(Block::default().borders(Borders::ALL).title(" Recent Orders ")),
        rows[2],
    );
}

fn render_reports(f: &mut Frame, area: Rect, app: &App) {
    let Some(data) = &app.reports.data else {
        let text = if app.reports.loading { "Loading..." } else { "No data available" };
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
        return;
    };
    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    chart::render(f, charts[0], "Monthly Sales", &data.monthly_sales);
    chart::render(f, charts[1], "Category Share (%)", &data.category_share);
}

fn render_login(f: &mut Frame, area: Rect, app: &App) {
    use crate::pages::LoginField;

    let area = crate::widgets::centered_rect(40, 40, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sign in ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let focus_style = |field| {
        if app.login.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Username: ", focus_style(LoginField::Username)),
            Span::raw(app.login.username.value().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", focus_style(LoginField::Password)),
            Span::raw(app.login.masked_password()),
        ]),
        Line::raw(""),
    ];
    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled(
        "Tab switch field  Enter sign in  Esc quit",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(Paragraph::new(lines), inner);

    let (input, row) = match app.login.focus {
        LoginField::Username => (&app.login.username, 0),
        LoginField::Password => (&app.login.password, 1),
    };
    f.set_cursor_position((inner.x + 10 + input.visual_cursor() as u16, inner.y + row));
}
