//! Bar charts over [`ChartData`] series

use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use shared::models::ChartData;

const SERIES_COLORS: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Green, Color::Yellow];

/// One bar group per label, one bar per dataset
pub fn render(f: &mut Frame, area: Rect, title: &str, data: &ChartData) {
    let groups: Vec<BarGroup> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let bars: Vec<Bar> = data
                .datasets
                .iter()
                .enumerate()
                .map(|(series, dataset)| {
                    let value = dataset.data.get(i).copied().unwrap_or_default();
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .style(Style::default().fg(SERIES_COLORS[series % SERIES_COLORS.len()]))
                })
                .collect();
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars)
        })
        .collect();

    let legend: Vec<String> = data.datasets.iter().map(|d| d.label.clone()).collect();
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ({}) ", legend.join(" / "))),
        )
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);
    for group in groups {
        chart = chart.data(group);
    }
    f.render_widget(chart, area);
}
