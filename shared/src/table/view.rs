//! Table state and the computed view

use serde::Serialize;

use super::column::{Cell, Column};
use super::filter::{filter_rows, row_fields};
use super::pagination::{PAGE_SIZE, PageButton, clamp_page, page_buttons, page_count, page_slice};

/// Placeholder shown when no row survives the search
pub const EMPTY_PLACEHOLDER: &str = "No data available";

/// Table display options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub title: Option<String>,
    pub searchable: bool,
    pub pagination: bool,
    /// Whether clicking a row reports it to the caller
    pub row_clickable: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: None,
            searchable: true,
            pagination: true,
            row_clickable: false,
        }
    }
}

/// Where a click landed inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Anywhere on the row body
    Row,
    /// An inline action button, which stops propagation to the row
    Action,
}

/// Mutable table state: search term and current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search: String,
    page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl TableState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search term; always returns to page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Previous page, saturating at 1
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Next page, saturating at `page_count`
    pub fn next(&mut self, page_count: usize) {
        self.page = clamp_page(self.page + 1, page_count);
    }
}

/// Searchable, paginated table over rows of `T`
pub struct DataTable<T> {
    pub columns: Vec<Column<T>>,
    pub options: TableOptions,
    pub state: TableState,
}

impl<T: Serialize> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            options: TableOptions::default(),
            state: TableState::default(),
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Compute the view for `rows` and write back the clamped page
    pub fn view<'a>(&mut self, rows: &'a [T]) -> TableView<'a, T> {
        let view = TableView::build(rows, &self.state, &self.options);
        self.state.page = view.page;
        view
    }

    /// Resolve a click on the `index`-th visible row.
    ///
    /// Returns the row when rows are clickable and the click was not stopped
    /// by an inline action.
    pub fn click<'a>(&self, view: &TableView<'a, T>, index: usize, origin: ClickOrigin) -> Option<&'a T> {
        if !self.options.row_clickable || origin == ClickOrigin::Action {
            return None;
        }
        view.rows.get(index).copied()
    }

    /// Cells of the visible rows, one `Vec<Cell>` per row
    pub fn cells(&self, view: &TableView<'_, T>) -> Vec<Vec<Cell>> {
        view.rows
            .iter()
            .map(|row| {
                let fields = row_fields(*row);
                self.columns.iter().map(|c| c.cell(row, &fields)).collect()
            })
            .collect()
    }

    /// Step forward one page
    pub fn next_page(&mut self, view: &TableView<'_, T>) {
        self.state.next(view.page_count);
    }
}

/// A computed table view over borrowed rows
#[derive(Debug)]
pub struct TableView<'a, T> {
    /// Rows on the current page (all filtered rows when pagination is off)
    pub rows: Vec<&'a T>,
    pub filtered_len: usize,
    pub page: usize,
    pub page_count: usize,
    pub buttons: Vec<PageButton>,
}

impl<'a, T: Serialize> TableView<'a, T> {
    pub fn build(rows: &'a [T], state: &TableState, options: &TableOptions) -> Self {
        let term = if options.searchable { state.search() } else { "" };
        let filtered = filter_rows(rows, term);
        let filtered_len = filtered.len();
        let page_count = page_count(filtered_len);
        let page = clamp_page(state.page(), page_count);

        let (visible, buttons) = if options.pagination {
            (page_slice(&filtered, page).to_vec(), page_buttons(page, page_count))
        } else {
            (filtered, Vec::new())
        };

        Self {
            rows: visible,
            filtered_len,
            page,
            page_count,
            buttons,
        }
    }
}

impl<T> TableView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.filtered_len == 0
    }

    pub fn prev_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page >= self.page_count
    }

    pub fn pager_visible(&self) -> bool {
        !self.buttons.is_empty() && self.page_count > 1
    }

    /// `(first, last, total)` entry numbers of the current page
    pub fn range(&self) -> (usize, usize, usize) {
        if self.filtered_len == 0 {
            return (0, 0, 0);
        }
        let first = (self.page - 1) * PAGE_SIZE + 1;
        let last = (self.page * PAGE_SIZE).min(self.filtered_len);
        (first, last, self.filtered_len)
    }

    /// "Showing a to b of n entries"
    pub fn summary(&self) -> String {
        let (first, last, total) = self.range();
        format!("Showing {first} to {last} of {total} entries")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Column};

    #[derive(Debug, Serialize, PartialEq)]
    struct Row {
        id: usize,
        name: String,
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: if id % 2 == 0 { format!("even-{id}") } else { format!("odd-{id}") },
            })
            .collect()
    }

    fn table() -> DataTable<Row> {
        DataTable::new(vec![
            Column::field("ID", "id"),
            Column::field("Name", "name"),
            Column::derive("Tag", |r: &Row| format!("#{}", r.id)),
        ])
    }

    #[test]
    fn test_twenty_three_rows_page_two() {
        let data = rows(23);
        let mut t = table();
        t.state.go_to(2);
        let view = t.view(&data);
        assert_eq!(view.page_count, 3);
        assert_eq!(
            view.buttons,
            vec![PageButton::Page(1), PageButton::Page(2), PageButton::Page(3)]
        );
        assert_eq!(view.rows.first().map(|r| r.id), Some(11));
        assert_eq!(view.summary(), "Showing 11 to 20 of 23 entries");
        assert!(view.pager_visible());
        assert!(!view.prev_disabled());
        assert!(!view.next_disabled());
    }

    #[test]
    fn test_search_resets_page_and_filters() {
        let data = rows(23);
        let mut t = table();
        t.state.go_to(3);
        t.state.set_search("EVEN");
        assert_eq!(t.state.page(), 1);
        let view = t.view(&data);
        assert_eq!(view.filtered_len, 11);
        assert!(view.rows.iter().all(|r| r.name.starts_with("even")));
    }

    #[test]
    fn test_page_is_clamped_when_results_shrink() {
        let data = rows(40);
        let mut t = table();
        t.state.go_to(4);
        // the collection shrank underneath the stored page
        let view = t.view(&data[..12]);
        assert_eq!(view.page, 2);
        assert_eq!(t.state.page(), 2);
        assert!(view.next_disabled());
    }

    #[test]
    fn test_empty_result() {
        let data = rows(5);
        let mut t = table();
        t.state.set_search("nothing-matches");
        let view = t.view(&data);
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert!(!view.pager_visible());
        assert_eq!(view.range(), (0, 0, 0));
    }

    #[test]
    fn test_single_page_hides_pager() {
        let data = rows(10);
        let mut t = table();
        let view = t.view(&data);
        assert_eq!(view.page_count, 1);
        assert!(!view.pager_visible());
        assert!(view.prev_disabled());
        assert!(view.next_disabled());
    }

    #[test]
    fn test_pagination_off_shows_everything() {
        let data = rows(25);
        let mut t = table().with_options(TableOptions {
            pagination: false,
            ..TableOptions::default()
        });
        let view = t.view(&data);
        assert_eq!(view.rows.len(), 25);
        assert!(!view.pager_visible());
    }

    #[test]
    fn test_unsearchable_ignores_term() {
        let data = rows(5);
        let mut t = table().with_options(TableOptions {
            searchable: false,
            ..TableOptions::default()
        });
        t.state.set_search("odd");
        assert_eq!(t.view(&data).filtered_len, 5);
    }

    #[test]
    fn test_navigation_saturates() {
        let data = rows(23);
        let mut t = table();
        t.state.prev();
        assert_eq!(t.state.page(), 1);
        for _ in 0..5 {
            let view = t.view(&data);
            t.next_page(&view);
        }
        assert_eq!(t.state.page(), 3);
    }

    #[test]
    fn test_row_click_respects_propagation() {
        let data = rows(3);
        let mut t = table().with_options(TableOptions {
            row_clickable: true,
            ..TableOptions::default()
        });
        let view = t.view(&data);
        assert_eq!(t.click(&view, 1, ClickOrigin::Row).map(|r| r.id), Some(2));
        assert!(t.click(&view, 1, ClickOrigin::Action).is_none());
        assert!(t.click(&view, 9, ClickOrigin::Row).is_none());

        let mut plain = table();
        let view = plain.view(&data);
        assert!(plain.click(&view, 0, ClickOrigin::Row).is_none());
    }

    #[test]
    fn test_cells_follow_columns() {
        let data = rows(1);
        let mut t = table();
        let view = t.view(&data);
        let cells = t.cells(&view);
        assert_eq!(
            cells,
            vec![vec![Cell::text("1"), Cell::text("odd-1"), Cell::text("#1")]]
        );
        assert_eq!(t.headers(), vec!["ID", "Name", "Tag"]);
    }
}
