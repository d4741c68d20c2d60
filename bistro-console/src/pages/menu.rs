//! Menu management page
//!
//! Adds two things on top of [`CrudPage`]: a category filter applied before
//! the table sees the rows, and an availability toggle that updates the row
//! immediately and rolls back if the service call fails.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use shared::models::{MenuCategory, MenuItem, MenuItemForm};
use shared::table::{BadgeTone, Cell, ClickOrigin, Column, DataTable, TableView};

use super::crud::{CrudPage, DynService, Resource};
use crate::event::{CrudEvent, EventSender, PageEvent};
use crate::toast::Toasts;
use shared::AppResult;

impl Resource for MenuItem {
    type Form = MenuItemForm;

    const SINGULAR: &'static str = "Menu item";
    const COLLECTION: &'static str = "menu";

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.item_name.clone()
    }

    fn to_form(&self) -> MenuItemForm {
        MenuItem::to_form(self)
    }

    fn blank_form() -> MenuItemForm {
        MenuItemForm::default()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("Item", "item_name"),
            Column::field("Category", "category"),
            Column::derive("Price", |m: &MenuItem| format!("${}", m.price.round_dp(2))),
            Column::derive("Prep", |m: &MenuItem| format!("{} min", m.preparation_time)),
            Column::derive("Dietary", |m: &MenuItem| m.dietary_labels().join(", ")),
            Column::field("Availability", "availability").with_render(|m: &MenuItem| {
                if m.availability {
                    Cell::badge("Available", BadgeTone::Success)
                } else {
                    Cell::badge("Unavailable", BadgeTone::Danger)
                }
            }),
        ]
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        let dietary = self.dietary_labels();
        vec![
            ("Item", self.item_name.clone()),
            ("Category", self.category.to_string()),
            ("Description", self.description.clone()),
            ("Price", format!("${}", self.price.round_dp(2))),
            ("Preparation", format!("{} min", self.preparation_time)),
            (
                "Dietary",
                if dietary.is_empty() { "-".to_string() } else { dietary.join(", ") },
            ),
            (
                "Availability",
                if self.availability { "Available" } else { "Unavailable" }.to_string(),
            ),
        ]
    }

    fn wrap(event: CrudEvent<Self>) -> PageEvent {
        PageEvent::Menu(event)
    }
}

/// `None` shows every category
pub type CategoryFilter = Option<MenuCategory>;

pub struct MenuPage {
    page: CrudPage<MenuItem>,
    pub category: CategoryFilter,
    /// Rows surviving the category filter, rebuilt whenever rows or filter change
    filtered: Vec<MenuItem>,
}

impl Deref for MenuPage {
    type Target = CrudPage<MenuItem>;

    fn deref(&self) -> &Self::Target {
        &self.page
    }
}

impl DerefMut for MenuPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.page
    }
}

impl MenuPage {
    pub fn new(service: DynService<MenuItem>, events: EventSender) -> Self {
        Self {
            page: CrudPage::new(service, events),
            category: None,
            filtered: Vec::new(),
        }
    }

    /// All, then each category in menu order
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => MenuCategory::ALL.first().copied(),
            Some(current) => MenuCategory::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| MenuCategory::ALL.get(i + 1))
                .copied(),
        };
        self.page.table.state.go_to(1);
        self.page.selected = 0;
        self.refilter();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page.table.state.go_to(1);
        self.refilter();
        self.clamp_selection();
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("All")
    }

    fn refilter(&mut self) {
        self.filtered = match self.category {
            None => self.page.rows.clone(),
            Some(category) => self
                .page
                .rows
                .iter()
                .filter(|m| m.category == category)
                .cloned()
                .collect(),
        };
    }

    /// Table view over the category-filtered rows
    pub fn view(&mut self) -> TableView<'_, MenuItem> {
        self.page.table.view(&self.filtered)
    }

    /// Table and its view over the filtered rows, borrowed together for rendering
    pub fn table_view(&mut self) -> (&DataTable<MenuItem>, TableView<'_, MenuItem>) {
        let view = self.page.table.view(&self.filtered);
        (&self.page.table, view)
    }

    pub fn selected_row(&mut self) -> Option<MenuItem> {
        let selected = self.page.selected;
        let view = self.page.table.view(&self.filtered);
        view.rows.get(selected).map(|r| (*r).clone())
    }

    pub fn select_next(&mut self) {
        let len = self.view().rows.len();
        if len > 0 {
            self.page.selected = (self.page.selected + 1).min(len - 1);
        }
    }

    pub fn next_page(&mut self) {
        let count = self.view().page_count;
        self.page.table.state.next(count);
        self.page.selected = 0;
    }

    pub fn open_selected(&mut self) {
        let selected = self.page.selected;
        let view = self.page.table.view(&self.filtered);
        let clicked = self
            .page
            .table
            .click(&view, selected, ClickOrigin::Row)
            .cloned();
        if let Some(item) = clicked {
            self.page.open_detail(item);
        }
    }

    /// Flip availability locally, then persist it
    pub fn toggle_availability(&mut self, item: &MenuItem) {
        let id = item.id;
        let Some(row) = self.page.rows.iter_mut().find(|m| m.id == id) else {
            return;
        };
        let previous = row.availability;
        row.availability = !previous;
        let mut form = row.to_form();
        form.availability = !previous;
        self.refilter();

        let service = Arc::clone(self.page.service());
        let tx = self.page.events().clone();
        tokio::spawn(async move {
            let result = service.update(id, form).await;
            let _ = tx.send(PageEvent::AvailabilityToggled {
                id,
                previous,
                result,
            });
        });
    }

    pub fn apply(&mut self, event: CrudEvent<MenuItem>, toasts: &mut Toasts) {
        self.page.apply(event, toasts);
        self.refilter();
        self.clamp_selection();
    }

    /// Keep the cursor inside the filtered page
    fn clamp_selection(&mut self) {
        let len = self.view().rows.len();
        self.page.selected = self.page.selected.min(len.saturating_sub(1));
    }

    pub fn apply_toggle(
        &mut self,
        id: i64,
        previous: bool,
        result: AppResult<MenuItem>,
        toasts: &mut Toasts,
    ) {
        match result {
            Ok(item) => {
                let state = if item.availability { "available" } else { "unavailable" };
                toasts.success(format!("{} is now {}", item.item_name, state));
                self.page.replace(item);
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Availability update failed");
                if let Some(row) = self.page.rows.iter_mut().find(|m| m.id == id) {
                    row.availability = previous;
                }
                toasts.error("Failed to update availability");
            }
        }
        self.refilter();
    }
}
