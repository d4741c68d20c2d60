//! Generic CRUD page: one table, one form modal, detail and delete confirm
//!
//! Service calls run on spawned tasks. Their results come back as
//! [`PageEvent`]s and are folded in by [`CrudPage::apply`].

use std::sync::Arc;

use bistro_server::CrudService;
use serde::Serialize;
use shared::table::{ClickOrigin, Column, DataTable, TableOptions, TableView};

use crate::event::{CrudEvent, EventSender, PageEvent};
use crate::forms::{FormFields, FormState};
use crate::toast::Toasts;

/// A record type managed by a [`CrudPage`]
pub trait Resource: Clone + Send + Sync + Serialize + 'static {
    type Form: FormFields + Clone + Send + 'static;

    /// Capitalized singular, e.g. "Staff member"
    const SINGULAR: &'static str;
    /// Noun used in "Failed to load {} data"
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
    fn display_name(&self) -> String;
    fn to_form(&self) -> Self::Form;
    fn blank_form() -> Self::Form;
    fn columns() -> Vec<Column<Self>>;
    /// Label/value pairs for the detail modal
    fn detail(&self) -> Vec<(&'static str, String)>;
    fn wrap(event: CrudEvent<Self>) -> PageEvent;
}

pub type DynService<R> = Arc<dyn CrudService<Record = R, Form = <R as Resource>::Form>>;

pub enum Modal<R: Resource> {
    /// `editing` is `None` for the create flow
    Form { editing: Option<i64>, state: FormState },
    Detail(R),
    ConfirmDelete(R),
}

pub struct CrudPage<R: Resource> {
    service: DynService<R>,
    events: EventSender,
    pub rows: Vec<R>,
    pub loading: bool,
    pub table: DataTable<R>,
    pub modal: Option<Modal<R>>,
    pub is_submitting: bool,
    /// Highlighted row on the current page
    pub selected: usize,
}

impl<R: Resource> CrudPage<R> {
    pub fn new(service: DynService<R>, events: EventSender) -> Self {
        let table = DataTable::new(R::columns()).with_options(TableOptions {
            row_clickable: true,
            ..TableOptions::default()
        });
        Self {
            service,
            events,
            rows: Vec::new(),
            loading: false,
            table,
            modal: None,
            is_submitting: false,
            selected: 0,
        }
    }

    pub fn service(&self) -> &DynService<R> {
        &self.service
    }

    pub fn events(&self) -> &EventSender {
        &self.events
    }

    /// Fetch all rows
    pub fn load(&mut self) {
        self.loading = true;
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = service.list().await;
            let _ = tx.send(R::wrap(CrudEvent::Loaded(result)));
        });
    }

    pub fn view(&mut self) -> TableView<'_, R> {
        self.table.view(&self.rows)
    }

    /// Row under the cursor, as an inline action would see it
    pub fn selected_row(&mut self) -> Option<R> {
        let selected = self.selected;
        let view = self.table.view(&self.rows);
        view.rows.get(selected).map(|r| (*r).clone())
    }

    pub fn select_next(&mut self) {
        let len = self.view().rows.len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.table.state.set_search(term);
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let count = self.view().page_count;
        self.table.state.next(count);
        self.selected = 0;
    }

    pub fn prev_page(&mut self) {
        self.table.state.prev();
        self.selected = 0;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.table.state.go_to(page);
        self.selected = 0;
    }

    pub fn open_create(&mut self) {
        let title = format!("Add {}", R::SINGULAR);
        self.modal = Some(Modal::Form {
            editing: None,
            state: FormState::new(title, &R::blank_form()),
        });
    }

    pub fn open_edit(&mut self, record: &R) {
        let title = format!("Edit {}", R::SINGULAR);
        self.modal = Some(Modal::Form {
            editing: Some(record.id()),
            state: FormState::new(title, &record.to_form()),
        });
    }

    pub fn open_detail(&mut self, record: R) {
        self.modal = Some(Modal::Detail(record));
    }

    pub fn confirm_delete(&mut self, record: R) {
        self.modal = Some(Modal::ConfirmDelete(record));
    }

    /// Row activation; inline action clicks never open the detail view
    pub fn click(&mut self, index: usize, origin: ClickOrigin) {
        let view = self.table.view(&self.rows);
        let clicked = self.table.click(&view, index, origin).cloned();
        if let Some(record) = clicked {
            self.open_detail(record);
        }
    }

    pub fn close_modal(&mut self) {
        if !self.is_submitting {
            self.modal = None;
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.modal {
            Some(Modal::Form { state, .. }) => Some(state),
            _ => None,
        }
    }

    /// Validate the open form and send it; the modal stays open until the
    /// completion arrives. Returns false when nothing was sent.
    pub fn submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        let Some(Modal::Form { editing, state }) = &mut self.modal else {
            return false;
        };
        let Some(form) = state.submit::<R::Form>() else {
            return false;
        };
        let editing = *editing;

        self.is_submitting = true;
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let event = match editing {
                Some(id) => CrudEvent::Updated(service.update(id, form).await),
                None => CrudEvent::Created(service.create(form).await),
            };
            let _ = tx.send(R::wrap(event));
        });
        true
    }

    /// Delete the record held by the confirm modal
    pub fn delete(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        let Some(Modal::ConfirmDelete(record)) = &self.modal else {
            return false;
        };
        let id = record.id();

        self.is_submitting = true;
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = service.delete(id).await;
            let _ = tx.send(R::wrap(CrudEvent::Deleted(id, result)));
        });
        true
    }

    /// Fold a completion into local state
    pub fn apply(&mut self, event: CrudEvent<R>, toasts: &mut Toasts) {
        let singular = R::SINGULAR;
        let lower = singular.to_lowercase();
        match event {
            CrudEvent::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(rows) => self.rows = rows,
                    Err(e) => {
                        tracing::error!(error = %e, "Loading {} failed", R::COLLECTION);
                        toasts.error(format!("Failed to load {} data", R::COLLECTION));
                    }
                }
            }
            CrudEvent::Created(result) => {
                self.is_submitting = false;
                match result {
                    Ok(record) => {
                        self.rows.push(record);
                        self.modal = None;
                        toasts.success(format!("{singular} created successfully"));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Create failed");
                        toasts.error(format!("Failed to create {lower}"));
                    }
                }
            }
            CrudEvent::Updated(result) => {
                self.is_submitting = false;
                match result {
                    Ok(record) => {
                        self.replace(record);
                        self.modal = None;
                        toasts.success(format!("{singular} updated successfully"));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Update failed");
                        toasts.error(format!("Failed to update {lower}"));
                    }
                }
            }
            CrudEvent::Deleted(id, result) => {
                self.is_submitting = false;
                match result {
                    Ok(_) => {
                        self.rows.retain(|r| r.id() != id);
                        self.modal = None;
                        self.clamp_selection();
                        toasts.success(format!("{singular} deleted successfully"));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, id, "Delete failed");
                        toasts.error(format!("Failed to delete {lower}"));
                    }
                }
            }
        }
    }

    /// Swap in `record` by id, keeping its position
    pub fn replace(&mut self, record: R) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == record.id()) {
            *row = record;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view().rows.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
