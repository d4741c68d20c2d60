//! Page behaviour against real (latency-free) services

use std::sync::Arc;

use async_trait::async_trait;
use bistro_console::event::{self, EventReceiver, PageEvent};
use bistro_console::pages::{CrudPage, MenuPage, Modal, StaffPage};
use bistro_console::toast::{ToastKind, Toasts};
use bistro_console::{App, Route};
use bistro_server::services::MenuService;
use bistro_server::utils::time::FixedClock;
use bistro_server::{Config, CrudService, Database, ServerState};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use shared::models::{MenuItem, MenuItemForm, StaffMember};
use shared::table::ClickOrigin;
use shared::{AppError, AppResult};

fn state(db: Database) -> ServerState {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    ServerState::new(Config::with_overrides(0, false), db, Arc::new(FixedClock(today)))
}

async fn next(rx: &mut EventReceiver) -> PageEvent {
    rx.recv().await.expect("event channel closed")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Menu service whose updates always fail
struct FailingUpdates(MenuService);

#[async_trait]
impl CrudService for FailingUpdates {
    type Record = MenuItem;
    type Form = MenuItemForm;

    async fn list(&self) -> AppResult<Vec<MenuItem>> {
        self.0.list().await
    }

    async fn get(&self, id: i64) -> AppResult<Option<MenuItem>> {
        self.0.get(id).await
    }

    async fn create(&self, form: MenuItemForm) -> AppResult<MenuItem> {
        self.0.create(form).await
    }

    async fn update(&self, _id: i64, _form: MenuItemForm) -> AppResult<MenuItem> {
        Err(AppError::store("backend unavailable"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.0.delete(id).await
    }
}

fn staff_page(state: &ServerState) -> (StaffPage, EventReceiver) {
    let (tx, rx) = event::channel();
    (CrudPage::new(Arc::new(state.staff.clone()), tx), rx)
}

#[tokio::test]
async fn test_staff_load_create_update_delete() {
    let state = state(Database::seeded());
    let (mut page, mut rx) = staff_page(&state);
    let mut toasts = Toasts::default();

    page.load();
    assert!(page.loading);
    let PageEvent::Staff(e) = next(&mut rx).await else { panic!("expected staff event") };
    page.apply(e, &mut toasts);
    assert!(!page.loading);
    assert_eq!(page.rows.len(), 12);

    // create
    page.open_create();
    let form = page.form_mut().unwrap();
    form.set_text("first_name", "Ana");
    form.set_text("last_name", "Silva");
    form.set_text("date_of_birth", "2000-06-01");
    form.set_text("phone", "555-0199");
    form.set_text("email", "ana@bistro.test");
    form.set_text("position", "Line Cook");
    form.set_text("salary", "32000");
    assert!(page.submit());
    assert!(page.is_submitting);
    assert!(!page.submit(), "second submit while in flight is ignored");

    let PageEvent::Staff(e) = next(&mut rx).await else { panic!("expected staff event") };
    page.apply(e, &mut toasts);
    assert!(!page.is_submitting);
    assert!(page.modal.is_none());
    assert_eq!(page.rows.len(), 13);
    let created: StaffMember = page.rows.last().cloned().unwrap();
    assert_eq!(created.id, 13);
    assert_eq!(created.age, 24);
    assert_eq!(toasts.last().unwrap().message, "Staff member created successfully");

    // update keeps position and id
    page.open_edit(&created);
    page.form_mut().unwrap().set_text("position", "Sous Chef");
    assert!(page.submit());
    let PageEvent::Staff(e) = next(&mut rx).await else { panic!("expected staff event") };
    page.apply(e, &mut toasts);
    assert_eq!(page.rows[12].position, "Sous Chef");
    assert_eq!(page.rows[12].id, 13);
    assert_eq!(toasts.last().unwrap().message, "Staff member updated successfully");

    // delete
    page.confirm_delete(page.rows[12].clone());
    assert!(page.delete());
    let PageEvent::Staff(e) = next(&mut rx).await else { panic!("expected staff event") };
    page.apply(e, &mut toasts);
    assert_eq!(page.rows.len(), 12);
    assert_eq!(toasts.last().unwrap().message, "Staff member deleted successfully");
}

#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let state = state(Database::seeded());
    let (mut page, _rx) = staff_page(&state);

    page.open_create();
    page.form_mut().unwrap().set_text("salary", "-5");
    assert!(!page.submit());
    assert!(!page.is_submitting);
    let Some(Modal::Form { state, .. }) = &page.modal else { panic!("form closed") };
    assert!(state.errors.contains_key("first_name"));
}

#[tokio::test]
async fn test_action_click_does_not_open_detail() {
    let state = state(Database::seeded());
    let (mut page, mut rx) = staff_page(&state);
    let mut toasts = Toasts::default();
    page.load();
    let PageEvent::Staff(e) = next(&mut rx).await else { panic!("expected staff event") };
    page.apply(e, &mut toasts);

    page.click(0, ClickOrigin::Action);
    assert!(page.modal.is_none());
    page.click(0, ClickOrigin::Row);
    assert!(matches!(page.modal, Some(Modal::Detail(ref s)) if s.id == 1));
}

#[tokio::test]
async fn test_menu_availability_toggle_success() {
    let state = state(Database::seeded());
    let (tx, mut rx) = event::channel();
    let mut page = MenuPage::new(Arc::new(state.menu.clone()), tx);
    let mut toasts = Toasts::default();

    page.load();
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);

    let item = page.rows[0].clone();
    assert!(item.availability);
    page.toggle_availability(&item);
    assert!(!page.rows[0].availability, "flip is applied before the call returns");

    let PageEvent::AvailabilityToggled { id, previous, result } = next(&mut rx).await else {
        panic!("expected toggle event")
    };
    page.apply_toggle(id, previous, result, &mut toasts);
    assert!(!page.rows[0].availability);
    assert_eq!(
        toasts.last().unwrap().message,
        format!("{} is now unavailable", item.item_name)
    );
    assert_eq!(state.db.menu.get(item.id).map(|m| m.availability), Some(false));
}

#[tokio::test]
async fn test_menu_availability_rolls_back_on_failure() {
    let state = state(Database::seeded());
    let (tx, mut rx) = event::channel();
    let mut page = MenuPage::new(Arc::new(FailingUpdates(state.menu.clone())), tx);
    let mut toasts = Toasts::default();

    page.load();
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);

    let item = page.rows[1].clone();
    page.toggle_availability(&item);
    assert_ne!(page.rows[1].availability, item.availability);

    let PageEvent::AvailabilityToggled { id, previous, result } = next(&mut rx).await else {
        panic!("expected toggle event")
    };
    page.apply_toggle(id, previous, result, &mut toasts);
    assert_eq!(page.rows[1].availability, item.availability);
    let toast = toasts.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Failed to update availability");
}

#[tokio::test]
async fn test_menu_category_filter() {
    let state = state(Database::seeded());
    let (tx, mut rx) = event::channel();
    let mut page = MenuPage::new(Arc::new(state.menu.clone()), tx);
    let mut toasts = Toasts::default();

    page.load();
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);
    assert_eq!(page.view().filtered_len, 12);

    page.set_category(Some(shared::models::MenuCategory::Dessert));
    assert_eq!(page.category_label(), "Dessert");
    assert_eq!(page.view().filtered_len, 2);

    page.set_category(None);
    assert_eq!(page.view().filtered_len, 12);
}

#[tokio::test]
async fn test_delete_under_category_filter_keeps_cursor_on_a_row() {
    let state = state(Database::seeded());
    let (tx, mut rx) = event::channel();
    let mut page = MenuPage::new(Arc::new(state.menu.clone()), tx);
    let mut toasts = Toasts::default();

    page.load();
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);

    page.set_category(Some(shared::models::MenuCategory::Dessert));
    page.select_next();
    assert_eq!(page.selected, 1);
    let last_dessert = page.selected_row().unwrap();

    page.confirm_delete(last_dessert.clone());
    assert!(page.delete());
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);

    assert_eq!(page.view().filtered_len, 1);
    assert_eq!(page.selected, 0);
    let remaining = page.selected_row().unwrap();
    assert_ne!(remaining.id, last_dessert.id);
    assert_eq!(remaining.category, shared::models::MenuCategory::Dessert);
}

#[tokio::test]
async fn test_failed_load_shows_error_toast() {
    struct Down;

    #[async_trait]
    impl CrudService for Down {
        type Record = MenuItem;
        type Form = MenuItemForm;

        async fn list(&self) -> AppResult<Vec<MenuItem>> {
            Err(AppError::store("down"))
        }
        async fn get(&self, _id: i64) -> AppResult<Option<MenuItem>> {
            Err(AppError::store("down"))
        }
        async fn create(&self, _form: MenuItemForm) -> AppResult<MenuItem> {
            Err(AppError::store("down"))
        }
        async fn update(&self, _id: i64, _form: MenuItemForm) -> AppResult<MenuItem> {
            Err(AppError::store("down"))
        }
        async fn delete(&self, _id: i64) -> AppResult<bool> {
            Err(AppError::store("down"))
        }
    }

    let (tx, mut rx) = event::channel();
    let mut page = MenuPage::new(Arc::new(Down), tx);
    let mut toasts = Toasts::default();
    page.load();
    let PageEvent::Menu(e) = next(&mut rx).await else { panic!("expected menu event") };
    page.apply(e, &mut toasts);
    assert!(!page.loading);
    assert_eq!(toasts.last().unwrap().message, "Failed to load menu data");
}

#[tokio::test]
async fn test_login_redirects_back_to_origin() {
    let state = state(Database::seeded());
    let (tx, mut rx) = event::channel();
    let mut app = App::new(&state, tx);

    app.go(Route::Orders);
    assert_eq!(app.route(), Route::Login);

    for c in "admin".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Tab));
    for c in "pw".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), Route::Orders);

    let event = next(&mut rx).await;
    app.apply(event);
    assert_eq!(app.orders.rows.len(), 2);

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.route(), Route::Staff);
}

#[tokio::test]
async fn test_empty_table_renders_placeholder() {
    let state = state(Database::empty());
    let (tx, mut rx) = event::channel();
    let mut app = App::new(&state, tx);
    app.session.login("admin", "pw").unwrap();
    app.show_logs = false;
    app.go(Route::Staff);
    let event = next(&mut rx).await;
    app.apply(event);

    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal
        .draw(|f| bistro_console::ui::ui(f, &mut app))
        .unwrap();
    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();
    assert!(screen.contains("No data available"));
    assert!(screen.contains("Staff Management"));
}
