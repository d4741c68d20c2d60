//! Application state and input handling

use std::sync::Arc;
use std::time::Instant;

use bistro_server::ServerState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shared::models::{MenuItem, StaffMember};
use shared::table::ClickOrigin;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::event::{EventSender, PageEvent};
use crate::pages::{
    CrudPage, DashboardPage, DynService, InventoryPage, LoginPage, MenuPage, Modal, OrdersPage,
    ReportsPage, ReservationsPage, Resource, StaffPage,
};
use crate::route::{Navigator, Route};
use crate::session::Session;
use crate::toast::Toasts;

pub struct App {
    pub session: Session,
    pub navigator: Navigator,
    pub toasts: Toasts,
    pub login: LoginPage,
    pub dashboard: DashboardPage,
    pub staff: StaffPage,
    pub menu: MenuPage,
    pub orders: OrdersPage,
    pub reservations: ReservationsPage,
    pub inventory: InventoryPage,
    pub reports: ReportsPage,
    /// Typing goes to the table search box
    pub searching: bool,
    pub show_logs: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: &ServerState, events: EventSender) -> Self {
        let staff: DynService<StaffMember> = Arc::new(state.staff.clone());
        let menu: DynService<MenuItem> = Arc::new(state.menu.clone());
        Self::with_services(state, staff, menu, events)
    }

    /// Same as [`App::new`] with the CRUD services supplied by the caller
    pub fn with_services(
        state: &ServerState,
        staff: DynService<StaffMember>,
        menu: DynService<MenuItem>,
        events: EventSender,
    ) -> Self {
        Self {
            session: Session::default(),
            navigator: Navigator::default(),
            toasts: Toasts::default(),
            login: LoginPage::default(),
            dashboard: DashboardPage::new(state.dashboard.clone(), events.clone()),
            staff: CrudPage::new(staff, events.clone()),
            menu: MenuPage::new(menu, events.clone()),
            orders: OrdersPage::new(state.orders.clone(), events.clone()),
            reservations: ReservationsPage::new(state.reservations.clone(), events.clone()),
            inventory: InventoryPage::new(state.inventory.clone(), events.clone()),
            reports: ReportsPage::new(state.dashboard.clone(), events),
            searching: false,
            show_logs: true,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Navigate and mount the resulting page
    pub fn go(&mut self, target: Route) {
        let shown = self.navigator.go(target, &self.session);
        self.searching = false;
        self.mount(shown);
    }

    /// Start the page's initial load
    fn mount(&mut self, route: Route) {
        tracing::debug!(path = route.path(), "Mount");
        match route {
            Route::Dashboard => self.dashboard.load(),
            Route::Staff => self.staff.load(),
            Route::Menu => self.menu.load(),
            Route::Orders => self.orders.load(),
            Route::Reservations => self.reservations.load(),
            Route::Inventory => self.inventory.load(),
            Route::Reports => self.reports.load(),
            Route::Login => {}
        }
    }

    /// Fold a service completion into the matching page
    pub fn apply(&mut self, event: PageEvent) {
        let toasts = &mut self.toasts;
        match event {
            PageEvent::Staff(e) => self.staff.apply(e, toasts),
            PageEvent::Menu(e) => self.menu.apply(e, toasts),
            PageEvent::AvailabilityToggled {
                id,
                previous,
                result,
            } => self.menu.apply_toggle(id, previous, result, toasts),
            PageEvent::Orders(r) => self.orders.apply(r, toasts),
            PageEvent::Reservations(r) => self.reservations.apply(r, toasts),
            PageEvent::Inventory(r) => self.inventory.apply(r, toasts),
            PageEvent::Dashboard(r) => self.dashboard.apply(r, toasts),
            PageEvent::Reports(r) => self.reports.apply(r, toasts),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    // ========== Input ==========

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.route() {
            Route::Login => self.handle_login_key(key),
            Route::Staff if self.staff.modal.is_some() => handle_modal_key(&mut self.staff, key),
            Route::Menu if self.menu.modal.is_some() => handle_modal_key(&mut *self.menu, key),
            _ if self.searching => self.handle_search_key(key),
            _ => self.handle_normal_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus()
            }
            KeyCode::Enter => {
                if self.login.submit(&mut self.session).is_ok() {
                    let shown = self.navigator.after_login(&self.session);
                    self.toasts.info(format!("Welcome, {}", self.session.user().unwrap_or_default()));
                    self.mount(shown);
                }
            }
            _ => self.login.handle_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let current = self.search_term();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.searching = false,
            KeyCode::Backspace => {
                let mut term = current;
                term.pop();
                self.set_search(term);
            }
            KeyCode::Char(c) => {
                let mut term = current;
                term.push(c);
                self.set_search(term);
            }
            _ => {}
        }
    }

    fn search_term(&self) -> String {
        match self.route() {
            Route::Staff => self.staff.table.state.search().to_string(),
            Route::Menu => self.menu.table.state.search().to_string(),
            Route::Orders => self.orders.table.state.search().to_string(),
            Route::Reservations => self.reservations.table.state.search().to_string(),
            Route::Inventory => self.inventory.table.state.search().to_string(),
            _ => String::new(),
        }
    }

    fn set_search(&mut self, term: String) {
        match self.route() {
            Route::Staff => self.staff.set_search(term),
            Route::Menu => self.menu.set_search(term),
            Route::Orders => self.orders.table.state.set_search(term),
            Route::Reservations => self.reservations.table.state.set_search(term),
            Route::Inventory => self.inventory.table.state.set_search(term),
            _ => {}
        }
    }

    fn has_table(&self) -> bool {
        matches!(
            self.route(),
            Route::Staff | Route::Menu | Route::Orders | Route::Reservations | Route::Inventory
        )
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('L') => {
                self.session.logout();
                self.go(Route::Login);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                if let Some(route) = Route::NAV.get(index) {
                    self.go(*route);
                }
            }
            KeyCode::Char('r') => self.mount(self.route()),
            KeyCode::Char('/') if self.has_table() => self.searching = true,
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => match self.route() {
                Route::Staff => handle_crud_key(&mut self.staff, key),
                Route::Menu => self.handle_menu_key(key),
                Route::Orders => handle_pager_key(&mut self.orders.table.state, key),
                Route::Reservations => handle_pager_key(&mut self.reservations.table.state, key),
                Route::Inventory => handle_pager_key(&mut self.inventory.table.state, key),
                _ => {}
            },
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => {
                if let Some(item) = self.menu.selected_row() {
                    self.menu.toggle_availability(&item);
                }
            }
            KeyCode::Char('c') => self.menu.cycle_category(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.select_next(),
            KeyCode::Right | KeyCode::Char(']') => self.menu.next_page(),
            KeyCode::Enter => self.menu.open_selected(),
            KeyCode::Char('e') => {
                if let Some(item) = self.menu.selected_row() {
                    self.menu.open_edit(&item);
                }
            }
            KeyCode::Char('d') => {
                if let Some(item) = self.menu.selected_row() {
                    self.menu.confirm_delete(item);
                }
            }
            _ => handle_crud_key(&mut *self.menu, key),
        }
    }
}

fn handle_pager_key(state: &mut shared::table::TableState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('[') => state.prev(),
        // upper bound is clamped by the next view
        KeyCode::Right | KeyCode::Char(']') => state.go_to(state.page() + 1),
        _ => {}
    }
}

/// Table navigation and row actions shared by the CRUD pages
fn handle_crud_key<R: Resource>(page: &mut CrudPage<R>, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => page.select_next(),
        KeyCode::Left | KeyCode::Char('[') => page.prev_page(),
        KeyCode::Right | KeyCode::Char(']') => page.next_page(),
        KeyCode::Home => page.go_to_page(1),
        KeyCode::Char('n') => page.open_create(),
        KeyCode::Enter => page.click(page.selected, ClickOrigin::Row),
        KeyCode::Char('e') => {
            if let Some(record) = page.selected_row() {
                page.open_edit(&record);
            }
        }
        KeyCode::Char('d') => {
            if let Some(record) = page.selected_row() {
                page.confirm_delete(record);
            }
        }
        _ => {}
    }
}

fn handle_modal_key<R: Resource>(page: &mut CrudPage<R>, key: KeyEvent) {
    match &page.modal {
        Some(Modal::Form { .. }) => match key.code {
            KeyCode::Esc => page.close_modal(),
            KeyCode::Enter => {
                page.submit();
            }
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = page.form_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = page.form_mut() {
                    form.focus_prev();
                }
            }
            _ if !page.is_submitting => {
                if let Some(form) = page.form_mut() {
                    form.handle_key(key);
                }
            }
            _ => {}
        },
        Some(Modal::Detail(record)) => {
            let record = record.clone();
            match key.code {
                KeyCode::Esc | KeyCode::Enter => page.close_modal(),
                KeyCode::Char('e') => page.open_edit(&record),
                KeyCode::Char('d') => page.confirm_delete(record),
                _ => {}
            }
        }
        Some(Modal::ConfirmDelete(_)) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                page.delete();
            }
            KeyCode::Char('n') | KeyCode::Esc => page.close_modal(),
            _ => {}
        },
        None => {}
    }
}

// ========== Loop ==========

/// Draw, poll input for one tick, then drain finished service calls
pub async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App,
    rx: &mut crate::event::EventReceiver,
    tick: std::time::Duration,
) -> std::io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    loop {
        terminal.draw(|f| crate::ui::ui(f, app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
        // let spawned tasks make progress between polls
        tokio::task::yield_now().await;
    }
}
