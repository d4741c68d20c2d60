//! Route table and navigation
//!
//! Every route except `/login` needs a session. Unauthenticated visits are
//! redirected to `/login` and the origin is remembered so a successful login
//! returns there. Unknown paths fall back to the dashboard.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Staff,
    Menu,
    Orders,
    Reservations,
    Inventory,
    Reports,
    Login,
}

impl Route {
    /// Sidebar entries in display order
    pub const NAV: [Route; 7] = [
        Route::Dashboard,
        Route::Staff,
        Route::Menu,
        Route::Orders,
        Route::Reservations,
        Route::Inventory,
        Route::Reports,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Staff => "/staff",
            Self::Menu => "/menu",
            Self::Orders => "/orders",
            Self::Reservations => "/reservations",
            Self::Inventory => "/inventory",
            Self::Reports => "/reports",
            Self::Login => "/login",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Staff => "Staff Management",
            Self::Menu => "Menu Management",
            Self::Orders => "Orders",
            Self::Reservations => "Reservations",
            Self::Inventory => "Inventory",
            Self::Reports => "Reports",
            Self::Login => "Login",
        }
    }

    /// Match a path; unknown paths resolve to the dashboard (catch-all)
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/staff" => Self::Staff,
            "/menu" => Self::Menu,
            "/orders" => Self::Orders,
            "/reservations" => Self::Reservations,
            "/inventory" => Self::Inventory,
            "/reports" => Self::Reports,
            "/login" => Self::Login,
            _ => Self::Dashboard,
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Current route plus the origin to return to after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    return_to: Option<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Route::Login,
            return_to: None,
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn return_to(&self) -> Option<Route> {
        self.return_to
    }

    /// Resolve `path` against `session` and move there; returns the route shown
    pub fn navigate(&mut self, path: &str, session: &Session) -> Route {
        self.go(Route::from_path(path), session)
    }

    pub fn go(&mut self, target: Route, session: &Session) -> Route {
        self.current = match (target.is_protected(), session.is_authenticated()) {
            (true, false) => {
                self.return_to = Some(target);
                Route::Login
            }
            (false, true) => Route::Dashboard,
            _ => target,
        };
        self.current
    }

    /// Destination after a successful login (origin, else dashboard)
    pub fn after_login(&mut self, session: &Session) -> Route {
        let target = self.return_to.take().unwrap_or(Route::Dashboard);
        self.go(target, session)
    }
}
