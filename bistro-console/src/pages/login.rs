//! Login page

use crossterm::event::{Event, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::session::{LoginError, Session};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginPage {
    pub username: Input,
    pub password: Input,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginPage {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let input = match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        };
        input.handle_event(&Event::Key(key));
        self.error = None;
    }

    /// Masked password for display
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.value().chars().count())
    }

    pub fn submit(&mut self, session: &mut Session) -> Result<(), LoginError> {
        match session.login(self.username.value(), self.password.value()) {
            Ok(()) => {
                self.password.reset();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
