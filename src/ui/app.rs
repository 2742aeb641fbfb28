use crate::controller::{LoginController, Screen};
use crate::ui::labels::Labels;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Focusable widgets across both screens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Username,
    Password,
    LoginButton,
    ClickButton,
    ResetButton,
    LogoutButton,
}

const LOGIN_ORDER: [Focus; 3] = [Focus::Username, Focus::Password, Focus::LoginButton];
const HOME_ORDER: [Focus; 3] = [Focus::ClickButton, Focus::ResetButton, Focus::LogoutButton];

fn focus_order(screen: Screen) -> &'static [Focus] {
    match screen {
        Screen::Login => &LOGIN_ORDER,
        Screen::Home => &HOME_ORDER,
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Text cursor blink phase, flipped on every tick.
    cursor_on: bool,
    controller: LoginController,
}

impl App {
    pub fn new(controller: LoginController) -> Self {
        let focus = focus_order(controller.screen())[0];
        Self {
            should_quit: false,
            focus,
            cursor_on: true,
            controller,
        }
    }

    pub fn controller(&self) -> &LoginController {
        &self.controller
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_locale(self.controller.locale())
    }

    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor_on(&self) -> bool {
        self.cursor_on
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.cursor_on = !self.cursor_on;
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let order = focus_order(self.screen());
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = order[next];
        self.cursor_on = true;
    }

    /// Keys that edit or activate the focused widget.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => self.edit_focused(|text| {
                text.pop();
            }),
            KeyCode::Char(ch)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_focused(|text| text.push(ch));
            }
            _ => {}
        }
    }

    /// Appends pasted text to the focused field. Line breaks are dropped.
    pub fn on_paste(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        if !clean.is_empty() {
            self.edit_focused(|field| field.push_str(&clean));
        }
    }

    /// Enter: submit from the form fields, press a focused button.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Username | Focus::Password | Focus::LoginButton => {
                let _ = self.controller.login();
            }
            Focus::ClickButton => self.controller.increment_click(),
            Focus::ResetButton => self.controller.reset_count(),
            Focus::LogoutButton => self.controller.logout(),
        }
        self.sync_focus();
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let session = self.controller.session();
        match self.focus {
            Focus::Username => {
                let mut text = session.username.clone();
                edit(&mut text);
                self.controller.set_username(text);
            }
            Focus::Password => {
                let mut text = session.password.clone();
                edit(&mut text);
                self.controller.set_password(text);
            }
            _ => {}
        }
        self.cursor_on = true;
    }

    /// Moves focus to the first widget when the screen changed under it.
    fn sync_focus(&mut self) {
        let order = focus_order(self.screen());
        if !order.contains(&self.focus) {
            tracing::debug!(screen = ?self.screen(), "Screen changed");
            self.focus = order[0];
        }
    }
}
