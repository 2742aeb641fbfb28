//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use login_pad::config::Locale;
use login_pad::controller::LoginController;
use login_pad::ui::app::App;

pub fn controller() -> LoginController {
    LoginController::new(Locale::Zh)
}

/// Controller already past the login screen.
pub fn logged_in() -> LoginController {
    let mut controller = controller();
    controller.set_username("test");
    controller.set_password("123");
    controller
        .login()
        .expect("valid credentials should log in");
    controller
}

pub fn make_app() -> App {
    App::new(controller())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        login_pad::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}
