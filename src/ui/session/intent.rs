//! Intents for the login session.

use crate::config::Locale;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    /// Username field edited. Clears any pending error.
    SetUsername(String),

    /// Password field edited. Clears any pending error.
    SetPassword(String),

    /// Login button pressed. Error text is rendered in `locale`.
    Submit { locale: Locale },

    /// Logout: back to a blank form.
    Clear,
}

impl Intent for SessionIntent {}
