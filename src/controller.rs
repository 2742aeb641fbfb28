//! Owner of the session and counter state.
//!
//! Every mutation goes through a reducer. The controller adds the one rule
//! that spans both states: logging out also clears the counter.

use serde::Serialize;

use crate::config::Locale;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use crate::ui::session::{authenticate, LoginError, SessionIntent, SessionReducer, SessionState};

/// Which screen the session currently maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Home,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, Default)]
pub struct LoginController {
    session: SessionState,
    counter: CounterState,
    locale: Locale,
}

impl LoginController {
    pub fn new(locale: Locale) -> Self {
        Self {
            session: SessionState::default(),
            counter: CounterState::default(),
            locale,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_logged_in {
            Screen::Home
        } else {
            Screen::Login
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::SetUsername(username.into())
        );
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::SetPassword(password.into())
        );
    }

    /// Validates the entered credentials.
    ///
    /// The outcome is always reflected in the session state; the returned
    /// result only mirrors it for callers that want the typed reason.
    pub fn login(&mut self) -> Result<(), LoginError> {
        let outcome = authenticate(&self.session.username, &self.session.password);
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::Submit {
                locale: self.locale
            }
        );
        match outcome {
            Ok(()) => tracing::info!(username = %self.session.username, "Login succeeded"),
            Err(err) => tracing::debug!(reason = err.kind(), "Login rejected"),
        }
        outcome
    }

    /// Ends the session and clears the counter.
    pub fn logout(&mut self) {
        if self.session.is_logged_in {
            tracing::info!(username = %self.session.username, "Logged out");
        }
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Clear);
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Reset);
    }

    pub fn increment_click(&mut self) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Increment);
        tracing::trace!(click_count = self.counter.click_count, "Click");
    }

    /// Same as `clicks` calls to `increment_click`, in one step.
    pub fn increment_click_by(&mut self, clicks: u64) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Add(clicks));
        tracing::trace!(click_count = self.counter.click_count, clicks, "Clicks");
    }

    pub fn reset_count(&mut self) {
        dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Reset);
    }

    /// Serializable view of the current state. The password is omitted.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen(),
            username: self.session.username.clone(),
            error_message: self.session.error_message.clone(),
            is_logged_in: self.session.is_logged_in,
            click_count: self.counter.click_count,
        }
    }
}

/// Point-in-time view of the controller, as printed by script mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub username: String,
    pub error_message: String,
    pub is_logged_in: bool,
    pub click_count: u64,
}
