//! Reducer for the login session.

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::SessionState;
use super::validation::authenticate;

/// Reducer for session state transitions.
///
/// Pure function. Logging of login outcomes happens in the controller,
/// which knows which intent it dispatched.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetUsername(username) => SessionState {
                username,
                error_message: String::new(),
                ..state
            },

            SessionIntent::SetPassword(password) => SessionState {
                password,
                error_message: String::new(),
                ..state
            },

            SessionIntent::Submit { locale } => {
                match authenticate(&state.username, &state.password) {
                    Ok(()) => SessionState {
                        is_logged_in: true,
                        error_message: String::new(),
                        ..state
                    },
                    Err(err) => SessionState {
                        error_message: err.message(locale).to_string(),
                        ..state
                    },
                }
            }

            SessionIntent::Clear => SessionState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    fn submit(username: &str, password: &str) -> SessionState {
        let state = SessionState {
            username: username.to_string(),
            password: password.to_string(),
            ..SessionState::default()
        };
        SessionReducer::reduce(state, SessionIntent::Submit { locale: Locale::Zh })
    }

    #[test]
    fn set_username_clears_error() {
        let state = submit("", "");
        assert!(state.has_error());

        let new = SessionReducer::reduce(state, SessionIntent::SetUsername("x".into()));
        assert_eq!(new.username, "x");
        assert_eq!(new.error_message, "");
    }

    #[test]
    fn set_password_clears_error_and_keeps_username() {
        let state = submit("wrong", "wrong");
        let new = SessionReducer::reduce(state, SessionIntent::SetPassword("123".into()));
        assert_eq!(new.username, "wrong");
        assert_eq!(new.password, "123");
        assert!(!new.has_error());
    }

    #[test]
    fn empty_submit_reports_both_missing() {
        let state = submit("", "");
        assert_eq!(state.error_message, "用户名和密码不能为空");
        assert!(!state.is_logged_in);
    }

    #[test]
    fn valid_submit_logs_in() {
        let state = submit("test", "123");
        assert!(state.is_logged_in);
        assert_eq!(state.error_message, "");
        assert_eq!(state.username, "test");
    }

    #[test]
    fn wrong_case_is_rejected() {
        let state = submit("Test", "123");
        assert_eq!(state.error_message, "用户名或密码错误");
        assert!(!state.is_logged_in);
    }

    #[test]
    fn failed_submit_keeps_entered_credentials() {
        let state = submit("wrong", "pw");
        assert_eq!(state.username, "wrong");
        assert_eq!(state.password, "pw");
    }

    #[test]
    fn english_locale_uses_english_text() {
        let state = SessionState {
            username: "test".into(),
            ..SessionState::default()
        };
        let new = SessionReducer::reduce(state, SessionIntent::Submit { locale: Locale::En });
        assert_eq!(new.error_message, "password required");
    }

    #[test]
    fn clear_returns_default() {
        let state = submit("test", "123");
        let new = SessionReducer::reduce(state, SessionIntent::Clear);
        assert_eq!(new, SessionState::default());
    }
}
