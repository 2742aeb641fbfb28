use crate::ui::mvi::UiState;

/// Credentials being entered plus the outcome of the last login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub username: String,
    pub password: String,
    /// Empty when there is nothing to show.
    pub error_message: String,
    pub is_logged_in: bool,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
