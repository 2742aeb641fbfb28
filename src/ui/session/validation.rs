//! Credential validation.
//!
//! There is exactly one account. Comparison is exact: case-sensitive, no
//! trimming, no normalization.

use thiserror::Error;

use crate::config::Locale;

const VALID_USERNAME: &str = "test";
const VALID_PASSWORD: &str = "123";

/// Reasons a login attempt is rejected, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username and password required")]
    MissingCredentials,
    #[error("username required")]
    MissingUsername,
    #[error("password required")]
    MissingPassword,
    #[error("invalid username or password")]
    InvalidCredentials,
}

impl LoginError {
    /// User-facing text for the error line under the form.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (LoginError::MissingCredentials, Locale::Zh) => "用户名和密码不能为空",
            (LoginError::MissingUsername, Locale::Zh) => "用户名不能为空",
            (LoginError::MissingPassword, Locale::Zh) => "密码不能为空",
            (LoginError::InvalidCredentials, Locale::Zh) => "用户名或密码错误",
            (LoginError::MissingCredentials, Locale::En) => "username and password required",
            (LoginError::MissingUsername, Locale::En) => "username required",
            (LoginError::MissingPassword, Locale::En) => "password required",
            (LoginError::InvalidCredentials, Locale::En) => "invalid username or password",
        }
    }

    /// Stable identifier for logs and script output.
    pub fn kind(&self) -> &'static str {
        match self {
            LoginError::MissingCredentials => "missing_credentials",
            LoginError::MissingUsername => "missing_username",
            LoginError::MissingPassword => "missing_password",
            LoginError::InvalidCredentials => "invalid_credentials",
        }
    }
}

/// Checks that both fields are filled in.
pub fn validate_input(username: &str, password: &str) -> Result<(), LoginError> {
    match (username.is_empty(), password.is_empty()) {
        (true, true) => Err(LoginError::MissingCredentials),
        (true, false) => Err(LoginError::MissingUsername),
        (false, true) => Err(LoginError::MissingPassword),
        (false, false) => Ok(()),
    }
}

pub fn is_valid_credentials(username: &str, password: &str) -> bool {
    username == VALID_USERNAME && password == VALID_PASSWORD
}

/// Full login check: presence first, then the credential match.
pub fn authenticate(username: &str, password: &str) -> Result<(), LoginError> {
    validate_input(username, password)?;
    if is_valid_credentials(username, password) {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
