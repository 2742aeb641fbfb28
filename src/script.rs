//! Headless driver: runs controller commands from a text source.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. Text arguments are taken verbatim after a single separating
//! space, so `username  x` sets the username to " x". Leading indentation
//! before the command keyword is ignored.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::controller::LoginController;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: invalid click count '{value}'")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: '{command}' takes no arguments")]
    UnexpectedArgument { line: usize, command: String },

    #[error("script I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Username(String),
    Password(String),
    Login,
    Logout,
    Click(u64),
    Reset,
    State,
}

/// Parses a single line. `Ok(None)` means the line carries no command.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line, None),
    };

    let no_args = |command: Command| match rest {
        Some(rest) if !rest.trim().is_empty() => Err(ScriptError::UnexpectedArgument {
            line: line_no,
            command: keyword.to_string(),
        }),
        _ => Ok(Some(command)),
    };

    match keyword {
        "username" => Ok(Some(Command::Username(rest.unwrap_or("").to_string()))),
        "password" => Ok(Some(Command::Password(rest.unwrap_or("").to_string()))),
        "login" => no_args(Command::Login),
        "logout" => no_args(Command::Logout),
        "reset" => no_args(Command::Reset),
        "state" => no_args(Command::State),
        "click" => match rest.map(str::trim).filter(|value| !value.is_empty()) {
            None => Ok(Some(Command::Click(1))),
            Some(value) => value
                .parse()
                .map(|count| Some(Command::Click(count)))
                .map_err(|_| ScriptError::InvalidCount {
                    line: line_no,
                    value: value.to_string(),
                }),
        },
        other => Err(ScriptError::UnknownCommand {
            line: line_no,
            command: other.to_string(),
        }),
    }
}

/// Applies one command. `state` writes a JSON line to `out`.
pub fn apply(
    controller: &mut LoginController,
    command: Command,
    out: &mut impl Write,
) -> Result<(), ScriptError> {
    match command {
        Command::Username(value) => controller.set_username(value),
        Command::Password(value) => controller.set_password(value),
        Command::Login => {
            // Rejections are already recorded in the session's error message.
            let _ = controller.login();
        }
        Command::Logout => controller.logout(),
        Command::Click(count) => controller.increment_click_by(count),
        Command::Reset => controller.reset_count(),
        Command::State => {
            serde_json::to_writer(&mut *out, &controller.snapshot())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Runs every command from `input`, stopping at the first bad line.
pub fn run(
    controller: &mut LoginController,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), ScriptError> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if let Some(command) = parse_line(line_no, &line)? {
            tracing::debug!(line = line_no, ?command, "Script command");
            apply(controller, command, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   ").unwrap(), None);
        assert_eq!(parse_line(3, "# login").unwrap(), None);
    }

    #[test]
    fn text_arguments_are_verbatim() {
        assert_eq!(
            parse_line(1, "username  test ").unwrap(),
            Some(Command::Username(" test ".to_string()))
        );
        assert_eq!(
            parse_line(1, "password").unwrap(),
            Some(Command::Password(String::new()))
        );
    }

    #[test]
    fn click_defaults_to_one() {
        assert_eq!(parse_line(1, "click").unwrap(), Some(Command::Click(1)));
        assert_eq!(parse_line(1, "click 5").unwrap(), Some(Command::Click(5)));
    }

    #[test]
    fn bad_click_count_reports_line() {
        let err = parse_line(7, "click many").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidCount { line: 7, .. }));
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_line(3, "jump").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown command 'jump'");
    }

    #[test]
    fn argument_on_bare_command_is_rejected() {
        let err = parse_line(2, "login now").unwrap_err();
        assert!(matches!(err, ScriptError::UnexpectedArgument { line: 2, .. }));
    }

    #[test]
    fn indented_commands_keep_argument_text() {
        assert_eq!(parse_line(2, "  login").unwrap(), Some(Command::Login));
        assert_eq!(
            parse_line(3, "\tusername  x").unwrap(),
            Some(Command::Username(" x".to_string()))
        );
        assert_eq!(parse_line(4, "   # note").unwrap(), None);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        assert_eq!(parse_line(1, "login\r").unwrap(), Some(Command::Login));
    }
}
