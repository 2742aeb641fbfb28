use crate::controller::Screen;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, stack_rows, FORM_WIDTH};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FIELD_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MASK: char = '•';

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Login => draw_login(frame, app, body),
        Screen::Home => draw_home(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app.labels(), app.screen(), footer), footer);
}

fn draw_login(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let labels = app.labels();
    let session = app.controller().session();
    let form = centered_rect_by_size(FORM_WIDTH, 11, body);
    let rows = stack_rows(form, &[3, 3, 1, 1, 3]);

    let masked = mask(&session.password);
    let fields = [
        (Focus::Username, labels.username_hint, session.username.as_str(), rows[0]),
        (Focus::Password, labels.password_hint, masked.as_str(), rows[1]),
    ];
    for (focus, hint, text, rect) in fields {
        let focused = app.focus() == focus;
        frame.render_widget(text_field(hint, text, focused), rect);
        if focused && app.cursor_on() && rect.width > 2 && rect.height > 2 {
            let offset = Span::raw(text).width() as u16;
            let x = rect.x + 1 + offset.min(rect.width.saturating_sub(3));
            frame.set_cursor_position((x, rect.y + 1));
        }
    }

    if session.has_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            session.error_message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
        frame.render_widget(error, rows[2]);
    }

    frame.render_widget(
        button(labels.login_button, app.focus() == Focus::LoginButton, true),
        rows[4],
    );
}

fn draw_home(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let labels = app.labels();
    let count = app.controller().counter().click_count;
    let panel = centered_rect_by_size(FORM_WIDTH, 11, body);
    let rows = stack_rows(panel, &[1, 1, 3, 3, 3]);

    let count_line = Paragraph::new(Line::from(labels.click_count_line(count)))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(count_line, rows[0]);

    let focus = app.focus();
    frame.render_widget(
        button(labels.click_button, focus == Focus::ClickButton, true),
        rows[2],
    );
    frame.render_widget(
        button(labels.reset_button, focus == Focus::ResetButton, false),
        rows[3],
    );
    let logout = Paragraph::new(Line::from(labels.logout_button))
        .alignment(Alignment::Center)
        .style(focus_style(
            Style::default().fg(STATUS_ERROR),
            focus == Focus::LogoutButton,
        ))
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(logout, rows[4]);
}

/// Replaces every character with a bullet.
pub fn mask(password: &str) -> String {
    password.chars().map(|_| MASK).collect()
}

fn text_field<'a>(hint: &'a str, text: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { FIELD_BORDER };
    Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(hint)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn button(label: &str, focused: bool, filled: bool) -> Paragraph<'_> {
    let base = if filled {
        Style::default().fg(HEADER_TEXT).bg(ACCENT)
    } else {
        Style::default().fg(ACCENT)
    };
    Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(focus_style(base, focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused { HEADER_TEXT } else { ACCENT })),
        )
}

fn focus_style(base: Style, focused: bool) -> Style {
    if focused {
        let style = base.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        if base.bg.is_none() {
            style.bg(ACTIVE_HIGHLIGHT)
        } else {
            style
        }
    } else {
        base
    }
}
