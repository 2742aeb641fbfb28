use crate::controller::Screen;
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let labels = app.labels();
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (title, dot_style) = match app.screen() {
            Screen::Login => (labels.login_title, Style::default().fg(STATUS_ERROR)),
            Screen::Home => (labels.home_title, Style::default().fg(STATUS_OK)),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", dot_style),
            Span::styled("  ", text_style),
            Span::styled(title, text_style.add_modifier(Modifier::BOLD)),
        ];
        if app.screen() == Screen::Home {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!(
                    "{}: {}",
                    labels.signed_in_as,
                    app.controller().session().username
                ),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
