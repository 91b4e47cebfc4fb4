use crate::ui::theme::{FIELD_BORDER, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "AI Quote Translator";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let line = Line::from(Span::styled(TITLE, title_style));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(FIELD_BORDER)),
        )
    }
}
