use crate::ui::theme::{FIELD_BORDER, TEXT, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

/// Key and the action it triggers.
type Hint = (&'static str, &'static str);

const IDLE_HINTS: &[Hint] = &[
    ("Tab", "next field"),
    ("←/→", "style"),
    ("Ctrl+S", "submit"),
    ("Ctrl+U", "clear"),
    ("PgUp/PgDn", "scroll result"),
    ("Esc", "quit"),
];
const LOADING_HINTS: &[Hint] = &[("PgUp/PgDn", "scroll result"), ("Esc", "quit")];

/// Bottom bar: key hints for the current mode on the left, version on the right.
pub struct Footer {
    loading: bool,
}

impl Footer {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }

    fn hints(&self) -> Line<'static> {
        let key_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let action_style = Style::default().fg(TEXT_MUTED);

        let mut spans = vec![Span::raw(" ")];
        if self.loading {
            spans.push(Span::styled(
                "Translating...  ",
                Style::default().fg(TEXT).add_modifier(Modifier::ITALIC),
            ));
        }
        let hints = if self.loading { LOADING_HINTS } else { IDLE_HINTS };
        for (idx, (key, action)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", action_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {action}"), action_style));
        }
        Line::from(spans)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(FIELD_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let version_width = u16::try_from(VERSION.chars().count()).unwrap_or(u16::MAX);
        let [hints, version] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(version_width)])
                .areas(inner);

        Paragraph::new(self.hints()).render(hints, buf);
        Paragraph::new(Line::styled(
            VERSION,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        ))
        .right_aligned()
        .render(version, buf);
    }
}
