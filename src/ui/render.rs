use std::time::{Duration, Instant};

use crate::transform::Style as Tone;
use crate::ui::app::App;
use crate::ui::backdrop::BackdropState;
use crate::ui::footer::Footer;
use crate::ui::form::{Field, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{form_layout, layout_regions};
use crate::ui::theme::{
    shade, tint, BUTTON_BG, BUTTON_FG, FIELD_BORDER, FOCUS_BORDER, PANEL_SHADE, RESULT_TINT,
    STATUS_ERROR, TEXT, TEXT_MUTED,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "e.g., Life is like riding a bicycle...";
const CARET: &str = "▏";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(
        BackdropWidget {
            state: app.backdrop(),
            now: Instant::now(),
            duration: app.transition_duration(),
        },
        area,
    );

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().widget(), header);

    let form = app.form();
    let regions = form_layout(body);
    recolor(frame.buffer_mut(), regions.panel, |bg| shade(bg, PANEL_SHADE));

    frame.render_widget(label("Enter a quote:"), regions.quote_label);
    frame.render_widget(quote_field(form, regions.quote), regions.quote);
    frame.render_widget(label("Choose style:"), regions.style_label);
    frame.render_widget(style_selector(form), regions.style);
    frame.render_widget(submit_button(form), regions.button);

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true }),
            regions.message,
        );
    } else if let Some(result) = &form.result {
        recolor(frame.buffer_mut(), regions.message, |bg| tint(bg, RESULT_TINT));
        frame.render_widget(
            result_view(result, form.result_scroll, regions.message),
            regions.message,
        );
    }

    frame.render_widget(Footer::new(form.is_loading()), footer);
}

/// Text rows of the result region inside `message`.
pub fn result_viewport(message: Rect) -> Rect {
    result_block(0, 0).inner(message)
}

/// How many wrapped rows of `text` do not fit in the result region.
pub fn result_overflow(text: &str, message: Rect) -> u16 {
    let viewport = result_viewport(message);
    let rows = result_body(text).line_count(viewport.width);
    overflow_rows(rows, viewport.height)
}

fn overflow_rows(rows: usize, visible: u16) -> u16 {
    u16::try_from(rows.saturating_sub(usize::from(visible))).unwrap_or(u16::MAX)
}

fn result_body(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(TEXT).add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: false })
}

/// The bottom row always carries the scroll hints, empty or not, so the
/// viewport height does not depend on the scroll position.
fn result_block(scroll: u16, overflow: u16) -> Block<'static> {
    let hint = Style::default().fg(TEXT_MUTED);
    let up = if scroll > 0 { "▲ PgUp" } else { "" };
    let down = if scroll < overflow { "PgDn ▼" } else { "" };
    Block::default()
        .padding(Padding::horizontal(1))
        .title_bottom(Line::styled(up, hint).left_aligned())
        .title_bottom(Line::styled(down, hint).right_aligned())
}

fn result_view(text: &str, scroll: u16, message: Rect) -> Paragraph<'_> {
    let overflow = result_overflow(text, message);
    let scroll = scroll.min(overflow);
    result_body(text)
        .block(result_block(scroll, overflow))
        .scroll((scroll, 0))
}

/// Paints the diagonal base gradient with the fading overlay blended on top.
struct BackdropWidget<'a> {
    state: &'a BackdropState,
    now: Instant,
    duration: Duration,
}

impl Widget for BackdropWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span_x = f32::from(area.width.saturating_sub(1).max(1));
        let span_y = f32::from(area.height.saturating_sub(1).max(1));
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Top-left to bottom-right, like a 135deg CSS gradient.
                let t = (f32::from(x - area.x) / span_x + f32::from(y - area.y) / span_y) / 2.0;
                let color = self.state.color_at(t, self.now, self.duration);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(color);
                }
            }
        }
    }
}

fn recolor(buf: &mut Buffer, area: Rect, f: impl Fn(ratatui::style::Color) -> ratatui::style::Color) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = cell.bg;
                cell.set_bg(f(bg));
            }
        }
    }
}

fn label(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        text,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn field_border(form: &FormState, field: Field) -> Style {
    if form.focus == field && !form.is_loading() {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(FIELD_BORDER)
    }
}

fn quote_field(form: &FormState, area: Rect) -> Paragraph<'_> {
    let focused = form.focus == Field::Quote && !form.is_loading();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(form, Field::Quote));

    if form.quote.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(CARET, Style::default().fg(TEXT)));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC | Modifier::DIM),
        ));
        return Paragraph::new(Line::from(spans)).block(block);
    }

    let mut text_style = Style::default().fg(TEXT);
    if form.is_loading() {
        text_style = text_style.add_modifier(Modifier::DIM);
    }
    let mut text = Text::styled(form.quote.as_str(), text_style);
    // `Text` splits on lines and drops the empty line after a trailing newline.
    if form.quote.ends_with('\n') {
        text.lines.push(Line::default());
    }
    if focused {
        match text.lines.last_mut() {
            Some(line) => line.push_span(Span::styled(CARET, Style::default().fg(TEXT))),
            None => text.lines.push(Line::from(CARET)),
        }
    }

    // Keep the end of the quote in view, counting wrapped rows.
    let inner = block.inner(area);
    let body = Paragraph::new(text).wrap(Wrap { trim: false });
    let scroll = overflow_rows(body.line_count(inner.width), inner.height);
    body.block(block).scroll((scroll, 0))
}

fn style_selector(form: &FormState) -> Paragraph<'static> {
    let focused = form.focus == Field::Style && !form.is_loading();
    let mut spans = Vec::new();
    spans.push(Span::styled(
        if focused { "◀ " } else { "  " },
        Style::default().fg(TEXT),
    ));
    for (idx, tone) in Tone::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let name = format!(" {} ", tone.display_name());
        let mut style = if tone == form.style {
            Style::default()
                .fg(BUTTON_FG)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        if form.is_loading() {
            style = style.add_modifier(Modifier::DIM);
        }
        spans.push(Span::styled(name, style));
    }
    spans.push(Span::styled(
        if focused { " ▶" } else { "  " },
        Style::default().fg(TEXT),
    ));
    Paragraph::new(Line::from(spans))
}

fn submit_button(form: &FormState) -> Paragraph<'static> {
    let caption = if form.is_loading() {
        "Translating..."
    } else {
        "Transform Quote"
    };
    let mut style = Style::default()
        .fg(BUTTON_FG)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    if form.is_loading() {
        style = style.add_modifier(Modifier::DIM);
    } else if form.focus == Field::Submit {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Paragraph::new(Line::from(Span::styled(format!("  {caption}  "), style)))
        .alignment(Alignment::Center)
}
