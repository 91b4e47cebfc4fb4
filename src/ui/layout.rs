use ratatui::layout::{Constraint, Layout, Rect};

const PANEL_MAX_WIDTH: u16 = 64;
const QUOTE_HEIGHT: u16 = 6;

/// Regions of the form panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub panel: Rect,
    pub quote_label: Rect,
    pub quote: Rect,
    pub style_label: Rect,
    pub style: Rect,
    pub button: Rect,
    pub message: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Centered panel spanning the height of `body`, split into the form's rows.
///
/// The message region takes whatever height the fixed rows leave over.
pub fn form_layout(body: Rect) -> FormLayout {
    let width = body.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
    let panel = centered_rect_by_size(body, width, body.height);
    let inner = Rect {
        x: panel.x.saturating_add(2),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(4),
        height: panel.height.saturating_sub(2),
    };

    let [quote_label, quote, _, style_label, style, _, button, _, message] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(QUOTE_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    FormLayout {
        panel,
        quote_label,
        quote,
        style_label,
        style,
        button,
        message,
    }
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
