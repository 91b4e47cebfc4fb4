use ratatui::style::Color;

use crate::transform::Style;

pub const TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const TEXT_MUTED: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const FIELD_BORDER: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const FOCUS_BORDER: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_FG: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0x4d, 0x4f);

const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Darkening applied behind the form panel.
pub const PANEL_SHADE: f32 = 0.4;
/// Lightening applied behind the result box.
pub const RESULT_TINT: f32 = 0.15;

/// Two-stop diagonal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

/// Deep navy to cyan.
pub const FORMAL_GRADIENT: Gradient = Gradient {
    from: Color::Rgb(0x0f, 0x20, 0x27),
    to: Color::Rgb(0x2c, 0x53, 0x64),
};

/// Dreamy pinks.
pub const POETIC_GRADIENT: Gradient = Gradient {
    from: Color::Rgb(0xff, 0x75, 0x8c),
    to: Color::Rgb(0xff, 0x7e, 0xb3),
};

/// Warm tangerine to coral.
pub const HUMOROUS_GRADIENT: Gradient = Gradient {
    from: Color::Rgb(0xff, 0x99, 0x66),
    to: Color::Rgb(0xff, 0x5e, 0x62),
};

impl Gradient {
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Formal => FORMAL_GRADIENT,
            Style::Poetic => POETIC_GRADIENT,
            Style::Humorous => HUMOROUS_GRADIENT,
        }
    }

    /// Colour at position `t` in `[0, 1]` along the gradient.
    pub fn color_at(self, t: f32) -> Color {
        mix(self.from, self.to, t)
    }
}

/// Linear blend from `a` to `b`. Non-RGB colours snap at the midpoint.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => Color::Rgb(
            lerp_channel(ar, br, t),
            lerp_channel(ag, bg, t),
            lerp_channel(ab, bb, t),
        ),
        _ if t < 0.5 => a,
        _ => b,
    }
}

pub fn shade(color: Color, amount: f32) -> Color {
    mix(color, BLACK, amount)
}

pub fn tint(color: Color, amount: f32) -> Color {
    mix(color, WHITE, amount)
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
