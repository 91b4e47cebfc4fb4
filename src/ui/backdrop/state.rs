use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::transform::Style;
use crate::ui::mvi::UiState;
use crate::ui::theme::{mix, Gradient};

/// Base gradient plus the overlay being faded in.
///
/// `generation` increases with every `Begin`; only a `Commit` carrying the
/// current generation can replace the base.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropState {
    pub base: Gradient,
    pub incoming: Option<Gradient>,
    /// Target opacity of the overlay: 1.0 while fading in, 0.0 once committed.
    pub incoming_opacity: f32,
    pub generation: u64,
    pub started_at: Option<Instant>,
}

impl Default for BackdropState {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl UiState for BackdropState {}

impl BackdropState {
    pub fn new(style: Style) -> Self {
        Self {
            base: Gradient::for_style(style),
            incoming: None,
            incoming_opacity: 0.0,
            generation: 0,
            started_at: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.incoming.is_some() && self.incoming_opacity > 0.0
    }

    /// Effective overlay opacity at `now`, ramping linearly over `duration`.
    pub fn overlay_alpha(&self, now: Instant, duration: Duration) -> f32 {
        if !self.is_transitioning() {
            return 0.0;
        }
        let Some(started_at) = self.started_at else {
            return self.incoming_opacity;
        };
        if duration.is_zero() {
            return self.incoming_opacity;
        }
        let progress = now.saturating_duration_since(started_at).as_secs_f32()
            / duration.as_secs_f32();
        progress.clamp(0.0, 1.0) * self.incoming_opacity
    }

    /// Colour at gradient position `t`, with the overlay blended on top.
    pub fn color_at(&self, t: f32, now: Instant, duration: Duration) -> Color {
        let base = self.base.color_at(t);
        match self.incoming {
            Some(incoming) => mix(base, incoming.color_at(t), self.overlay_alpha(now, duration)),
            None => base,
        }
    }
}
