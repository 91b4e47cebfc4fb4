use std::time::Instant;

use crate::ui::mvi::Intent;
use crate::ui::theme::Gradient;

#[derive(Debug, Clone)]
pub enum BackdropIntent {
    /// Put `target` on the overlay at full opacity and start fading it in.
    Begin { target: Gradient, started_at: Instant },
    /// The transition timer for `generation` expired.
    Commit { generation: u64 },
}

impl Intent for BackdropIntent {}
