//! Model-View-Intent primitives shared by the form and the backdrop.
//!
//! ```text
//! key / reply / timer ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                               │
//!          └───────────────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place state changes. Side effects (HTTP calls,
//! timers) are started by `App` and come back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
